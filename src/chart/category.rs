//! Category filtering for the pie chart: fixed front-end/back-end
//! language groupings, applied as a pipeline stage before layout.

use crate::snapshot::ChartEntry;

/// Slice count when no filter is active.
pub const UNFILTERED_LIMIT: usize = 6;

const FRONTEND_LANGUAGES: &[&str] = &["JavaScript", "TypeScript", "HTML", "CSS", "SCSS", "Vue"];
const BACKEND_LANGUAGES: &[&str] = &["Python", "PHP", "Ruby", "Java", "Go", "Shell"];

/// A fixed language grouping selectable on the pie chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Frontend,
    Backend,
}

impl Category {
    /// Languages belonging to this category.
    #[must_use]
    pub const fn members(self) -> &'static [&'static str] {
        match self {
            Self::Frontend => FRONTEND_LANGUAGES,
            Self::Backend => BACKEND_LANGUAGES,
        }
    }

    /// Slice count shown while this category is selected.
    #[must_use]
    pub const fn limit(self) -> usize {
        match self {
            Self::Frontend => 4,
            Self::Backend => 3,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Frontend => "FRONTEND",
            Self::Backend => "BACKEND",
        }
    }

    #[must_use]
    pub fn contains(self, language: &str) -> bool {
        self.members().contains(&language)
    }
}

/// Current filter selection. Clicking a category selects it; clicking
/// the selected category again clears back to unfiltered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterState {
    selected: Option<Category>,
}

impl FilterState {
    #[must_use]
    pub const fn selected(self) -> Option<Category> {
        self.selected
    }

    /// Toggle semantics for a category click.
    #[must_use]
    pub fn toggle(self, clicked: Category) -> Self {
        let selected = if self.selected == Some(clicked) {
            None
        } else {
            Some(clicked)
        };
        Self { selected }
    }

    /// The `filter -> truncate` pipeline stage: keep entries matching
    /// the selected category (all entries when none is selected), then
    /// truncate to the applicable top-N. Input order is preserved, so
    /// a descending-sorted input yields the top entries by value.
    #[must_use]
    pub fn apply(self, entries: &[ChartEntry]) -> Vec<ChartEntry> {
        let limit = self.selected.map_or(UNFILTERED_LIMIT, Category::limit);
        entries
            .iter()
            .filter(|entry| {
                self.selected
                    .is_none_or(|category| category.contains(&entry.language))
            })
            .take(limit)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
#[path = "category_tests.rs"]
mod tests;
