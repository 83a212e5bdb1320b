//! Axis scales: categorical band positions and logarithmic values.

/// Categorical band scale: maps discrete names to contiguous, padded
/// horizontal ranges. Follows the conventional band layout where both
/// inner padding (between bands) and outer padding (before the first
/// and after the last band) are the same fraction of the step.
#[derive(Debug, Clone)]
pub struct BandScale {
    domain: Vec<String>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// Build a scale over `domain` spanning `range`, with `padding` as
    /// a fraction of the step (0.0 = touching bars).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        let n = domain.len() as f64;
        let span = range.1 - range.0;
        let step = span / (n + padding).max(1.0);
        let bandwidth = step * (1.0 - padding);
        // outer padding on each side is step * padding, centered
        let start = (span - step * (n - padding)).mul_add(0.5, range.0);
        Self {
            domain,
            start,
            step,
            bandwidth,
        }
    }

    /// Left edge of the band for `name`, if it is in the domain.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn position(&self, name: &str) -> Option<f64> {
        let index = self.domain.iter().position(|d| d == name)?;
        Some(self.step.mul_add(index as f64, self.start))
    }

    /// Width of each band.
    #[must_use]
    pub const fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Distance between consecutive band starts.
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn domain(&self) -> &[String] {
        &self.domain
    }
}

/// Base-10 logarithmic scale for bar heights, keeping orders-of-
/// magnitude differences visible. The domain must be positive.
#[derive(Debug, Clone, Copy)]
pub struct LogScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LogScale {
    /// Build a scale mapping `domain` (clamped to be >= f64::MIN_POSITIVE)
    /// onto `range`. For a y-axis, pass range as (bottom, top) with
    /// bottom > top in SVG coordinates.
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let d0 = domain.0.max(f64::MIN_POSITIVE);
        let d1 = if domain.1 > d0 { domain.1 } else { d0 * 10.0 };
        Self {
            domain: (d0, d1),
            range,
        }
    }

    /// Map a value into the range. Values at or below zero clamp to the
    /// domain floor.
    #[must_use]
    pub fn scale(&self, value: f64) -> f64 {
        let value = value.clamp(self.domain.0, self.domain.1);
        let t = (value.log10() - self.domain.0.log10())
            / (self.domain.1.log10() - self.domain.0.log10());
        t.mul_add(self.range.1 - self.range.0, self.range.0)
    }

    /// Tick values: powers of ten inside the domain, padded with 2× and
    /// 5× multiples when fewer than `count` powers fit.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let lo = self.domain.0.log10().ceil() as i32;
        let hi = self.domain.1.log10().floor() as i32;

        let mut ticks: Vec<f64> = (lo..=hi).map(|e| 10.0_f64.powi(e)).collect();

        if ticks.len() < count {
            let mut padded = Vec::new();
            for &power in &ticks {
                for factor in [1.0, 2.0, 5.0] {
                    let candidate = power * factor;
                    if (self.domain.0..=self.domain.1).contains(&candidate) {
                        padded.push(candidate);
                    }
                }
            }
            padded.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            ticks = padded;
        }

        ticks
    }

    #[must_use]
    pub const fn domain(&self) -> (f64, f64) {
        self.domain
    }
}

#[cfg(test)]
#[path = "scale_tests.rs"]
mod tests;
