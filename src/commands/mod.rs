pub mod fetch;
pub mod init;
pub mod render;
pub mod stats;
pub mod sum;

pub use fetch::{fetch_records, run_fetch, run_fetch_impl};
pub use init::{run_init, run_init_impl};
pub use render::{run_render, run_render_impl};
pub use stats::{format_stats_text, run_stats, run_stats_impl};
pub use sum::{run_sum, run_sum_impl};
