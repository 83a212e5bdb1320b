mod loader;
mod model;

pub use loader::{DEFAULT_CONFIG_FILE, load_config};
pub use model::{ApiConfig, Config, FetchConfig, generate_config_template};
