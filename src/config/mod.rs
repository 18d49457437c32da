mod loader;
mod types;

pub use loader::{create_default_config, get_config_path, load_config};
pub use types::{AiConfig, Config, CourtConfig, DisplayConfig, KeyBindings};
