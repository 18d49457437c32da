// Configuration file loading and creation

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::Config;

/// Get the path to the configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("solopong");
    fs::create_dir_all(&path).ok();
    path.push("config.toml");
    path
}

/// Load configuration from file, or create a default file if it doesn't
/// exist. A file that fails to parse degrades to defaults with a warning
/// rather than aborting the game.
pub fn load_config() -> Result<Config> {
    let config_path = get_config_path();

    if config_path.exists() {
        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("reading {}", config_path.display()))?;
        match toml::from_str(&contents) {
            Ok(config) => Ok(config),
            Err(e) => {
                eprintln!("Warning: failed to parse config file: {e}");
                eprintln!("Using default configuration");
                Ok(Config::default())
            }
        }
    } else {
        create_default_config(&config_path)?;
        Ok(Config::default())
    }
}

/// Write a default configuration file with a commented header
pub fn create_default_config(path: &Path) -> Result<()> {
    let toml_string =
        toml::to_string_pretty(&Config::default()).context("serializing default config")?;

    let commented_toml = format!(
        "# Solopong Configuration File\n\
         # Edit this file to customize the court, opponent, and controls.\n\
         # Restart the game for changes to take effect.\n\
         #\n\
         # Key binding format: \"Left\", \"Right\", \"Up\", \"Down\", \"Space\",\n\
         #                     \"Enter\", \"Esc\", or single characters like \"P\".\n\
         #\n\
         # Colors: RGB values from 0-255\n\
         #\n\
         # Opponent styles: \"chase\" (smooth pursuit), \"step\" (dead-zone stepper)\n\n\
         {toml_string}"
    );

    fs::write(path, commented_toml).with_context(|| format!("writing {}", path.display()))?;
    println!("Created default config file at: {}", path.display());
    Ok(())
}
