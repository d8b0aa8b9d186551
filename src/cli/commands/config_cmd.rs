//! config command - Get, set, or list configuration values

use super::load_config;
use crate::cli::Context;
use crate::core::config::{Config, ConfigFile, KEYS};
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Print the effective value of a key.
///
/// Unset keys print nothing.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let config = load_config(ctx)?;
    if let Some(value) = config.get(key)? {
        println!("{}", value);
    }
    Ok(())
}

/// Set a key in the global config file.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let path = Config::global_config_path()?;

    let mut file = if path.exists() {
        Config::load_from(Some(path.as_path()), None)
            .context("Failed to load config")?
            .global
    } else {
        ConfigFile::default()
    };

    file.set(key, value)?;
    Config::write_atomic(&path, &file)?;

    output::print(
        format!("set {} = {} in {}", key, value, path.display()),
        ctx.verbosity(),
    );
    Ok(())
}

/// List every key with its effective value.
pub fn list(ctx: &Context) -> Result<()> {
    let config = load_config(ctx)?;
    for key in KEYS {
        match config.get(key)? {
            Some(value) => println!("{} = {}", key, value),
            None => println!("{} = (unset)", key),
        }
    }
    Ok(())
}
