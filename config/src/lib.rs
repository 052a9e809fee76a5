//! Load configuration from XDG `config.toml` and project `.env`, then apply to the
//! process environment with priority: **existing env > .env > XDG**.
//!
//! One call at startup (`load_and_apply("stencil", None)`) makes
//! `STENCIL_GENERATOR`, `OPENAI_API_KEY`, `RUST_LOG` etc. available to the
//! rest of the process without each consumer knowing where they came from.

mod dotenv;
mod xdg_toml;

use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("read xdg config: {0}")]
    XdgRead(std::io::Error),
    #[error("parse xdg toml: {0}")]
    XdgParse(#[from] toml::de::Error),
    #[error("read .env: {0}")]
    DotenvRead(std::io::Error),
}

/// Loads the `[env]` table from `$XDG_CONFIG_HOME/<app_name>/config.toml` and the
/// keys from the project `.env`, then sets each one that is **not** already present
/// in the process environment.
///
/// Precedence for a key missing from the environment: `.env` wins over the TOML
/// file; a key already set in the environment is never overwritten.
///
/// * `app_name`: e.g. `"stencil"` — XDG path `~/.config/<app_name>/config.toml`.
/// * `override_dir`: if `Some`, look for `.env` there instead of the current directory.
pub fn load_and_apply(app_name: &str, override_dir: Option<&Path>) -> Result<(), LoadError> {
    let mut merged = xdg_toml::load_env_map(app_name)?;
    merged.extend(dotenv::load_env_map(override_dir).map_err(LoadError::DotenvRead)?);

    for (key, value) in merged {
        if std::env::var_os(&key).is_none() {
            std::env::set_var(&key, value);
        }
    }
    Ok(())
}
