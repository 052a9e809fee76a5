//! Load the `[env]` table from `$XDG_CONFIG_HOME/<app>/config.toml`.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::LoadError;

#[derive(serde::Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    env: HashMap<String, String>,
}

/// `$XDG_CONFIG_HOME` is honored explicitly so it also works on platforms
/// where the `dirs` crate resolves the config dir elsewhere.
fn config_path(app_name: &str) -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)?;
    let path = base.join(app_name).join("config.toml");
    path.is_file().then_some(path)
}

/// Returns the `[env]` entries. A missing file or missing section yields an empty map.
pub fn load_env_map(app_name: &str) -> Result<HashMap<String, String>, LoadError> {
    let Some(path) = config_path(app_name) else {
        return Ok(HashMap::new());
    };
    let content = std::fs::read_to_string(&path).map_err(LoadError::XdgRead)?;
    let config: ConfigFile = toml::from_str(&content)?;
    Ok(config.env)
}
