use directories::ProjectDirs;
use elementary::settings::Settings;
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.toml";

pub struct DefaultsConfig {
    pub settings: Settings,
    /// The per-user config file, if the platform has a config directory.
    pub config_path: Option<PathBuf>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            config_path: ProjectDirs::from("app", "elementary", "elementary")
                .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME)),
        }
    }
}
