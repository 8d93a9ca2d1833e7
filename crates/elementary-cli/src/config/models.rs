use elementary::settings::SettingsStore;
use elementary::workflows::catalog::CatalogConfig;

pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub settings: SettingsStore,
    pub color_output: bool,
}
