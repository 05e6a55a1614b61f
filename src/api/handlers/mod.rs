use crate::config::settings::AppConfig;

pub mod ranking;

pub struct AppState {
    pub config: AppConfig,
}
