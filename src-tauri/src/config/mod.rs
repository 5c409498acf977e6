mod app_config;
mod defaults;

pub use app_config::AppConfig;
