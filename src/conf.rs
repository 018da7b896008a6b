use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub service_name: String,
    pub listen_port: String,
    pub base_url: String,
    pub database_url: String,
    pub database_pool_max_connections: u32,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // DATABASE_URL is the only required variable; everything else defaults.
        let conf = Config::builder()
            .set_default("service_name", "jobtrack")?
            .set_default("listen_port", "8000")?
            .set_default("base_url", "http://localhost:8000")?
            .set_default("database_pool_max_connections", "5")?
            .add_source(Environment::default())
            .build()?;
        conf.try_deserialize()
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}
