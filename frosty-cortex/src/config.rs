use std::env;

use frosty_core::FrostyError;
use secrecy::SecretString;

/// Connection settings for the warehouse session, sourced from the
/// `SNOWFLAKE_*` environment.
#[derive(Clone)]
pub struct WarehouseConfig {
    pub account: String,
    pub user: String,
    pub password: SecretString,
    pub role: String,
    pub warehouse: String,
    pub database: String,
    pub schema: String,
}

impl WarehouseConfig {
    pub fn from_env() -> Result<Self, FrostyError> {
        Ok(Self {
            account: required("SNOWFLAKE_ACCOUNT")?,
            user: required("SNOWFLAKE_USER")?,
            password: SecretString::new(required("SNOWFLAKE_PASSWORD")?),
            role: env::var("SNOWFLAKE_ROLE").unwrap_or_else(|_| "PUBLIC".to_string()),
            warehouse: env::var("SNOWFLAKE_WAREHOUSE")
                .unwrap_or_else(|_| "COMPUTE_WH".to_string()),
            database: env::var("SNOWFLAKE_DATABASE")
                .unwrap_or_else(|_| "pet_store_db".to_string()),
            schema: env::var("SNOWFLAKE_SCHEMA")
                .unwrap_or_else(|_| "pet_store_schema".to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, FrostyError> {
    env::var(name).map_err(|_| FrostyError::InvalidConfig(format!("{name} is not set")))
}
