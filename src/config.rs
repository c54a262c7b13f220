use std::env;
use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

use crate::error::StartupError;

#[derive(Debug, Clone)]
pub struct Config {
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub db_sslmode: PgSslMode,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, StartupError> {
        Ok(Self {
            db_host: required("DB_HOST")?,
            db_port: parsed("DB_PORT")?,
            db_user: required("DB_USER")?,
            db_password: required("DB_PASSWORD")?,
            db_name: required("DB_NAME")?,
            db_sslmode: parsed("DB_SSLMODE")?,
            port: parsed("PORT")?,
        })
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name)
            .ssl_mode(self.db_sslmode)
    }
}

fn required(key: &'static str) -> Result<String, StartupError> {
    env::var(key).map_err(|_| StartupError::MissingVar(key))
}

fn parsed<T: FromStr>(key: &'static str) -> Result<T, StartupError> {
    required(key)?
        .parse()
        .map_err(|_| StartupError::InvalidVar(key))
}
