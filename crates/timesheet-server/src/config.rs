use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

pub struct Config {
    pub db_path: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = var_or("TIMESHEET_PORT", "3000");
        Ok(Self {
            db_path: var_or("TIMESHEET_DB_PATH", "timesheet.db").into(),
            host: var_or("TIMESHEET_HOST", "0.0.0.0"),
            port: port
                .parse()
                .with_context(|| format!("Invalid TIMESHEET_PORT value: {port}"))?,
        })
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}

fn var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}
