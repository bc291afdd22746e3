use serde::Deserialize;
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_THRESHOLD_MS: f64 = 180.0;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub telemetry_path: PathBuf,
    pub default_threshold_ms: f64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        Ok(Config {
            bind_addr: env::var("BIND_ADDR")
                .unwrap_or_else(|_| "0.0.0.0".to_string())
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid BIND_ADDR value: {}", e))?,

            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid PORT value: {}", e))?,

            telemetry_path: env::var("TELEMETRY_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("q-vercel-latency.json")),

            default_threshold_ms: match env::var("DEFAULT_THRESHOLD_MS") {
                Ok(raw) => parse_threshold(&raw)?,
                Err(_) => DEFAULT_THRESHOLD_MS,
            },
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_threshold(raw: &str) -> anyhow::Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid DEFAULT_THRESHOLD_MS value: {}", e))?;
    if !value.is_finite() {
        anyhow::bail!("DEFAULT_THRESHOLD_MS must be finite, got {}", raw);
    }
    Ok(value)
}
