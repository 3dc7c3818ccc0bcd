use std::env;
use std::net::{Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: Option<String>,
    pub port: u16,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// A missing `OPENAI_API_KEY` is not an error here: the gateway still
    /// starts and reports the missing credential on each summarize call.
    pub fn from_env() -> Result<Self, String> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| format!("PORT: {}", e))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            openai_api_key: env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            port,
        })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
