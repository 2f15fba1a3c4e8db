use std::env::var;

use dotenvy::dotenv;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
}

impl Config {
    pub fn try_parse() -> Result<Config, &'static str> {
        let _ = dotenv();

        Self::from_port_var(var("PORT").ok())
    }

    /// An unset or empty `PORT` falls back to [`DEFAULT_PORT`].
    pub fn from_port_var(port: Option<String>) -> Result<Config, &'static str> {
        let port = match port.as_deref() {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| "PORT env param must be a port number")?,
        };

        Ok(Config { port })
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
