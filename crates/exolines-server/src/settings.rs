use exolines_core::{Error, Result};
use std::env;
use std::net::SocketAddr;

const ENV_HOST: &str = "EXOLINES_HOST";
const ENV_PORT: &str = "EXOLINES_PORT";
const ENV_DEBUG: &str = "EXOLINES_DEBUG";
const ENV_LOG: &str = "EXOLINES_LOG";

/// Server configuration, read from the environment with sane defaults
#[derive(Debug, Clone)]
pub struct Settings {
	pub host: String,
	pub port: u16,
	pub debug: bool,
	/// Filter directive handed to the tracing subscriber
	pub log_filter: String,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			host: "127.0.0.1".into(),
			port: 8000,
			debug: false,
			log_filter: "info".into(),
		}
	}
}

impl Settings {
	/// Read `EXOLINES_HOST`, `EXOLINES_PORT`, `EXOLINES_DEBUG` and
	/// `EXOLINES_LOG`
	///
	/// Unset variables fall back to defaults; a set but unparseable port
	/// is an error rather than a silent fallback. Debug mode lowers the
	/// default log filter to `debug` unless `EXOLINES_LOG` overrides it.
	pub fn from_env() -> Result<Self> {
		let defaults = Self::default();
		let host = env::var(ENV_HOST).unwrap_or(defaults.host);
		let debug = env::var(ENV_DEBUG).is_ok_and(|raw| raw == "1" || raw == "true");
		let log_filter = env::var(ENV_LOG)
			.unwrap_or_else(|_| if debug { "debug".into() } else { defaults.log_filter });
		let port = match env::var(ENV_PORT) {
			Ok(raw) => raw.parse().map_err(|_| Error::InvalidParameter {
				name: ENV_PORT.into(),
				value: raw,
			})?,
			Err(_) => defaults.port,
		};
		Ok(Self {
			host,
			port,
			debug,
			log_filter,
		})
	}

	pub fn addr(&self) -> Result<SocketAddr> {
		format!("{}:{}", self.host, self.port)
			.parse()
			.map_err(|_| Error::InvalidParameter {
				name: ENV_HOST.into(),
				value: self.host.clone(),
			})
	}
}
