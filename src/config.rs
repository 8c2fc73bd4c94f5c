//! Server configuration, read from command-line flags or the environment.

use clap::Parser;

/// Default listening port
pub const DEFAULT_PORT: u16 = 3333;

#[derive(Debug, Clone, Parser)]
#[command(name = "ledger-server")]
#[command(about = "In-memory banking ledger served over HTTP")]
pub struct Config {
    /// Interface to bind
    #[arg(long, env = "LEDGER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl Config {
    /// Bind address in `host:port` form
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Config::command().debug_assert();
    }

    #[test]
    fn test_explicit_flags() {
        let config =
            Config::try_parse_from(["ledger-server", "--host", "127.0.0.1", "--port", "8080"]).unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(Config::try_parse_from(["ledger-server", "--port", "not-a-port"]).is_err());
    }
}
