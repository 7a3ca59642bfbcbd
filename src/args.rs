//! The CLI interface for the billfold binary.

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

/// billfold: a small personal-finance service.
///
/// Starts an HTTP server with a single placeholder route that renders a demo transaction
/// from the money domain. The real surface of this crate is the library's `model` module.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The port the server listens on.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,
}

impl Args {
    pub fn new(log_level: LevelFilter, port: u16) -> Self {
        Self { log_level, port }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["billfold"]);
        assert_eq!(args.port(), 8080);
        assert_eq!(args.log_level(), LevelFilter::INFO);
    }

    #[test]
    fn test_port_flag() {
        let args = Args::parse_from(["billfold", "--port", "3000"]);
        assert_eq!(args.port(), 3000);
    }
}
