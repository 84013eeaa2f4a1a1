//! Run configuration with defaults matching a bare invocation.
//!
//! [`RunConfig`] captures what the `header` binary can be told on the command
//! line and performs the run via [`run`](RunConfig::run).

use std::io::Write;

use tracing::Level;

use crate::record::Header;
use crate::render::{Format, emit};

/// Configuration for one run of the `header` binary.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Rendering written to the output. Default: [`Format::Debug`].
    pub format: Format,
    /// Number of `-v` flags given. Default: `0` (no logging).
    pub verbosity: u8,
}

impl RunConfig {
    /// Log level implied by [`verbosity`](Self::verbosity), or `None` when
    /// logging should stay off.
    pub fn log_level(&self) -> Option<Level> {
        match self.verbosity {
            0 => None,
            1 => Some(Level::INFO),
            2 => Some(Level::DEBUG),
            _ => Some(Level::TRACE),
        }
    }

    /// Build the sample header and write it to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<(), String> {
        let header = Header::sample();
        tracing::info!(version = Header::VERSION, "built header");
        tracing::debug!(?header, format = ?self.format, "rendering header");
        emit(out, &header, self.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_bare_invocation() {
        let config = RunConfig::default();
        assert_eq!(config.format, Format::Debug);
        assert_eq!(config.verbosity, 0);
        assert!(config.log_level().is_none());
    }

    #[test]
    fn verbosity_maps_to_levels() {
        let level = |verbosity| RunConfig {
            verbosity,
            ..Default::default()
        }
        .log_level();
        assert_eq!(level(1), Some(Level::INFO));
        assert_eq!(level(2), Some(Level::DEBUG));
        assert_eq!(level(3), Some(Level::TRACE));
        assert_eq!(level(9), Some(Level::TRACE));
    }

    #[test]
    fn run_is_deterministic() {
        let config = RunConfig::default();
        let mut first = Vec::new();
        let mut second = Vec::new();
        config.run(&mut first).unwrap();
        config.run(&mut second).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            String::from_utf8(first).unwrap(),
            "Header(HeaderVersionOne { text: \"foo\", signed: -2593, unsigned: 29384 })\n"
        );
    }
}
