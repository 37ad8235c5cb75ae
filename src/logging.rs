//! stderr logging.
//!
//! Library code logs through `tracing` macros; with the `log` feature enabled
//! and no tracing subscriber installed those events become `log` records,
//! which `env_logger` prints to stderr. stdout carries only the fragment.

use env_logger::Env;
use log::LevelFilter;

/// Map `-v` occurrences to a level. `RUST_LOG` still wins when set.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init(verbosity: u8) {
    let default = level_for(verbosity).to_string().to_ascii_lowercase();
    // A second init (e.g. from tests) is harmless.
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default))
        .format_timestamp(None)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(3), LevelFilter::Trace);
        assert_eq!(level_for(u8::MAX), LevelFilter::Trace);
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(0);
        init(2);
    }
}
