//! Diagnostic logging bootstrap.
//!
//! The library only uses the `log` macros; the binary installs
//! `env_logger` once, writing to stderr. `RUST_LOG` wins over the
//! configured level.

use env_logger::{Builder, Env, Target};

/// Install the logger. Repeated calls are ignored.
pub fn init(default_level: &str) {
    let env = Env::default().default_filter_or(default_level);
    let _ = Builder::from_env(env)
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init();
}
