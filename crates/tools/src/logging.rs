use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger, honoring `RUST_LOG` when set.
///
/// Without `verbose` only warnings and errors are shown.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_filter(verbose).to_string());
    // A second init only fails because a logger is already installed.
    let _ = Builder::from_env(env).try_init();
}

fn default_filter(verbose: bool) -> LevelFilter {
    if verbose { LevelFilter::Debug } else { LevelFilter::Warn }
}
