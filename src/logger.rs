//! logger.rs
//! Logger setup on top of env_logger.

/// Reads the level from `RUST_LOG`, falling back to `info`. Safe to call more
/// than once; later calls are ignored.
pub fn init_logger() {
    // RUST_LOG wins; otherwise "info"
    let env = env_logger::Env::default().default_filter_or("info");

    // try_init: tests may have installed a logger already
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_secs()
        .try_init();
}
