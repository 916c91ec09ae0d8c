//! Logger setup shared by the binaries

/// Install `env_logger`, defaulting to `info` unless `RUST_LOG` says otherwise.
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let installed = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .try_init()
        .is_ok();

    if installed {
        log::debug!("logger initialised");
    }
}
