use env_logger::Env;

/// Installs the stderr logger, filtered by `RUST_LOG` with a default level
/// of `warn`.
pub fn init_logging() {
    let builder_result =
        env_logger::Builder::from_env(Env::default().default_filter_or("warn")).try_init();
    if let Err(err) = builder_result {
        eprintln!("Failed to initialize logger: {}", err);
    }
}
