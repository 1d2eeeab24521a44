
/// Installs a test subscriber once so poll-failure warnings are visible
/// when running with `RUST_LOG=botdeck=debug`.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
