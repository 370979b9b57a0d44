use tracing_subscriber::EnvFilter;

/// Console logger. Exercise output goes to stdout untouched; progress and
/// diagnostics go through tracing on stderr.
pub fn init_cli_logger(verbose: bool) {
    let default_filter = if verbose {
        "kata_lab=debug,info"
    } else {
        "kata_lab=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
