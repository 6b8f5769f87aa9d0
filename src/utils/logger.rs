use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logs go to stderr so stdout only ever carries the result line.
pub fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("palindrome_checker=debug")
    } else {
        EnvFilter::new("palindrome_checker=warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
