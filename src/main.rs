use palindrome_checker::app::{self, runner::EXIT_FAILURE, Invocation};
use palindrome_checker::utils::logger;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let parsed = app::parse_args(std::env::args_os());

    // 初始化日誌
    let verbose = matches!(&parsed, Ok(Invocation::Check(config)) if config.verbose);
    logger::init_cli_logger(verbose);

    let stdout = io::stdout();
    let stderr = io::stderr();
    match app::dispatch(parsed, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            tracing::error!("❌ Palindrome check failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
