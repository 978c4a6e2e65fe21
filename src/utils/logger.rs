use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 初始化 CLI 日誌，輸出至 stderr，stdout 只留給問候內容
///
/// Without `verbose` only warnings and errors are shown, so a plain run writes nothing to stderr.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

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

pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "greeter=debug,info"
    } else {
        "greeter=warn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_is_quiet() {
        assert_eq!(default_filter(false), "greeter=warn");
        assert_eq!(default_filter(true), "greeter=debug,info");
    }
}
