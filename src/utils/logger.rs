use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// 函式庫與兩個 binary 的 target 名稱
const TARGETS: [&str; 2] = ["stable_match", "toml_match"];

fn directives(level: &str) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}

fn filter_for(level: Option<&str>, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| match level {
        Some(level) => EnvFilter::new(directives(level)),
        None if verbose => EnvFilter::new(format!("{},info", directives("debug"))),
        None => EnvFilter::new(directives("info")),
    })
}

pub fn init_cli_logger(verbose: bool) {
    init_cli_logger_with_level(None, verbose);
}

/// `level` 來自 TOML 的 `[logging] level`，`RUST_LOG` 仍然優先。
pub fn init_cli_logger_with_level(level: Option<&str>, verbose: bool) {
    tracing_subscriber::registry()
        .with(filter_for(level, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(level: Option<&str>) {
    tracing_subscriber::registry()
        .with(filter_for(level, false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .json(), // 一行一筆，方便機器讀取
        )
        .init();
}
