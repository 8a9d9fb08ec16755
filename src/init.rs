use env_logger::Env;

/// 初始化日誌，等級由 `RUST_LOG` 控制（預設 warn），輸出到 stderr
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .try_init();
}
