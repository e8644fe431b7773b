use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "ev_cost_calculator=info";
const VERBOSE_FILTER: &str = "ev_cost_calculator=debug,info";

/// 로그 구독자를 설치한다. 우선순위: `RUST_LOG` > `--verbose` > 설정 파일 필터 > 기본값.
pub fn init_logger(verbose: bool, configured: Option<&str>) {
    let fallback = if verbose {
        VERBOSE_FILTER
    } else {
        configured.unwrap_or(DEFAULT_FILTER)
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // 이미 설치된 구독자가 있으면 그대로 둔다.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
