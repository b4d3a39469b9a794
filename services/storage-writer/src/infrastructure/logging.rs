/// ログ基盤モジュール
///
/// save-document Lambdaのログを1行1イベントのJSONで標準出力に書き出す。
/// エントリポイントは呼び出しごとに`invocation`スパン（`request_id`付き）を張るため、
/// 各イベントには`span`フィールドとしてそのスパンが含まれる。
use std::sync::Once;

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// ログサブスクライバー初期化用の同期プリミティブ
static INIT: Once = Once::new();

/// JSON形式のサブスクライバーを構築する
///
/// イベントのフィールドはトップレベルに展開し、現在のスパンを`span`に含める。
fn json_subscriber<W>(env_filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let json_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(writer)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .flatten_event(true)
        .with_current_span(true);

    tracing_subscriber::registry().with(env_filter).with(json_layer)
}

/// Lambda環境向けのログサブスクライバーを初期化する
///
/// フィルターは`RUST_LOG`、未設定ならinfo。
/// 初期化は最初の1回だけ行い、既に別のサブスクライバーが設定されている場合は何もしない。
pub fn init_logging() {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let _ = json_subscriber(env_filter, std::io::stdout).try_init();
    });
}

/// テスト用のログサブスクライバーを初期化する（人間が読みやすい形式）
#[cfg(test)]
pub fn init_test_logging() {
    static TEST_INIT: Once = Once::new();

    TEST_INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            .with_target(true)
            .compact();

        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init();
    });
}
