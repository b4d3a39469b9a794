/// ドキュメント保存Lambdaエントリポイント
///
/// 任意のトリガーから呼び出され、固定JSONドキュメントをS3に保存して
/// `{ statusCode: 200, body: "\"Data saved to S3 successfully!\"" }`を返す。
/// 保存に失敗した場合はエラーをそのまま返し、Lambdaランタイムが失敗として報告する。
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use storage_writer::application::SaveDocumentHandler;
use storage_writer::domain::{HandlerResponse, StorageTarget};
use storage_writer::infrastructure::{init_logging, ObjectStore, S3ObjectStore};
use tracing::{info, info_span, Instrument};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    // S3クライアントは実行環境ごとに1回だけ作成し、呼び出し間で共有する
    let store = S3ObjectStore::from_config().await;
    let save_handler = build_save_handler(store);

    let target = save_handler_target();
    info!(
        bucket = target.bucket(),
        key = target.key(),
        "storage-writer Lambda関数を初期化"
    );

    let save_handler = &save_handler;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(save_handler, event).await
    }))
    .await
}

/// 書き込み先は固定（環境変数などでは変更しない）
fn save_handler_target() -> StorageTarget {
    StorageTarget::default()
}

/// 固定の書き込み先を使うハンドラーを作成
fn build_save_handler<S>(store: S) -> SaveDocumentHandler<S>
where
    S: ObjectStore,
{
    SaveDocumentHandler::new(store, save_handler_target())
}

/// Lambda関数のメインハンドラー
///
/// イベントとコンテキストはどちらも処理内容に影響しない。
/// コンテキストのrequest_idはログの相関にのみ使用する。
async fn handler<S>(
    save_handler: &SaveDocumentHandler<S>,
    event: LambdaEvent<Value>,
) -> Result<HandlerResponse, Error>
where
    S: ObjectStore,
{
    let (payload, context) = event.into_parts();
    let span = info_span!("invocation", request_id = %context.request_id);

    async move {
        info!("Lambda呼び出し受信");
        let response = save_handler.handle(&payload).await?;
        info!(status_code = response.status_code, "Lambda呼び出し完了");
        Ok(response)
    }
    .instrument(span)
    .await
}
