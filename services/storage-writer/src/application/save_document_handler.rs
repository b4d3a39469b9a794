/// ドキュメント保存ハンドラー
///
/// Lambdaが呼び出されるたびに固定ドキュメントを構築し、
/// 書き込み先に上書き保存して成功レスポンスを返す。
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::domain::{Document, HandlerResponse, StorageTarget};
use crate::infrastructure::{ObjectStore, ObjectStoreError};

/// ドキュメント保存ハンドラーのエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SaveDocumentError {
    /// ドキュメントのJSONエンコードに失敗
    #[error("Serialization error: {0}")]
    Serialize(String),
    /// オブジェクトストレージへの書き込みに失敗
    #[error("Storage error: {0}")]
    Storage(#[from] ObjectStoreError),
}

/// 固定ドキュメントをオブジェクトストレージに保存するハンドラー
///
/// イベント内容は処理に使わない。失敗時はリトライせずエラーを返す。
pub struct SaveDocumentHandler<S>
where
    S: ObjectStore,
{
    /// オブジェクトストレージ
    store: S,
    /// 書き込み先
    target: StorageTarget,
}

impl<S> SaveDocumentHandler<S>
where
    S: ObjectStore,
{
    /// 新しいSaveDocumentHandlerを作成
    pub fn new(store: S, target: StorageTarget) -> Self {
        Self { store, target }
    }

    /// 呼び出しを処理
    ///
    /// # 処理フロー
    /// 1. 固定ドキュメントを構築
    /// 2. JSONバイト列にエンコード
    /// 3. Content-Type `application/json`で書き込み先に保存
    /// 4. ステータス200の成功レスポンスを返す
    ///
    /// # 引数
    /// * `event` - 呼び出しイベント（使用しない）
    ///
    /// # 戻り値
    /// * 成功時は`Ok(HandlerResponse)`
    /// * 書き込み失敗時は`Err(SaveDocumentError::Storage)`（レスポンスは生成しない）
    pub async fn handle(&self, event: &Value) -> Result<HandlerResponse, SaveDocumentError> {
        debug!(event_is_null = event.is_null(), "呼び出しイベント受信");

        let document = Document::example();
        let body = document
            .to_json_bytes()
            .map_err(|e| SaveDocumentError::Serialize(e.to_string()))?;

        let stored = self
            .store
            .put_object(
                self.target.bucket(),
                self.target.key(),
                body,
                self.target.content_type(),
            )
            .await
            .map_err(|err| {
                error!(
                    bucket = self.target.bucket(),
                    key = self.target.key(),
                    error_kind = err.kind(),
                    error = %err,
                    "ドキュメント保存失敗"
                );
                err
            })?;

        info!(
            bucket = %stored.bucket,
            key = %stored.key,
            size = stored.size,
            "ドキュメント保存完了"
        );

        Ok(HandlerResponse::saved())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::logging::init_test_logging;
    use crate::infrastructure::object_store::tests::MockObjectStore;
    use serde_json::json;

    // ==================== テストヘルパー ====================

    /// デフォルトの書き込み先でテスト用ハンドラーを作成
    fn create_test_handler() -> (SaveDocumentHandler<MockObjectStore>, MockObjectStore) {
        init_test_logging();
        let store = MockObjectStore::new();
        let handler = SaveDocumentHandler::new(store.clone(), StorageTarget::default());
        (handler, store)
    }

    // ==================== 正常系 ====================

    /// 空オブジェクトのイベントで固定の書き込みと成功レスポンスになる
    #[tokio::test]
    async fn test_handle_empty_event_writes_fixed_object() {
        let (handler, store) = create_test_handler();

        let response = handler.handle(&json!({})).await.unwrap();

        let puts = store.puts();
        assert_eq!(puts.len(), 1);
        assert_eq!(puts[0].bucket, "leumi-shay-task");
        assert_eq!(puts[0].key, "example_key.json");
        assert_eq!(puts[0].body, br#"{"example_key": "example_value"}"#.to_vec());
        assert_eq!(puts[0].content_type, "application/json");

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "\"Data saved to S3 successfully!\"");
    }

    /// イベント内容に関係なく同じ書き込み・同じレスポンスになる
    #[tokio::test]
    async fn test_handle_ignores_event_content() {
        let events = [
            json!({}),
            Value::Null,
            json!({"Records": [{"eventSource": "aws:s3"}]}),
            json!("string event"),
            json!([1, 2, 3]),
        ];

        let (handler, store) = create_test_handler();
        let mut responses = Vec::new();
        for event in &events {
            responses.push(handler.handle(event).await.unwrap());
        }

        assert!(responses.iter().all(|r| *r == HandlerResponse::saved()));

        let puts = store.puts();
        assert_eq!(puts.len(), events.len());
        assert!(puts.windows(2).all(|pair| pair[0] == pair[1]));
    }

    /// 2回続けて呼び出しても保存内容はバイト単位で同一
    #[tokio::test]
    async fn test_handle_twice_stores_identical_bytes() {
        let (handler, store) = create_test_handler();

        handler.handle(&json!({})).await.unwrap();
        let first = store.object("leumi-shay-task", "example_key.json").unwrap();

        handler.handle(&json!({})).await.unwrap();
        let second = store.object("leumi-shay-task", "example_key.json").unwrap();

        assert_eq!(first, second);
    }

    /// N回呼び出しても保存先は1オブジェクトで、1回呼び出した状態と同じ
    #[tokio::test]
    async fn test_handle_is_idempotent() {
        let (once_handler, once_store) = create_test_handler();
        once_handler.handle(&json!({})).await.unwrap();

        let (many_handler, many_store) = create_test_handler();
        for _ in 0..5 {
            many_handler.handle(&json!({})).await.unwrap();
        }

        assert_eq!(many_store.put_count(), 5);
        assert_eq!(many_store.object_count(), 1);
        assert_eq!(
            many_store.object("leumi-shay-task", "example_key.json"),
            once_store.object("leumi-shay-task", "example_key.json")
        );
    }

    /// 渡された書き込み先が使われる
    #[tokio::test]
    async fn test_handle_writes_to_injected_target() {
        init_test_logging();
        let store = MockObjectStore::new();
        let handler = SaveDocumentHandler::new(
            store.clone(),
            StorageTarget::new("other-bucket", "docs/example.json"),
        );

        handler.handle(&json!({})).await.unwrap();

        let puts = store.puts();
        assert_eq!(puts[0].bucket, "other-bucket");
        assert_eq!(puts[0].key, "docs/example.json");
        assert_eq!(puts[0].content_type, "application/json");
    }

    // ==================== 異常系 ====================

    /// 権限エラーはそのまま伝播し、レスポンスは生成されない
    #[tokio::test]
    async fn test_handle_propagates_access_denied() {
        let (handler, store) = create_test_handler();
        store.set_next_error(ObjectStoreError::AccessDenied("Access Denied".to_string()));

        let result = handler.handle(&json!({})).await;

        assert_eq!(
            result.unwrap_err(),
            SaveDocumentError::Storage(ObjectStoreError::AccessDenied(
                "Access Denied".to_string()
            ))
        );
        assert_eq!(store.put_count(), 1);
        assert_eq!(store.object_count(), 0);
    }

    /// 書き込み失敗時にリトライしない
    #[tokio::test]
    async fn test_handle_does_not_retry_on_failure() {
        let (handler, store) = create_test_handler();
        store.set_next_error(ObjectStoreError::AwsSdkError("dispatch failure".to_string()));

        let result = handler.handle(&json!({})).await;

        assert!(matches!(
            result,
            Err(SaveDocumentError::Storage(ObjectStoreError::AwsSdkError(_)))
        ));
        assert_eq!(store.put_count(), 1);
    }

    #[tokio::test]
    async fn test_handle_propagates_missing_bucket() {
        let (handler, store) = create_test_handler();
        store.set_next_error(ObjectStoreError::NoSuchBucket("leumi-shay-task".to_string()));

        let result = handler.handle(&json!({})).await;

        assert!(matches!(
            result,
            Err(SaveDocumentError::Storage(ObjectStoreError::NoSuchBucket(_)))
        ));
    }

    /// 失敗後の呼び出しは通常どおり成功する（状態を持ち越さない）
    #[tokio::test]
    async fn test_handle_recovers_after_failure() {
        let (handler, store) = create_test_handler();
        store.set_next_error(ObjectStoreError::AwsSdkError("timeout".to_string()));

        assert!(handler.handle(&json!({})).await.is_err());
        let response = handler.handle(&json!({})).await.unwrap();

        assert_eq!(response, HandlerResponse::saved());
        assert_eq!(
            store.object("leumi-shay-task", "example_key.json"),
            Some(br#"{"example_key": "example_value"}"#.to_vec())
        );
    }

    // ==================== エラー型 ====================

    #[test]
    fn test_save_document_error_display() {
        let error = SaveDocumentError::Storage(ObjectStoreError::AccessDenied(
            "no permission".to_string(),
        ));
        assert_eq!(error.to_string(), "Storage error: S3アクセス拒否: no permission");

        let error = SaveDocumentError::Serialize("bad".to_string());
        assert_eq!(error.to_string(), "Serialization error: bad");
    }

    #[test]
    fn test_save_document_error_from_object_store_error() {
        let error: SaveDocumentError =
            ObjectStoreError::AwsSdkError("x".to_string()).into();

        assert_eq!(
            error,
            SaveDocumentError::Storage(ObjectStoreError::AwsSdkError("x".to_string()))
        );
    }
}
