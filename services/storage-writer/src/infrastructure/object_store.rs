//! オブジェクトストレージ操作モジュール
//!
//! ドキュメントの書き込み先となるS3への`PutObject`を抽象化する。
//! - `ObjectStore`トレイト: 書き込み操作の抽象
//! - `S3ObjectStore`: AWS SDK for Rustを使用した実装

use async_trait::async_trait;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use thiserror::Error;
use tracing::{info, warn};

/// オブジェクトストレージ操作のエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ObjectStoreError {
    /// 書き込み権限がない
    #[error("S3アクセス拒否: {0}")]
    AccessDenied(String),
    /// バケットが存在しない
    #[error("S3バケットが存在しません: {0}")]
    NoSuchBucket(String),
    /// その他のAWS SDKエラー（通信失敗、サービス側障害など）
    #[error("AWS S3 APIエラー: {0}")]
    AwsSdkError(String),
}

impl ObjectStoreError {
    /// S3のエラーコードからエラー種別を判定する
    ///
    /// 判定はログとメッセージのためだけに使い、処理の分岐には使わない。
    pub fn from_code(code: Option<&str>, message: impl Into<String>) -> Self {
        let message = message.into();
        match code {
            Some("AccessDenied") => ObjectStoreError::AccessDenied(message),
            Some("NoSuchBucket") => ObjectStoreError::NoSuchBucket(message),
            _ => ObjectStoreError::AwsSdkError(message),
        }
    }

    /// ログ出力用のエラー種別名
    pub fn kind(&self) -> &'static str {
        match self {
            ObjectStoreError::AccessDenied(_) => "access_denied",
            ObjectStoreError::NoSuchBucket(_) => "no_such_bucket",
            ObjectStoreError::AwsSdkError(_) => "aws_sdk",
        }
    }
}

/// 書き込み結果
#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    /// 書き込み先バケット
    pub bucket: String,
    /// 書き込み先キー
    pub key: String,
    /// S3が返したETag（返されない場合はNone）
    pub e_tag: Option<String>,
    /// 書き込んだバイト数
    pub size: usize,
}

/// オブジェクトストレージ操作トレイト（テスト用の抽象化）
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// オブジェクトを書き込む（既存オブジェクトは上書き）
    ///
    /// # 引数
    /// * `bucket` - バケット名
    /// * `key` - オブジェクトキー
    /// * `body` - 書き込むバイト列
    /// * `content_type` - 宣言するContent-Type
    ///
    /// # 戻り値
    /// * `Ok(StoredObject)` - 書き込み結果
    /// * `Err(ObjectStoreError)` - エラー
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<StoredObject, ObjectStoreError>;
}

/// 実際のAWS S3 SDKを使用したオブジェクトストレージ実装
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: S3Client,
}

impl S3ObjectStore {
    /// 新しいS3ObjectStoreを作成
    pub fn new(client: S3Client) -> Self {
        Self { client }
    }

    /// AWS設定からデフォルトのクライアントを作成
    ///
    /// 認証情報・リージョンは実行環境から読み込まれる。
    pub async fn from_config() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(S3Client::new(&config))
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<StoredObject, ObjectStoreError> {
        let size = body.len();

        info!(
            bucket = %bucket,
            key = %key,
            size = size,
            content_type = %content_type,
            "S3 PutObject開始"
        );

        let result = self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await;

        match result {
            Ok(output) => {
                let e_tag = output.e_tag().map(|tag| tag.to_string());

                info!(
                    bucket = %bucket,
                    key = %key,
                    e_tag = e_tag.as_deref().unwrap_or("unknown"),
                    "S3 PutObject成功"
                );

                Ok(StoredObject {
                    bucket: bucket.to_string(),
                    key: key.to_string(),
                    e_tag,
                    size,
                })
            }
            Err(err) => {
                let error = ObjectStoreError::from_code(
                    err.code(),
                    DisplayErrorContext(&err).to_string(),
                );

                warn!(
                    bucket = %bucket,
                    key = %key,
                    error_kind = error.kind(),
                    error = %error,
                    "S3 PutObjectエラー"
                );

                Err(error)
            }
        }
    }
}
