// 書き込み先
//
// ドキュメントを保存するS3バケット・キーとContent-Typeを表すドメイン値。

/// デフォルトの保存先バケット
pub const DEFAULT_BUCKET: &str = "leumi-shay-task";

/// デフォルトのオブジェクトキー
pub const DEFAULT_OBJECT_KEY: &str = "example_key.json";

/// 保存時に宣言するContent-Type
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// ドキュメントの書き込み先
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageTarget {
    bucket: String,
    key: String,
}

impl StorageTarget {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Content-Typeは常にJSON
    pub fn content_type(&self) -> &'static str {
        JSON_CONTENT_TYPE
    }
}

impl Default for StorageTarget {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKET, DEFAULT_OBJECT_KEY)
    }
}
