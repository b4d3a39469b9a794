/// 保存対象ドキュメント
///
/// 呼び出しごとに新しく構築される固定内容のキー・値マップ。
/// 構築後は変更されない。
use std::collections::BTreeMap;

use serde::Serialize;

use super::json_format::to_spaced_vec;

/// ドキュメントのキー
pub const EXAMPLE_KEY: &str = "example_key";

/// ドキュメントの値
pub const EXAMPLE_VALUE: &str = "example_value";

/// S3に保存するJSONドキュメント
///
/// JSONオブジェクトとしてそのままシリアライズされる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    entries: BTreeMap<String, String>,
}

impl Document {
    /// 固定内容（`"example_key" -> "example_value"`）のドキュメントを作成
    pub fn example() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(EXAMPLE_KEY.to_string(), EXAMPLE_VALUE.to_string());
        Self { entries }
    }

    /// 保存用のJSONバイト列にエンコードする
    ///
    /// 出力は`{"example_key": "example_value"}`形式（UTF-8、末尾改行なし）。
    pub fn to_json_bytes(&self) -> serde_json::Result<Vec<u8>> {
        to_spaced_vec(self)
    }
}
