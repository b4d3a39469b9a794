/// Lambdaレスポンス
///
/// API Gateway互換の`{ statusCode, body }`形式でLambdaの戻り値を表現する。
use serde::{Deserialize, Serialize};

/// 保存成功時のメッセージ
pub const SAVED_MESSAGE: &str = "Data saved to S3 successfully!";

/// ハンドラーの戻り値
///
/// `body`にはJSONエンコード済みの文字列を格納する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    /// HTTPステータスコード
    pub status_code: u16,
    /// JSONエンコード済みの本文
    pub body: String,
}

impl HandlerResponse {
    /// 保存成功レスポンスを作成
    ///
    /// 本文はメッセージをJSON文字列としてエンコードしたもの
    /// （`"Data saved to S3 successfully!"`、引用符を含む）。
    pub fn saved() -> Self {
        Self {
            status_code: 200,
            body: encode_json_string(SAVED_MESSAGE),
        }
    }
}

/// 文字列をJSON文字列リテラルにエンコードする
fn encode_json_string(message: &str) -> String {
    serde_json::Value::String(message.to_string()).to_string()
}
