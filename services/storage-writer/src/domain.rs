// ドメイン層モジュール
pub mod document;
pub mod handler_response;
pub mod json_format;
pub mod storage_target;

// 再エクスポート
pub use document::Document;
pub use handler_response::HandlerResponse;
pub use storage_target::StorageTarget;
