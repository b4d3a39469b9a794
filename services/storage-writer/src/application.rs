// アプリケーション層モジュール
pub mod save_document_handler;

// 再エクスポート
pub use save_document_handler::{SaveDocumentError, SaveDocumentHandler};
