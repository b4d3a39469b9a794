// インフラストラクチャ層モジュール
pub mod logging;
pub mod object_store;

// 再エクスポート
pub use logging::init_logging;
pub use object_store::{ObjectStore, ObjectStoreError, S3ObjectStore, StoredObject};
