//! 规则模块：负责规则库的数据模型、内置规则、加载与快照
pub mod model;
pub mod builtin;
pub mod cache;
pub mod loader;

// 导出核心接口
pub use self::model::{PatternCategory, PatternCatalog, ViolationRecord, AnalysisResult};
pub use self::loader::{CatalogLoader, CatalogFileType};
pub use self::cache::CatalogCacheManager;
