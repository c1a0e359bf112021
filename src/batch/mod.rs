//! 批量模块：多条内容的独立检测与结果汇总
pub mod model;
pub mod runner;

pub use self::model::{BatchItem, BatchRow, BatchReport, BatchSummary, PostStatus};
pub use self::runner::BatchAnalyzer;
