//! cyberlaw-detector - 基于正则规则库的网络法律违规内容检测工具

// 导出全局错误类型
pub use self::error::{CyberLawError, CyberLawResult};

// 导出配置模块
pub use self::config::{DetectorConfig, ConfigManager, CustomConfigBuilder};

// 导出规则模块核心接口
pub use self::rule::{
    PatternCategory, PatternCatalog, ViolationRecord, AnalysisResult,
    CatalogLoader, CatalogCacheManager, CatalogFileType,
};

// 导出编译模块核心接口
pub use self::compiler::{CatalogCompiler, CompiledCatalog, CompiledCategory, CompiledPattern};

// 导出检测模块核心接口
pub use self::detector::{ViolationAnalyzer, ViolationDetector};

// 导出批量与导出接口
pub use self::extractor::{PostExtractor, InputFormat};
pub use self::batch::{BatchAnalyzer, BatchItem, BatchReport, BatchRow, BatchSummary, PostStatus};
pub use self::report::{CsvExporter, JsonExporter, default_export_file_name};

// 导出工具模块核心接口
pub use self::utils::CancelToken;

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod compiler;
pub mod detector;
pub mod extractor;
pub mod batch;
pub mod report;
pub mod utils;
