//! 检测模块：违规检测核心逻辑
pub mod analyzer;
pub mod detector;

// 导出核心接口
pub use self::analyzer::ViolationAnalyzer;
pub use self::detector::ViolationDetector;
