//! 报告模块：批量结果导出
pub mod csv_export;
pub mod json_export;

pub use self::csv_export::{CsvExporter, CSV_HEADERS, default_export_file_name};
pub use self::json_export::JsonExporter;
