//! 全局错误类型定义

use thiserror::Error;
use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;

#[derive(Error, Debug)]
pub enum CyberLawError {
    // 规则库相关错误
    #[error("Catalog load failed: {0}")]
    CatalogLoadError(String),
    #[error("Catalog parse failed: {0}")]
    CatalogParseError(String),
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    // 编译相关错误
    #[error("Regex compilation failed in category '{category}' for pattern `{pattern}`: {source}")]
    RegexCompileError {
        category: String,
        pattern: String,
        #[source]
        source: RegexError,
    },

    // 批量输入相关错误
    #[error("Missing required column: '{0}'")]
    MissingColumn(String),
    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),

    // 批量执行相关错误
    #[error("Batch cancelled after {processed}/{total} posts")]
    Cancelled { processed: usize, total: usize },
    #[error("Analysis task failed: {0}")]
    TaskJoinError(String),

    // 序列化/反序列化错误
    #[error("JSON error: {0}")]
    JsonError(#[from] SerdeJsonError),
    #[error("{0}")]
    CsvError(#[from] csv::Error),
    #[error("MessagePack error: {0}")]
    MsgPackError(String),

    // 基础错误
    #[error("I/O error: {0}")]
    IoError(#[from] IoError),
}

// 全局Result类型
pub type CyberLawResult<T> = Result<T, CyberLawError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_csv_error_message_has_single_prefix() {
        let mut reader = csv::ReaderBuilder::new()
            .from_reader("a,b\n1,2\n3\n".as_bytes());
        let csv_err = reader.records().find_map(Result::err).unwrap();
        let message = CyberLawError::from(csv_err).to_string();
        assert!(message.starts_with("CSV error: "), "{message}");
        assert!(!message.contains("CSV error: CSV error"), "{message}");
    }

    #[test]
    fn test_io_error_message() {
        let err = CyberLawError::from(io::Error::new(io::ErrorKind::InvalidData, "bad bytes"));
        assert_eq!(err.to_string(), "I/O error: bad bytes");
    }
}
