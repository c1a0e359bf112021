//! 批量输入提取器
//! 将纯文本（每行一条）或 CSV（post 列）上传内容解析为待检测条目

use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, warn};

use crate::batch::BatchItem;
use crate::error::{CyberLawResult, CyberLawError};

/// CSV 必需列名
pub const POST_COLUMN: &str = "post";

/// 上传文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    PlainText,
    Csv,
}

impl InputFormat {
    /// 根据扩展名判断格式
    pub fn from_path(path: &Path) -> CyberLawResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("txt") => Ok(Self::PlainText),
            Some("csv") => Ok(Self::Csv),
            _ => Err(CyberLawError::UnsupportedFormat(format!(
                "{} (expected .txt or .csv)",
                path.display()
            ))),
        }
    }
}

/// 批量输入提取器
pub struct PostExtractor;

impl PostExtractor {
    /// 读取并解析上传文件，解析失败时不返回任何条目
    pub async fn from_path(path: &Path) -> CyberLawResult<Vec<BatchItem>> {
        let format = InputFormat::from_path(path)?;
        let bytes = tokio::fs::read(path).await?;
        let items = Self::from_bytes(&bytes, format)?;
        debug!("从 {} 解析出 {} 条内容", path.display(), items.len());
        Ok(items)
    }

    /// 按格式解析原始字节
    pub fn from_bytes(bytes: &[u8], format: InputFormat) -> CyberLawResult<Vec<BatchItem>> {
        match format {
            InputFormat::PlainText => {
                let content = std::str::from_utf8(bytes).map_err(|e| {
                    CyberLawError::IoError(io::Error::new(io::ErrorKind::InvalidData, e))
                })?;
                Ok(Self::from_text(content))
            }
            InputFormat::Csv => Self::from_csv_reader(bytes),
        }
    }

    /// 纯文本：每个非空行一条，去除首尾空白
    pub fn from_text(content: &str) -> Vec<BatchItem> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(BatchItem::from)
            .collect()
    }

    /// CSV：读取 post 列的非空值；缺少该列时在检测前直接报错
    /// 行字段数可以不一致，缺少 post 单元格的行直接跳过；
    /// 单元格不是合法 UTF-8 时记为不可读条目，不中断整体解析
    pub fn from_csv_reader<R: Read>(reader: R) -> CyberLawResult<Vec<BatchItem>> {
        let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

        let column = csv_reader
            .byte_headers()
            .map_err(Self::corrupt_payload)?
            .iter()
            .position(|h| {
                String::from_utf8_lossy(h)
                    .trim_start_matches('\u{feff}')
                    .trim()
                    == POST_COLUMN
            })
            .ok_or_else(|| CyberLawError::MissingColumn(POST_COLUMN.to_string()))?;

        let mut items = Vec::new();
        for record in csv_reader.byte_records() {
            let record = record.map_err(Self::corrupt_payload)?;
            let Some(cell) = record.get(column) else {
                continue;
            };
            match std::str::from_utf8(cell) {
                Ok(text) if text.trim().is_empty() => {}
                Ok(text) => items.push(BatchItem::from(text)),
                Err(e) => {
                    let line = record.position().map(|p| p.line()).unwrap_or_default();
                    warn!("第 {} 行内容不是合法 UTF-8，标记为未处理", line);
                    items.push(BatchItem::Unreadable {
                        reason: format!("line {}: {}", line, e),
                    });
                }
            }
        }
        Ok(items)
    }

    /// 上传内容解析失败统一按 I/O 错误（InvalidData）上报
    fn corrupt_payload(e: csv::Error) -> CyberLawError {
        CyberLawError::IoError(io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(items: &[BatchItem]) -> Vec<&str> {
        items.iter().filter_map(BatchItem::text).collect()
    }

    #[test]
    fn test_plain_text_skips_blank_lines_and_trims() {
        let items = PostExtractor::from_text("  hello  \n\n   \nkill yourself\r\nearn rs 5000 daily from home\n");
        assert_eq!(
            texts(&items),
            vec!["hello", "kill yourself", "earn rs 5000 daily from home"]
        );
    }

    #[test]
    fn test_csv_reads_post_column() {
        let csv = "id,post,author\n1,hello,a\n2,,b\n3,\"kys, seriously\",c\n4,   ,d\n";
        let items = PostExtractor::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(texts(&items), vec!["hello", "kys, seriously"]);
    }

    #[test]
    fn test_csv_missing_post_column() {
        let csv = "id,content\n1,hello\n";
        let err = PostExtractor::from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CyberLawError::MissingColumn(ref c) if c == "post"));
    }

    #[test]
    fn test_csv_invalid_utf8_cell_is_unreadable() {
        let mut csv = b"post\nhello\n".to_vec();
        csv.extend_from_slice(&[0xff, 0xfe, b'\n']);
        csv.extend_from_slice(b"bye\n");
        let items = PostExtractor::from_csv_reader(csv.as_slice()).unwrap();
        assert_eq!(items.len(), 3);
        assert!(matches!(items[1], BatchItem::Unreadable { .. }));
        assert_eq!(texts(&items), vec!["hello", "bye"]);
    }

    #[test]
    fn test_csv_short_row_keeps_post_cell() {
        // 末尾字段缺失的行仍保留
        let csv = "post,author\nhello,a\nkill yourself\n";
        let items = PostExtractor::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(texts(&items), vec!["hello", "kill yourself"]);
    }

    #[test]
    fn test_csv_short_row_without_post_cell_skipped() {
        let csv = "author,post\na,hello\nb\nc,bye\n";
        let items = PostExtractor::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(texts(&items), vec!["hello", "bye"]);
    }

    /// 读取到一半即失败的上传流
    struct TruncatedUpload;

    impl Read for TruncatedUpload {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::UnexpectedEof, "connection reset"))
        }
    }

    #[test]
    fn test_csv_corrupt_payload_is_io_error() {
        let upload = b"post\nhello\n".as_slice().chain(TruncatedUpload);
        let err = PostExtractor::from_csv_reader(upload).unwrap_err();
        match err {
            CyberLawError::IoError(e) => assert_eq!(e.kind(), io::ErrorKind::InvalidData),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_plain_text_invalid_utf8_is_io_error() {
        let err = PostExtractor::from_bytes(&[0xff, 0xfe], InputFormat::PlainText).unwrap_err();
        match err {
            CyberLawError::IoError(e) => assert_eq!(e.kind(), io::ErrorKind::InvalidData),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_input_format_from_extension() {
        assert_eq!(InputFormat::from_path(Path::new("posts.TXT")).unwrap(), InputFormat::PlainText);
        assert_eq!(InputFormat::from_path(Path::new("posts.csv")).unwrap(), InputFormat::Csv);
        assert!(InputFormat::from_path(Path::new("posts.xlsx")).is_err());
    }

    #[tokio::test]
    async fn test_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.txt");
        tokio::fs::write(&path, "one\ntwo\n").await.unwrap();
        let items = PostExtractor::from_path(&path).await.unwrap();
        assert_eq!(texts(&items), vec!["one", "two"]);
    }
}
