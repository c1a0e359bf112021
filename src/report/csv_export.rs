//! CSV 结果导出
use std::io::Write;
use std::path::Path;
use chrono::Local;
use tracing::debug;

use crate::batch::{BatchReport, BatchRow};
use crate::error::CyberLawResult;

/// 导出表头
pub const CSV_HEADERS: [&str; 6] = ["Post #", "Content Preview", "Status", "Violations", "Types", "Laws"];

const NONE_LABEL: &str = "None";
const UNPROCESSED_LABEL: &str = "Unprocessed";

/// 默认导出文件名：cyber_law_analysis_YYYYmmdd_HHMMSS.csv
pub fn default_export_file_name() -> String {
    format!("cyber_law_analysis_{}.csv", Local::now().format("%Y%m%d_%H%M%S"))
}

/// CSV 导出器
pub struct CsvExporter;

impl CsvExporter {
    /// 写入任意 Writer
    pub fn write<W: Write>(report: &BatchReport, writer: W) -> CyberLawResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(CSV_HEADERS)?;
        for row in &report.rows {
            csv_writer.write_record(Self::record(row))?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// 导出为字符串
    pub fn render(report: &BatchReport) -> CyberLawResult<String> {
        let mut buf = Vec::new();
        Self::write(report, &mut buf)?;
        // csv 写入的内容全部来自 UTF-8 字符串
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// 导出到文件
    pub async fn save(report: &BatchReport, path: &Path) -> CyberLawResult<()> {
        let content = Self::render(report)?;
        tokio::fs::write(path, content).await?;
        debug!("批量结果已导出：{}，共 {} 行", path.display(), report.rows.len());
        Ok(())
    }

    fn record(row: &BatchRow) -> [String; 6] {
        let types = if row.is_unprocessed() {
            UNPROCESSED_LABEL.to_string()
        } else {
            join_or_none(&row.types)
        };
        [
            row.index.to_string(),
            row.preview.clone(),
            row.status.to_string(),
            row.violations.to_string(),
            types,
            join_or_none(&row.laws),
        ]
    }
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        NONE_LABEL.to_string()
    } else {
        values.join(", ")
    }
}
