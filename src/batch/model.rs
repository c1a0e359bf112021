//! 批量检测数据模型
use std::fmt;
use serde::{Deserialize, Serialize};

use crate::rule::AnalysisResult;
use crate::utils::content_preview;

/// 待检测条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchItem {
    Text(String),
    /// 解析阶段无法读取的内容，记为未处理
    Unreadable { reason: String },
}

impl BatchItem {
    pub fn text(&self) -> Option<&str> {
        match self {
            BatchItem::Text(s) => Some(s),
            BatchItem::Unreadable { .. } => None,
        }
    }
}

impl From<&str> for BatchItem {
    fn from(s: &str) -> Self {
        BatchItem::Text(s.to_string())
    }
}

impl From<String> for BatchItem {
    fn from(s: String) -> Self {
        BatchItem::Text(s)
    }
}

/// 条目状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PostStatus {
    Flagged,
    Clean,
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostStatus::Flagged => f.write_str("FLAGGED"),
            PostStatus::Clean => f.write_str("CLEAN"),
        }
    }
}

/// 结果表中的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRow {
    /// 从 1 开始的序号
    pub index: usize,
    pub preview: String,
    pub status: PostStatus,
    pub violations: usize,
    pub types: Vec<String>,
    /// 去重后的法律依据，保留首次出现顺序
    pub laws: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchRow {
    pub fn from_result(index: usize, text: &str, result: &AnalysisResult, preview_len: usize) -> Self {
        let status = if result.is_flagged() {
            PostStatus::Flagged
        } else {
            PostStatus::Clean
        };
        Self {
            index,
            preview: content_preview(text, preview_len),
            status,
            violations: result.len(),
            types: result.category_names().into_iter().map(String::from).collect(),
            laws: result.legal_references().into_iter().map(String::from).collect(),
            error: None,
        }
    }

    /// 未处理条目：按 CLEAN 计，违规数为 0
    pub fn unprocessed(index: usize, preview: String, reason: String) -> Self {
        Self {
            index,
            preview,
            status: PostStatus::Clean,
            violations: 0,
            types: Vec::new(),
            laws: Vec::new(),
            error: Some(reason),
        }
    }

    pub fn is_unprocessed(&self) -> bool {
        self.error.is_some()
    }
}

/// 批量汇总
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub flagged: usize,
    pub clean: usize,
    pub unprocessed: usize,
}

impl BatchSummary {
    pub fn from_rows(rows: &[BatchRow]) -> Self {
        let flagged = rows.iter().filter(|r| r.status == PostStatus::Flagged).count();
        Self {
            total: rows.len(),
            flagged,
            clean: rows.len() - flagged,
            unprocessed: rows.iter().filter(|r| r.is_unprocessed()).count(),
        }
    }

    pub fn flagged_percent(&self) -> f64 {
        Self::percent(self.flagged, self.total)
    }

    pub fn clean_percent(&self) -> f64 {
        Self::percent(self.clean, self.total)
    }

    fn percent(part: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            part as f64 / total as f64 * 100.0
        }
    }
}

/// 批量检测报告
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub summary: BatchSummary,
    pub rows: Vec<BatchRow>,
}

impl BatchReport {
    pub fn from_rows(rows: Vec<BatchRow>) -> Self {
        Self {
            summary: BatchSummary::from_rows(&rows),
            rows,
        }
    }

    pub fn statuses(&self) -> Vec<PostStatus> {
        self.rows.iter().map(|r| r.status).collect()
    }
}
