//! 规则数据模型定义
//! 仅存储规则数据，无任何业务逻辑，支持序列化/反序列化

use std::fmt;
use serde::{Deserialize, Serialize};

/// 违规类别规则（名称唯一，模式按声明顺序检测）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternCategory {
    pub name: String,
    pub patterns: Vec<String>,
    // 兼容：旧版规则文件中的 law 字段
    #[serde(alias = "law")]
    pub legal_reference: String,
    #[serde(default)]
    pub description: String,
}

impl PatternCategory {
    pub fn new<N, P, S, L, D>(name: N, patterns: P, legal_reference: L, description: D) -> Self
    where
        N: Into<String>,
        P: IntoIterator<Item = S>,
        S: Into<String>,
        L: Into<String>,
        D: Into<String>,
    {
        Self {
            name: name.into(),
            patterns: patterns.into_iter().map(Into::into).collect(),
            legal_reference: legal_reference.into(),
            description: description.into(),
        }
    }
}

/// 完整规则库（类别顺序即输出顺序）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternCatalog {
    pub categories: Vec<PatternCategory>,
}

impl PatternCatalog {
    pub fn new(categories: Vec<PatternCategory>) -> Self {
        Self { categories }
    }

    /// 追加类别（不做校验，校验在编译阶段统一完成）
    pub fn with_category(mut self, category: PatternCategory) -> Self {
        self.categories.push(category);
        self
    }

    pub fn get(&self, name: &str) -> Option<&PatternCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn pattern_count(&self) -> usize {
        self.categories.iter().map(|c| c.patterns.len()).sum()
    }
}

/// 单条违规记录（一次分析中每个类别至多一条）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationRecord {
    #[serde(rename = "type")]
    pub category: String,
    pub legal_reference: String,
    pub description: String,
    pub matched_pattern: String,
}

// ======== 为 ViolationRecord 实现 Display trait（用于 CLI 输出） ========
impl fmt::Display for ViolationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.category, self.legal_reference)
    }
}

/// 单条文本的分析结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResult {
    violations: Vec<ViolationRecord>,
}

impl AnalysisResult {
    pub fn new(violations: Vec<ViolationRecord>) -> Self {
        Self { violations }
    }

    pub fn is_flagged(&self) -> bool {
        !self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ViolationRecord> {
        self.violations.iter()
    }

    pub fn violations(&self) -> &[ViolationRecord] {
        &self.violations
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.category.as_str()).collect()
    }

    /// 法律依据去重，保留首次出现顺序
    pub fn legal_references(&self) -> Vec<&str> {
        let mut laws: Vec<&str> = Vec::with_capacity(self.violations.len());
        for v in &self.violations {
            if !laws.contains(&v.legal_reference.as_str()) {
                laws.push(&v.legal_reference);
            }
        }
        laws
    }
}

impl IntoIterator for AnalysisResult {
    type Item = ViolationRecord;
    type IntoIter = std::vec::IntoIter<ViolationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a AnalysisResult {
    type Item = &'a ViolationRecord;
    type IntoIter = std::slice::Iter<'a, ViolationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
