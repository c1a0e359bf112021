//! 编译后模式模型
//! 正则编译后的结构

use regex::Regex;

/// 编译后的单条模式（保留原始模式文本用于结果输出）
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub source: String,
    pub regex: Regex,
}

impl CompiledPattern {
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// 编译后的违规类别
#[derive(Debug, Clone)]
pub struct CompiledCategory {
    pub name: String,
    pub legal_reference: String,
    pub description: String,
    pub patterns: Vec<CompiledPattern>,
}

impl CompiledCategory {
    /// 按声明顺序返回第一条命中的模式
    pub fn first_match(&self, text: &str) -> Option<&CompiledPattern> {
        self.patterns.iter().find(|p| p.is_match(text))
    }
}

/// 编译后的规则库（类别顺序与源规则库一致）
#[derive(Debug, Clone)]
pub struct CompiledCatalog {
    pub categories: Vec<CompiledCategory>,
}

impl CompiledCatalog {
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }
}
