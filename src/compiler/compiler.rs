//! 规则编译器核心
//! 校验规则库并将全部模式编译为忽略大小写的正则，任一失败即整体拒绝

use std::collections::HashSet;
use std::time::Instant;
use regex::RegexBuilder;
use tracing::debug;

use super::pattern::{CompiledCatalog, CompiledCategory, CompiledPattern};
use crate::config::DEFAULT_REGEX_SIZE_LIMIT;
use crate::rule::{PatternCatalog, PatternCategory};
use crate::error::{CyberLawResult, CyberLawError};

/// 规则编译器
pub struct CatalogCompiler;

impl CatalogCompiler {
    /// 使用默认体积上限编译规则库
    pub fn compile(catalog: &PatternCatalog) -> CyberLawResult<CompiledCatalog> {
        Self::compile_with_limit(catalog, DEFAULT_REGEX_SIZE_LIMIT)
    }

    /// 编译规则库
    pub fn compile_with_limit(
        catalog: &PatternCatalog,
        size_limit: usize,
    ) -> CyberLawResult<CompiledCatalog> {
        let start = Instant::now();

        // 1. 结构校验
        Self::validate(catalog)?;

        // 2. 逐类别编译
        let mut stats = CompileStats::default();
        let mut categories = Vec::with_capacity(catalog.len());
        for category in &catalog.categories {
            categories.push(Self::compile_category(category, size_limit, &mut stats)?);
        }

        // 3. 输出编译统计
        debug!(
            "规则编译完成，总耗时{:?}，类别{}个，模式{}条",
            start.elapsed(),
            stats.category_count,
            stats.pattern_count
        );

        Ok(CompiledCatalog { categories })
    }

    /// 校验规则库结构：非空、类别名唯一且非空、每个类别至少一条模式
    pub fn validate(catalog: &PatternCatalog) -> CyberLawResult<()> {
        if catalog.is_empty() {
            return Err(CyberLawError::InvalidCatalog("catalog has no categories".to_string()));
        }

        let mut seen = HashSet::with_capacity(catalog.len());
        for category in &catalog.categories {
            if category.name.trim().is_empty() {
                return Err(CyberLawError::InvalidCatalog("category name is empty".to_string()));
            }
            if !seen.insert(category.name.as_str()) {
                return Err(CyberLawError::InvalidCatalog(format!(
                    "duplicate category name '{}'",
                    category.name
                )));
            }
            if category.patterns.is_empty() {
                return Err(CyberLawError::InvalidCatalog(format!(
                    "category '{}' has no patterns",
                    category.name
                )));
            }
        }
        Ok(())
    }

    /// 编译单个类别
    fn compile_category(
        category: &PatternCategory,
        size_limit: usize,
        stats: &mut CompileStats,
    ) -> CyberLawResult<CompiledCategory> {
        let patterns = category
            .patterns
            .iter()
            .map(|raw| Self::compile_single_pattern(&category.name, raw, size_limit))
            .collect::<CyberLawResult<Vec<_>>>()?;

        stats.category_count += 1;
        stats.pattern_count += patterns.len();

        Ok(CompiledCategory {
            name: category.name.clone(),
            legal_reference: category.legal_reference.clone(),
            description: category.description.clone(),
            patterns,
        })
    }

    /// 编译单个正则模式（忽略大小写）
    fn compile_single_pattern(
        category: &str,
        raw_pattern: &str,
        size_limit: usize,
    ) -> CyberLawResult<CompiledPattern> {
        let regex = RegexBuilder::new(raw_pattern)
            .case_insensitive(true)
            .size_limit(size_limit)
            .build()
            .map_err(|source| CyberLawError::RegexCompileError {
                category: category.to_string(),
                pattern: raw_pattern.to_string(),
                source,
            })?;

        Ok(CompiledPattern {
            source: raw_pattern.to_string(),
            regex,
        })
    }
}

/// 编译统计信息
#[derive(Debug, Clone, Default)]
struct CompileStats {
    category_count: usize,
    pattern_count: usize,
}
