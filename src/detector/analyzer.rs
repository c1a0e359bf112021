//! 违规分析器：单次扫描文本，按规则库顺序产出违规记录
use tracing::debug;

use crate::compiler::CompiledCatalog;
use crate::rule::{AnalysisResult, ViolationRecord};

/// 违规分析器
pub struct ViolationAnalyzer;

impl ViolationAnalyzer {
    /// 分析文本
    /// 每个类别按模式声明顺序检测，首条命中即记录并跳过该类别其余模式；
    /// 输出顺序为类别声明顺序，与命中位置无关
    pub fn analyze(text: &str, catalog: &CompiledCatalog) -> AnalysisResult {
        if text.is_empty() {
            return AnalysisResult::default();
        }

        let mut violations = Vec::new();
        for category in &catalog.categories {
            let Some(pattern) = category.first_match(text) else {
                continue;
            };
            debug!("命中类别：{}，规则={}", category.name, pattern.source);
            violations.push(ViolationRecord {
                category: category.name.clone(),
                legal_reference: category.legal_reference.clone(),
                description: category.description.clone(),
                matched_pattern: pattern.source.clone(),
            });
        }

        AnalysisResult::new(violations)
    }
}
