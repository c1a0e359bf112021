//! 检测器核心：持有编译后的规则库，对外提供单条与批量检测接口
use std::sync::Arc;

use super::analyzer::ViolationAnalyzer;
use crate::batch::{BatchAnalyzer, BatchItem, BatchReport};
use crate::compiler::{CatalogCompiler, CompiledCatalog};
use crate::config::{ConfigManager, DetectorConfig};
use crate::error::CyberLawResult;
use crate::rule::{AnalysisResult, CatalogLoader, PatternCatalog};
use crate::utils::CancelToken;

/// 违规检测器（克隆成本低，可在任务间共享）
#[derive(Debug, Clone)]
pub struct ViolationDetector {
    compiled: Arc<CompiledCatalog>,
    config: DetectorConfig,
}

impl ViolationDetector {
    /// 按配置加载并编译规则库
    pub async fn new(config: DetectorConfig) -> CyberLawResult<Self> {
        let catalog = CatalogLoader::load(&config).await?;
        Self::from_catalog(&catalog, config)
    }

    /// 由已有规则库创建（编译失败即返回错误）
    pub fn from_catalog(catalog: &PatternCatalog, config: DetectorConfig) -> CyberLawResult<Self> {
        let compiled = CatalogCompiler::compile_with_limit(catalog, config.regex_size_limit)?;
        Ok(Self {
            compiled: Arc::new(compiled),
            config,
        })
    }

    /// 内置规则库 + 默认配置
    pub fn builtin() -> CyberLawResult<Self> {
        Self::from_catalog(&PatternCatalog::builtin(), ConfigManager::get_default())
    }

    /// 单条文本检测
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        ViolationAnalyzer::analyze(text, &self.compiled)
    }

    /// 顺序批量检测
    pub fn analyze_batch<F>(
        &self,
        items: &[BatchItem],
        cancel: Option<&CancelToken>,
        progress: F,
    ) -> CyberLawResult<BatchReport>
    where
        F: FnMut(usize, usize),
    {
        BatchAnalyzer::new(self.clone()).run(items, cancel, progress)
    }

    /// 并发批量检测
    pub async fn analyze_batch_concurrent(
        &self,
        items: Vec<BatchItem>,
        cancel: Option<CancelToken>,
    ) -> CyberLawResult<BatchReport> {
        BatchAnalyzer::new(self.clone()).run_concurrent(items, cancel).await
    }

    pub fn compiled_catalog(&self) -> &CompiledCatalog {
        &self.compiled
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }
}
