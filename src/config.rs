//! 全局配置管理,存储所有可配置项

use std::path::PathBuf;

/// 单条正则编译后程序的默认体积上限（10 MiB）
pub const DEFAULT_REGEX_SIZE_LIMIT: usize = 10 << 20;
/// 批量结果中内容预览的默认字符数
pub const DEFAULT_PREVIEW_LEN: usize = 50;

/// 全局配置
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    // 自定义规则库路径（.json / .mp），None 表示使用内置规则库
    pub catalog_path: Option<PathBuf>,
    // 单条正则编译体积上限（字节）
    pub regex_size_limit: usize,
    // 并发批量分析的工作许可数
    pub concurrency: usize,
    // 内容预览长度（字符）
    pub preview_len: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        let concurrency = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self {
            catalog_path: None,
            regex_size_limit: DEFAULT_REGEX_SIZE_LIMIT,
            concurrency,
            preview_len: DEFAULT_PREVIEW_LEN,
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> DetectorConfig {
        DetectorConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: DetectorConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: DetectorConfig::default(),
        }
    }

    pub fn catalog_path(mut self, path: PathBuf) -> Self {
        self.config.catalog_path = Some(path);
        self
    }

    pub fn regex_size_limit(mut self, limit: usize) -> Self {
        self.config.regex_size_limit = limit;
        self
    }

    /// 并发度最小为 1
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.config.concurrency = concurrency.max(1);
        self
    }

    pub fn preview_len(mut self, len: usize) -> Self {
        self.config.preview_len = len;
        self
    }

    pub fn build(self) -> DetectorConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConfigManager::get_default();
        assert!(config.catalog_path.is_none());
        assert_eq!(config.preview_len, 50);
        assert!(config.concurrency >= 1);
    }

    #[test]
    fn test_builder_clamps_concurrency() {
        let config = ConfigManager::custom()
            .concurrency(0)
            .preview_len(20)
            .catalog_path(PathBuf::from("rules.json"))
            .build();
        assert_eq!(config.concurrency, 1);
        assert_eq!(config.preview_len, 20);
        assert_eq!(config.catalog_path, Some(PathBuf::from("rules.json")));
    }
}
