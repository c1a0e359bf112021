//! 规则库加载管理器
//! 负责从内置规则、JSON 规则文件或 MessagePack 快照加载规则库

use std::path::Path;
use tracing::{debug, info};

use super::model::PatternCatalog;
use super::cache::CatalogCacheManager;
use crate::error::{CyberLawResult, CyberLawError};
use crate::config::DetectorConfig;

/// 规则文件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFileType {
    /// 可读 JSON 规则文件
    Json,
    /// MessagePack 快照
    MsgPack,
}

impl CatalogFileType {
    /// 根据扩展名判断规则文件类型
    pub fn from_path(path: &Path) -> CyberLawResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("mp") | Some("msgpack") => Ok(Self::MsgPack),
            _ => Err(CyberLawError::UnsupportedFormat(format!(
                "catalog file {} must end with .json or .mp",
                path.display()
            ))),
        }
    }
}

/// 规则库加载管理器
pub struct CatalogLoader;

impl CatalogLoader {
    /// 加载规则库（配置了路径则读取文件，否则使用内置规则库）
    pub async fn load(config: &DetectorConfig) -> CyberLawResult<PatternCatalog> {
        let Some(path) = config.catalog_path.as_deref() else {
            debug!("未配置规则文件，使用内置规则库");
            return Ok(PatternCatalog::builtin());
        };

        let catalog = Self::load_file(path).await?;
        info!(
            "从 {} 加载规则库成功，类别数：{}，模式数：{}",
            path.display(),
            catalog.len(),
            catalog.pattern_count()
        );
        Ok(catalog)
    }

    /// 读取指定规则文件
    pub async fn load_file(path: &Path) -> CyberLawResult<PatternCatalog> {
        match CatalogFileType::from_path(path)? {
            CatalogFileType::Json => {
                let bytes = tokio::fs::read(path).await.map_err(|e| {
                    CyberLawError::CatalogLoadError(format!("{}: {}", path.display(), e))
                })?;
                Self::parse_json(&bytes)
            }
            CatalogFileType::MsgPack => CatalogCacheManager::load_from_cache(path).await,
        }
    }

    /// 解析 JSON 规则库
    pub fn parse_json(bytes: &[u8]) -> CyberLawResult<PatternCatalog> {
        serde_json::from_slice(bytes).map_err(|e| CyberLawError::CatalogParseError(e.to_string()))
    }

    /// 导出规则库（格式由扩展名决定）
    pub async fn export(path: &Path, catalog: &PatternCatalog) -> CyberLawResult<()> {
        match CatalogFileType::from_path(path)? {
            CatalogFileType::Json => {
                let json = serde_json::to_vec_pretty(catalog)?;
                tokio::fs::write(path, json).await?;
            }
            CatalogFileType::MsgPack => CatalogCacheManager::save_to_cache(path, catalog).await?,
        }
        debug!("规则库已导出到 {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;

    #[tokio::test]
    async fn test_load_builtin_when_no_path() {
        let catalog = CatalogLoader::load(&ConfigManager::get_default()).await.unwrap();
        assert_eq!(catalog, PatternCatalog::builtin());
    }

    #[tokio::test]
    async fn test_load_json_catalog_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.json");
        let json = r#"{"categories":[
            {"name":"Zeta","patterns":["zzz"],"law":"Act Z","description":"z"},
            {"name":"Alpha","patterns":["aaa"],"legal_reference":"Act A","description":"a"}
        ]}"#;
        tokio::fs::write(&path, json).await.unwrap();

        let config = ConfigManager::custom().catalog_path(path).build();
        let catalog = CatalogLoader::load(&config).await.unwrap();
        let names: Vec<&str> = catalog.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
    }

    #[tokio::test]
    async fn test_export_and_reload_both_formats() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = PatternCatalog::builtin();
        for file in ["out.json", "out.mp"] {
            let path = dir.path().join(file);
            CatalogLoader::export(&path, &catalog).await.unwrap();
            assert_eq!(CatalogLoader::load_file(&path).await.unwrap(), catalog);
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_load_error() {
        let err = CatalogLoader::load_file(Path::new("/nonexistent/rules.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, CyberLawError::CatalogLoadError(_)));
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let err = CatalogFileType::from_path(Path::new("rules.yaml")).unwrap_err();
        assert!(matches!(err, CyberLawError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = CatalogLoader::parse_json(b"{\"categories\": [").unwrap_err();
        assert!(matches!(err, CyberLawError::CatalogParseError(_)));
    }
}
