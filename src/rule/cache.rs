//! 规则库快照管理
//! 仅处理规则库的本地序列化（MessagePack）和反序列化

use std::path::Path;
use rmp_serde::{Serializer, from_slice};
use serde::Serialize;
use tracing::debug;

use super::model::PatternCatalog;
use crate::error::{CyberLawResult, CyberLawError};

/// 规则库快照管理器
pub struct CatalogCacheManager;

impl CatalogCacheManager {
    /// 从本地快照加载规则库
    pub async fn load_from_cache(cache_path: &Path) -> CyberLawResult<PatternCatalog> {
        let cache_data = tokio::fs::read(cache_path).await?;
        Self::decode(&cache_data)
    }

    /// 将规则库写入本地快照
    pub async fn save_to_cache(cache_path: &Path, catalog: &PatternCatalog) -> CyberLawResult<()> {
        let cache_data = Self::encode(catalog)?;
        debug!("规则库序列化成功，序列化后数据大小：{} 字节", cache_data.len());
        tokio::fs::write(cache_path, cache_data).await?;
        Ok(())
    }

    /// 清除本地快照
    pub async fn clear_cache(cache_path: &Path) -> CyberLawResult<()> {
        if tokio::fs::try_exists(cache_path).await? {
            tokio::fs::remove_file(cache_path).await?;
        }
        Ok(())
    }

    /// MessagePack序列化
    pub fn encode(catalog: &PatternCatalog) -> CyberLawResult<Vec<u8>> {
        let mut buf = Vec::new();
        catalog
            .serialize(&mut Serializer::new(&mut buf))
            .map_err(|e| CyberLawError::MsgPackError(format!("serialize failed: {}", e)))?;
        Ok(buf)
    }

    /// MessagePack反序列化
    pub fn decode(bytes: &[u8]) -> CyberLawResult<PatternCatalog> {
        let catalog: PatternCatalog = from_slice(bytes)
            .map_err(|e| CyberLawError::MsgPackError(format!("deserialize failed: {}", e)))?;
        debug!(
            "快照反序列化成功，类别数：{}，模式数：{}",
            catalog.len(),
            catalog.pattern_count()
        );
        Ok(catalog)
    }
}
