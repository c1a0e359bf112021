//! 批量检测执行器
//! 条目之间互不依赖：顺序模式逐条执行，并发模式以 Tokio + Semaphore 控制并发度

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use super::model::{BatchItem, BatchReport, BatchRow};
use crate::detector::ViolationDetector;
use crate::error::{CyberLawResult, CyberLawError};
use crate::utils::{CancelToken, preview_compact};

/// 批量检测执行器
#[derive(Debug, Clone)]
pub struct BatchAnalyzer {
    detector: ViolationDetector,
}

impl BatchAnalyzer {
    pub fn new(detector: ViolationDetector) -> Self {
        Self { detector }
    }

    /// 顺序执行，progress(已完成数, 总数) 在每条完成后回调
    pub fn run<F>(
        &self,
        items: &[BatchItem],
        cancel: Option<&CancelToken>,
        mut progress: F,
    ) -> CyberLawResult<BatchReport>
    where
        F: FnMut(usize, usize),
    {
        let start = Instant::now();
        let total = items.len();
        let mut rows = Vec::with_capacity(total);

        for (i, item) in items.iter().enumerate() {
            if cancel.is_some_and(CancelToken::is_cancelled) {
                warn!("批量检测已取消：{}/{}", i, total);
                return Err(CyberLawError::Cancelled { processed: i, total });
            }
            rows.push(Self::analyze_item(&self.detector, i + 1, item));
            progress(i + 1, total);
        }

        Ok(Self::finish(rows, start))
    }

    /// 并发执行，结果按输入顺序返回
    pub async fn run_concurrent(
        &self,
        items: Vec<BatchItem>,
        cancel: Option<CancelToken>,
    ) -> CyberLawResult<BatchReport> {
        let start = Instant::now();
        let total = items.len();
        let concurrency = self.detector.config().concurrency.max(1);
        let semaphore = Arc::new(Semaphore::new(concurrency));
        debug!("并发批量检测开始：条目={}，并发度={}", total, concurrency);

        let mut tasks = Vec::with_capacity(total);
        for (i, item) in items.into_iter().enumerate() {
            if cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
                break;
            }
            let permit = semaphore
                .clone()
                .acquire_owned()
                .await
                .map_err(|e| CyberLawError::TaskJoinError(e.to_string()))?;
            let detector = self.detector.clone();
            let cancel = cancel.clone();
            tasks.push(tokio::spawn(async move {
                let _permit = permit;
                if cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
                    return None;
                }
                Some(Self::analyze_item(&detector, i + 1, &item))
            }));
        }

        let mut rows = Vec::with_capacity(total);
        let mut cancelled = tasks.len() < total;
        for (i, task) in tasks.into_iter().enumerate() {
            match task.await {
                Ok(Some(row)) => rows.push(row),
                Ok(None) => cancelled = true,
                // 单条任务异常不影响其余条目
                Err(e) => {
                    warn!("第 {} 条检测任务异常：{}", i + 1, e);
                    rows.push(BatchRow::unprocessed(i + 1, String::new(), e.to_string()));
                }
            }
        }

        if cancelled {
            warn!("批量检测已取消：{}/{}", rows.len(), total);
            return Err(CyberLawError::Cancelled {
                processed: rows.len(),
                total,
            });
        }

        Ok(Self::finish(rows, start))
    }

    fn analyze_item(detector: &ViolationDetector, index: usize, item: &BatchItem) -> BatchRow {
        let preview_len = detector.config().preview_len;
        match item {
            BatchItem::Text(text) => {
                let result = detector.analyze(text);
                if result.is_flagged() {
                    debug!(
                        "第 {} 条命中 {} 个类别：{}",
                        index,
                        result.len(),
                        preview_compact(text, 80)
                    );
                }
                BatchRow::from_result(index, text, &result, preview_len)
            }
            BatchItem::Unreadable { reason } => {
                BatchRow::unprocessed(index, String::new(), reason.clone())
            }
        }
    }

    fn finish(rows: Vec<BatchRow>, start: Instant) -> BatchReport {
        let report = BatchReport::from_rows(rows);
        info!(
            "批量检测完成，耗时{:?}：总数={}，违规={}，正常={}，未处理={}",
            start.elapsed(),
            report.summary.total,
            report.summary.flagged,
            report.summary.clean,
            report.summary.unprocessed
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::PostStatus;
    use crate::config::ConfigManager;
    use crate::rule::PatternCatalog;

    fn items(texts: &[&str]) -> Vec<BatchItem> {
        texts.iter().copied().map(BatchItem::from).collect()
    }

    fn analyzer(concurrency: usize) -> BatchAnalyzer {
        let config = ConfigManager::custom().concurrency(concurrency).build();
        let detector = ViolationDetector::from_catalog(&PatternCatalog::builtin(), config).unwrap();
        BatchAnalyzer::new(detector)
    }

    #[test]
    fn test_three_line_batch() {
        let input = items(&["hello", "kill yourself", "earn rs 5000 daily from home"]);
        let mut ticks = Vec::new();
        let report = analyzer(1)
            .run(&input, None, |done, total| ticks.push((done, total)))
            .unwrap();

        assert_eq!(
            report.statuses(),
            vec![PostStatus::Clean, PostStatus::Flagged, PostStatus::Flagged]
        );
        assert_eq!(report.summary.flagged, 2);
        assert_eq!(report.summary.clean, 1);
        assert_eq!(ticks, vec![(1, 3), (2, 3), (3, 3)]);

        let row = &report.rows[1];
        assert_eq!(row.index, 2);
        assert_eq!(row.types, vec!["Cyberbullying/Harassment".to_string()]);
        assert_eq!(row.laws, vec!["IT Act 2000 Section 67, IPC Section 506".to_string()]);
    }

    #[test]
    fn test_unreadable_item_does_not_abort() {
        let input = vec![
            BatchItem::from("kys"),
            BatchItem::Unreadable { reason: "bad bytes".to_string() },
            BatchItem::from("fine"),
        ];
        let report = analyzer(1).run(&input, None, |_, _| {}).unwrap();
        assert_eq!(report.rows.len(), 3);
        assert_eq!(report.rows[1].status, PostStatus::Clean);
        assert!(report.rows[1].is_unprocessed());
        assert_eq!(report.summary.unprocessed, 1);
        assert_eq!(report.summary.flagged, 1);
    }

    #[test]
    fn test_cancelled_before_start() {
        let token = CancelToken::new();
        token.cancel();
        let err = analyzer(1)
            .run(&items(&["a", "b"]), Some(&token), |_, _| {})
            .unwrap_err();
        assert!(matches!(err, CyberLawError::Cancelled { processed: 0, total: 2 }));
    }

    #[test]
    fn test_cancel_from_progress_callback() {
        let token = CancelToken::new();
        let err = analyzer(1)
            .run(&items(&["a", "b", "c"]), Some(&token), |done, _| {
                if done == 2 {
                    token.cancel();
                }
            })
            .unwrap_err();
        assert!(matches!(err, CyberLawError::Cancelled { processed: 2, total: 3 }));
    }

    #[tokio::test]
    async fn test_concurrent_matches_sequential_order() {
        let texts: Vec<String> = (0..40)
            .map(|i| {
                if i % 3 == 0 {
                    format!("post {i}: mlm opportunity")
                } else {
                    format!("post {i}: nothing to see")
                }
            })
            .collect();
        let input: Vec<BatchItem> = texts.iter().map(|t| BatchItem::from(t.as_str())).collect();

        let analyzer = analyzer(4);
        let sequential = analyzer.run(&input, None, |_, _| {}).unwrap();
        let concurrent = analyzer.run_concurrent(input, None).await.unwrap();
        assert_eq!(sequential, concurrent);
        assert_eq!(concurrent.summary.flagged, 14);
    }

    #[tokio::test]
    async fn test_concurrent_cancelled() {
        let token = CancelToken::new();
        token.cancel();
        let err = analyzer(2)
            .run_concurrent(items(&["a", "b"]), Some(token))
            .await
            .unwrap_err();
        assert!(matches!(err, CyberLawError::Cancelled { total: 2, .. }));
    }

    #[tokio::test]
    async fn test_concurrent_empty_batch() {
        let report = analyzer(2).run_concurrent(Vec::new(), None).await.unwrap();
        assert_eq!(report.summary.total, 0);
        assert_eq!(report.summary.flagged_percent(), 0.0);
    }
}
