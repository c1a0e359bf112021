//! JSON 结果导出
use serde::Serialize;

use crate::error::CyberLawResult;

/// JSON 导出器，适用于 AnalysisResult 与 BatchReport
pub struct JsonExporter;

impl JsonExporter {
    pub fn to_compact<T: Serialize>(value: &T) -> CyberLawResult<String> {
        Ok(serde_json::to_string(value)?)
    }

    pub fn to_pretty<T: Serialize>(value: &T) -> CyberLawResult<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::BatchItem;
    use crate::detector::ViolationDetector;

    #[test]
    fn test_analysis_result_json_shape() {
        let detector = ViolationDetector::builtin().unwrap();
        let result = detector.analyze("Contact me at john@example.com for details");
        let value: serde_json::Value =
            serde_json::from_str(&JsonExporter::to_compact(&result).unwrap()).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["type"], "Data Privacy Violation");
        assert_eq!(records[0]["legal_reference"], "IT Act 2000 Section 43A, GDPR Article 6");
    }

    #[test]
    fn test_batch_report_json_shape() {
        let detector = ViolationDetector::builtin().unwrap();
        let items = vec![BatchItem::from("hello"), BatchItem::from("kys")];
        let report = detector.analyze_batch(&items, None, |_, _| {}).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&JsonExporter::to_pretty(&report).unwrap()).unwrap();
        assert_eq!(value["summary"]["flagged"], 1);
        assert_eq!(value["rows"][0]["status"], "CLEAN");
        assert_eq!(value["rows"][1]["status"], "FLAGGED");
        assert!(value["rows"][0].get("error").is_none());
    }
}
