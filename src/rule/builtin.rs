//! 内置违规规则库
//! 纯配置数据：类别顺序即检测结果的输出顺序

use super::model::{PatternCatalog, PatternCategory};

pub const DATA_PRIVACY: &str = "Data Privacy Violation";
pub const HATE_SPEECH: &str = "Hate Speech";
pub const DEFAMATION: &str = "Defamation";
pub const CYBERBULLYING: &str = "Cyberbullying/Harassment";
pub const MISINFORMATION: &str = "Misinformation/Fake News";
pub const OBSCENE_CONTENT: &str = "Obscene Content";
pub const FINANCIAL_FRAUD: &str = "Financial Fraud";

impl PatternCatalog {
    /// 构建内置规则库（每次调用返回独立副本）
    pub fn builtin() -> Self {
        Self::new(vec![
            PatternCategory::new(
                DATA_PRIVACY,
                [
                    r"\b(?:phone|mobile|cell)\s*(?:number|no\.?|#)\s*[:=]?\s*[\d\-\+\(\)\s]{8,15}",
                    r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b",
                    r"\b(?:ssn|social\s*security)\s*(?:number|no\.?|#)\s*[:=]?\s*\d{3}[-\s]?\d{2}[-\s]?\d{4}",
                    r"\b(?:aadhar|aadhaar)\s*(?:number|no\.?|#)\s*[:=]?\s*\d{4}\s*\d{4}\s*\d{4}",
                    r"\b(?:credit\s*card|debit\s*card|card)\s*(?:number|no\.?|#)\s*[:=]?\s*[\d\-\s]{13,19}",
                    r"\b(?:pan|permanent\s*account)\s*(?:number|no\.?|#)\s*[:=]?\s*[A-Z]{5}\d{4}[A-Z]",
                ],
                "IT Act 2000 Section 43A, GDPR Article 6",
                "Sharing personal identifiable information without consent",
            ),
            PatternCategory::new(
                HATE_SPEECH,
                [
                    r"\b(?:kill|murder|eliminate|destroy)\s+(?:all|every)?\s*(?:muslims?|hindus?|christians?|jews?|sikhs?)",
                    r"\b(?:hate|despise|loathe)\s+(?:all)?\s*(?:muslims?|hindus?|christians?|jews?|sikhs?|blacks?|whites?)",
                    r"\b(?:terrorists?|extremists?)\s+(?:are|should\s+be)\s+(?:all|every)?\s*(?:muslims?|arabs?)",
                    r"\bgo\s+back\s+to\s+(?:your\s+country|where\s+you\s+came\s+from|africa|asia)",
                    r"\b(?:inferior|subhuman|animals?)\b.*\b(?:race|religion|caste|community)",
                ],
                "IT Act 2000 Section 66A, IPC Section 153A",
                "Content promoting hatred or violence against groups based on religion, race, caste, or community",
            ),
            // 首字母大写的人名启发式误报率较高，属已知局限
            PatternCategory::new(
                DEFAMATION,
                [
                    r"\b(?:liar|fraud|scammer|cheat|criminal)\b.*\b(?:is|are)\s+[A-Z][a-zA-Z\s]+",
                    r"\b[A-Z][a-zA-Z\s]+\s+(?:is|are)\s+(?:a\s+)?(?:liar|fraud|scammer|cheat|criminal)",
                    r"\bexpose\b.*\b(?:truth|reality|facts?)\s+about\s+[A-Z][a-zA-Z\s]+",
                    r"\b[A-Z][a-zA-Z\s]+\s+(?:stole|robbed|cheated|deceived)",
                ],
                "IPC Section 499, IT Act 2000 Section 66A",
                "Content that may damage someone's reputation without factual basis",
            ),
            PatternCategory::new(
                CYBERBULLYING,
                [
                    r"\b(?:kill\s+yourself|kys|suicide|end\s+your\s+life)",
                    r"\b(?:ugly|fat|stupid|worthless|useless)\s+(?:piece\s+of\s+)?(?:shit|trash|garbage)",
                    r"\byou\s+(?:should\s+)?(?:die|disappear|vanish)",
                    r"\b(?:stalk|follow|track|hunt)\s+(?:you|her|him|them)",
                    r"\bgoing\s+to\s+(?:find|get|hunt|track)\s+you",
                ],
                "IT Act 2000 Section 67, IPC Section 506",
                "Content that constitutes harassment, bullying, or intimidation",
            ),
            PatternCategory::new(
                MISINFORMATION,
                [
                    r"\b(?:confirmed|breaking|exclusive)\s*[:!]?\s*(?:covid|coronavirus|vaccine)\s+(?:kills|causes|leads\s+to)",
                    r"\b(?:government|politicians?)\s+(?:hiding|concealing)\s+(?:truth|facts?|reality)",
                    r"\b(?:proven|confirmed|established)\s+(?:fact|truth)\s*[:!]?\s*(?:earth\s+is\s+flat|climate\s+change\s+is\s+hoax)",
                    r"\b(?:secret|hidden|suppressed)\s+(?:cure|treatment|remedy)\s+for\s+(?:cancer|diabetes|covid)",
                    r"\bdoctors?\s+(?:don't\s+want\s+you\s+to\s+know|are\s+hiding)\s+(?:this|truth|cure)",
                ],
                "IT Act 2000 Section 66D, Disaster Management Act 2005",
                "Content spreading false or misleading information that may cause public harm",
            ),
            PatternCategory::new(
                OBSCENE_CONTENT,
                [
                    r"\b(?:nude|naked|porn|xxx|adult)\s+(?:photos?|images?|videos?|content)",
                    r"\b(?:selling|offering)\s+(?:nude|naked|intimate)\s+(?:photos?|videos?)",
                    r"\b(?:sex|sexual)\s+(?:services?|favou?rs?|acts?)\s+(?:available|for\s+sale|offered)",
                    r"\b(?:escort|call\s+girl|prostitut)\w*\s+(?:services?|available|contact)",
                ],
                "IT Act 2000 Section 67, IPC Section 292",
                "Content that is sexually explicit or promotes immoral activities",
            ),
            PatternCategory::new(
                FINANCIAL_FRAUD,
                [
                    r"\b(?:guaranteed?|assured|risk-free)\s+(?:returns?|profits?|income)\s+of\s+\d+%",
                    r"\b(?:double|triple|multiply)\s+your\s+(?:money|investment)\s+in\s+\d+\s+(?:days?|weeks?|months?)",
                    r"\b(?:earn|make|get)\s+(?:rs\.?|₹|usd|\$)\s*\d+\s+(?:daily|weekly|monthly)\s+(?:from\s+home|online|easily)",
                    r"\b(?:mlm|pyramid|ponzi)\s+(?:scheme|opportunity|investment)",
                    r"\b(?:send|transfer|deposit)\s+(?:rs\.?|₹|usd|\$)\s*\d+\s+(?:immediately|urgently|asap)",
                ],
                "IT Act 2000 Section 66D, IPC Section 420",
                "Content promoting fraudulent investment schemes or financial scams",
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_order_and_shape() {
        let catalog = PatternCatalog::builtin();
        let names: Vec<&str> = catalog.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                DATA_PRIVACY,
                HATE_SPEECH,
                DEFAMATION,
                CYBERBULLYING,
                MISINFORMATION,
                OBSCENE_CONTENT,
                FINANCIAL_FRAUD
            ]
        );
        for category in &catalog.categories {
            assert!((4..=6).contains(&category.patterns.len()), "{}", category.name);
            assert!(!category.legal_reference.is_empty());
            assert!(!category.description.is_empty());
        }
    }
}
