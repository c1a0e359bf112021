//! 提取模块：解析批量上传内容
pub mod post_extractor;

pub use self::post_extractor::{PostExtractor, InputFormat, POST_COLUMN};
