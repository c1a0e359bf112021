//! 通用工具模块
pub mod preview;
pub mod cancel;

pub use self::preview::{content_preview, preview_compact};
pub use self::cancel::CancelToken;
