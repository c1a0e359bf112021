//! 文本预览工具
use std::fmt::{self, Write};

/// 截断省略标记
pub const ELLIPSIS: &str = "...";

/// 结果表内容预览：超过 max_chars 个字符时截断并追加 "..."
pub fn content_preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => {
            let mut preview = String::with_capacity(byte_idx + ELLIPSIS.len());
            preview.push_str(&text[..byte_idx]);
            preview.push_str(ELLIPSIS);
            preview
        }
        None => text.to_string(),
    }
}

// ======================== 日志预览 ========================
/// 空白字符折叠 + 截断，仅用于日志输出，不产生堆分配
pub fn preview_compact<'a>(s: &'a str, max_len: usize) -> impl fmt::Display + 'a {
    struct CompactView<'a> {
        source: &'a str,
        max_length: usize,
    }

    impl fmt::Display for CompactView<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut char_count = 0;
            let mut last_was_whitespace = false;

            for ch in self.source.chars() {
                if char_count >= self.max_length {
                    break;
                }

                if ch.is_whitespace() {
                    // 连续空白只写一个空格
                    if !last_was_whitespace {
                        f.write_char(' ')?;
                        char_count += 1;
                        last_was_whitespace = true;
                    }
                } else {
                    f.write_char(ch)?;
                    char_count += 1;
                    last_was_whitespace = false;
                }
            }
            Ok(())
        }
    }

    CompactView {
        source: s,
        max_length: max_len,
    }
}
