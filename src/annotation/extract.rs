//! Element definition parsing
//!
//! A class element definition names its source file in parentheses and the
//! class in braces: `@apiSuccessClass (src/dto/user.ts) {UserDto}`. There is
//! no escaping; the first `(` and the first `{` after the path win.

use crate::error::{ElementError, ElementResult};
use std::path::PathBuf;

/// File and class named by an element definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassReference {
    pub file_path: PathBuf,
    pub class_name: String,
}

/// Extract the file path and class name from raw element content
pub fn extract(content: &str) -> ElementResult<ClassReference> {
    let malformed = |reason: &str| ElementError::MalformedElement {
        content: content.to_string(),
        reason: reason.to_string(),
    };

    let (path, rest) = between(content, '(', ')')
        .ok_or_else(|| malformed("expected a file path in parentheses"))?;
    let (class_name, _) = between(rest, '{', '}')
        .ok_or_else(|| malformed("expected a class name in braces after the file path"))?;

    let path = path.trim();
    let class_name = class_name.trim();
    if path.is_empty() {
        return Err(malformed("file path is empty"));
    }
    if class_name.is_empty() {
        return Err(malformed("class name is empty"));
    }

    Ok(ClassReference {
        file_path: PathBuf::from(path),
        class_name: class_name.to_string(),
    })
}

/// Text strictly between the first `open` and the next `close`, plus the remainder
fn between(text: &str, open: char, close: char) -> Option<(&str, &str)> {
    let start = text.find(open)? + open.len_utf8();
    let len = text[start..].find(close)?;
    let end = start + len;
    Some((&text[start..end], &text[end + close.len_utf8()..]))
}
