//! String- and brace-aware scanning over raw JSON-like text
//!
//! The host files are templates (`settings.json.tmpl`) that are not always valid
//! JSON, so instead of parsing them we locate byte ranges directly. All
//! positions are byte offsets; every delimiter we stop at is ASCII, so the
//! offsets are always valid `str` boundaries.

use crate::error::LocateError;

/// Byte cursor over a text.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Start a cursor over `text` at byte `pos`.
    pub fn new(text: &'a str, pos: usize) -> Self {
        Self { text, pos }
    }

    /// Current byte offset.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// True once the cursor has consumed the whole text.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// The byte under the cursor, if any.
    pub fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    /// Move forward `count` bytes, stopping at the end of the text.
    pub fn advance(&mut self, count: usize) {
        self.pos = (self.pos + count).min(self.text.len());
    }

    /// Skip spaces, tabs and line breaks.
    pub fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\n' | b'\r' | b'\t')) {
            self.advance(1);
        }
    }
}

/// A string literal located by [`scan_string`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringLiteral<'a> {
    /// Position of the opening quote.
    pub start: usize,
    /// Position of the closing quote.
    pub end: usize,
    /// Raw text between the quotes, escapes left as written.
    pub contents: &'a str,
}

/// Scan the string literal whose opening quote is at `pos`.
pub fn scan_string(text: &str, pos: usize) -> Result<StringLiteral<'_>, LocateError> {
    let mut cursor = Cursor::new(text, pos);
    if cursor.peek() != Some(b'"') {
        return Err(LocateError::UnexpectedChar { expected: '"', pos });
    }
    cursor.advance(1);

    while let Some(byte) = cursor.peek() {
        match byte {
            b'\\' => cursor.advance(2),
            b'"' => {
                let end = cursor.pos();
                return Ok(StringLiteral {
                    start: pos,
                    end,
                    contents: &text[pos + 1..end],
                });
            }
            _ => cursor.advance(1),
        }
    }

    Err(LocateError::UnterminatedString { pos })
}

fn delimiter_kind(open: u8) -> &'static str {
    match open {
        b'{' => "object",
        b'[' => "array",
        _ => "block",
    }
}

/// Find the `close` matching the `open` at `pos`, skipping string literals.
pub fn match_delimiter(text: &str, pos: usize, open: u8, close: u8) -> Result<usize, LocateError> {
    let mut cursor = Cursor::new(text, pos);
    if cursor.peek() != Some(open) {
        return Err(LocateError::UnexpectedChar {
            expected: char::from(open),
            pos,
        });
    }

    let mut depth = 0usize;
    while let Some(byte) = cursor.peek() {
        if byte == b'"' {
            let literal = scan_string(text, cursor.pos())?;
            cursor = Cursor::new(text, literal.end);
        } else if byte == open {
            depth += 1;
        } else if byte == close {
            depth -= 1;
            if depth == 0 {
                return Ok(cursor.pos());
            }
        }
        cursor.advance(1);
    }

    Err(LocateError::UnterminatedDelimiter {
        kind: delimiter_kind(open),
        pos,
    })
}

/// Find the `}` closing the object that opens at `pos`.
pub fn match_brace(text: &str, pos: usize) -> Result<usize, LocateError> {
    match_delimiter(text, pos, b'{', b'}')
}

/// Where a key and its value start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyLocation {
    pub key_pos: usize,
    pub value_start: usize,
}

/// Find `"key":` one object level deep, i.e. directly inside the outermost object.
pub fn find_key(text: &str, key: &str) -> Result<KeyLocation, LocateError> {
    let mut cursor = Cursor::new(text, 0);
    let mut depth = 0isize;

    while let Some(byte) = cursor.peek() {
        match byte {
            b'"' => {
                let literal = scan_string(text, cursor.pos())?;
                if depth == 1 && literal.contents == key {
                    return key_value_start(text, key, literal);
                }
                cursor = Cursor::new(text, literal.end);
            }
            b'{' => depth += 1,
            b'}' => depth -= 1,
            _ => {}
        }
        cursor.advance(1);
    }

    Err(LocateError::KeyNotFound {
        key: key.to_string(),
    })
}

fn key_value_start(
    text: &str,
    key: &str,
    literal: StringLiteral<'_>,
) -> Result<KeyLocation, LocateError> {
    let mut cursor = Cursor::new(text, literal.end + 1);
    cursor.skip_whitespace();
    if cursor.peek() != Some(b':') {
        return Err(LocateError::MissingColon {
            key: key.to_string(),
        });
    }
    cursor.advance(1);
    cursor.skip_whitespace();
    if cursor.is_at_end() {
        return Err(LocateError::MissingValue {
            key: key.to_string(),
        });
    }
    Ok(KeyLocation {
        key_pos: literal.start,
        value_start: cursor.pos(),
    })
}

/// Span of an object value: the key position and the inclusive `{`..`}` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectSpan {
    pub key_pos: usize,
    pub value_start: usize,
    pub value_end: usize,
}

/// Locate the object value of `key` (see [`find_key`]).
pub fn find_object_for_key(text: &str, key: &str) -> Result<ObjectSpan, LocateError> {
    let location = find_key(text, key)?;
    if text.as_bytes()[location.value_start] != b'{' {
        return Err(LocateError::ValueNotObject {
            key: key.to_string(),
        });
    }
    let value_end = match_brace(text, location.value_start)?;
    Ok(ObjectSpan {
        key_pos: location.key_pos,
        value_start: location.value_start,
        value_end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_peek_and_advance() {
        let mut cursor = Cursor::new("a \n\tb", 0);
        assert_eq!(cursor.peek(), Some(b'a'));
        cursor.advance(1);
        cursor.skip_whitespace();
        assert_eq!(cursor.pos(), 4);
        assert_eq!(cursor.peek(), Some(b'b'));
        cursor.advance(10);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_scan_string_with_escapes() {
        let text = r#"x "a\"b\\" y"#;
        let literal = scan_string(text, 2).unwrap();
        assert_eq!(literal.start, 2);
        assert_eq!(literal.contents, r#"a\"b\\"#);
        assert_eq!(&text[literal.end..=literal.end], "\"");
    }

    #[test]
    fn test_scan_string_errors() {
        assert_eq!(
            scan_string(r#""never closed\""#, 0),
            Err(LocateError::UnterminatedString { pos: 0 })
        );
        assert_eq!(
            scan_string("abc", 1),
            Err(LocateError::UnexpectedChar { expected: '"', pos: 1 })
        );
    }

    #[test]
    fn test_match_delimiter_ignores_strings() {
        let text = r#"{"a": "}{\"", "b": {"c": "]"}} tail"#;
        let end = match_brace(text, 0).unwrap();
        assert_eq!(&text[end + 1..], " tail");

        let array = r#"["]", ["x"]],"#;
        assert_eq!(match_delimiter(array, 0, b'[', b']').unwrap(), array.len() - 2);
    }

    #[test]
    fn test_match_delimiter_unterminated() {
        assert_eq!(
            match_brace(r#"{"a": {"b": 1}"#, 0),
            Err(LocateError::UnterminatedDelimiter {
                kind: "object",
                pos: 0
            })
        );
        assert_eq!(
            match_delimiter("[1, 2", 0, b'[', b']'),
            Err(LocateError::UnterminatedDelimiter { kind: "array", pos: 0 })
        );
    }

    #[test]
    fn test_find_key_only_at_depth_one() {
        let text = r#"{"nested": {"permissions": 1}, "permissions": {"allow": []}}"#;
        let location = find_key(text, "permissions").unwrap();
        assert_eq!(location.key_pos, text.rfind("\"permissions\"").unwrap());
        assert_eq!(&text[location.value_start..location.value_start + 1], "{");
    }

    #[test]
    fn test_find_key_errors() {
        assert_eq!(
            find_key(r#"{"other": 1}"#, "permissions"),
            Err(LocateError::KeyNotFound {
                key: "permissions".to_string()
            })
        );
        assert_eq!(
            find_key(r#"{"permissions" 1}"#, "permissions"),
            Err(LocateError::MissingColon {
                key: "permissions".to_string()
            })
        );
        assert_eq!(
            find_key(r#"{"permissions":   "#, "permissions"),
            Err(LocateError::MissingValue {
                key: "permissions".to_string()
            })
        );
        assert!(find_key("", "permissions").is_err());
    }

    #[test]
    fn test_find_object_for_key() {
        let text = "{\n  \"permission\": {\n    \"bash\": \"{\"\n  },\n  \"x\": 1\n}\n";
        let span = find_object_for_key(text, "permission").unwrap();
        assert_eq!(&text[span.key_pos..span.key_pos + 12], "\"permission\"");
        assert_eq!(
            &text[span.value_start..=span.value_end],
            "{\n    \"bash\": \"{\"\n  }"
        );

        assert_eq!(
            find_object_for_key(r#"{"permission": "ask"}"#, "permission"),
            Err(LocateError::ValueNotObject {
                key: "permission".to_string()
            })
        );
    }
}
