use once_cell::sync::Lazy;
use regex::Regex;

// Both shapes are anchored; the caller picks the start position and checks
// the digit boundaries on each side. The mobile shape is tried first.
static MOBILE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?55[\s().-]*[0-9]{2}[\s().-]*9[0-9]{4}[\s().-]*[0-9]{4}")
        .expect("mobile shape pattern")
});
static LANDLINE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?55[\s().-]*[0-9]{2}[\s().-]*[0-9]{4}[\s().-]*[0-9]{4}")
        .expect("landline shape pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

impl<'a> Candidate<'a> {
    pub fn as_str(&self) -> &'a str {
        self.text
    }
}

/// A candidate starts at `+55` or `55`, allows spaces, parentheses, dots and
/// hyphens between digit groups, and never touches another digit on either
/// side, so numbers buried inside longer ids are skipped.
pub fn find_candidates(text: &str) -> Vec<Candidate<'_>> {
    let bytes = text.as_bytes();
    let mut candidates = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let byte = bytes[pos];
        // ASCII bytes never occur inside a multi-byte sequence, so `pos` is a
        // char boundary whenever it points at `+` or `5`.
        if (byte == b'+' || byte == b'5') && !preceded_by_digit(bytes, pos) {
            if let Some(end) = match_at(text, pos) {
                candidates.push(Candidate {
                    text: &text[pos..end],
                    start: pos,
                    end,
                });
                pos = end;
                continue;
            }
        }
        pos += 1;
    }

    candidates
}

fn match_at(text: &str, start: usize) -> Option<usize> {
    let rest = &text[start..];
    for shape in [&*MOBILE_SHAPE, &*LANDLINE_SHAPE] {
        if let Some(found) = shape.find(rest) {
            let end = start + found.end();
            if !followed_by_digit(text.as_bytes(), end) {
                return Some(end);
            }
        }
    }
    None
}

fn preceded_by_digit(bytes: &[u8], pos: usize) -> bool {
    pos > 0 && bytes[pos - 1].is_ascii_digit()
}

fn followed_by_digit(bytes: &[u8], end: usize) -> bool {
    bytes.get(end).is_some_and(u8::is_ascii_digit)
}
