// src/core/sanitize.rs

/// Collapse sequences of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Newline-separated text → its visible lines.
///
/// Each line is whitespace-normalised (non-breaking spaces included) and
/// empty lines are discarded.
pub fn content_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(normalize_ws)
        .filter(|l| !l.is_empty())
        .collect()
}
