// src/util/text.rs

/// First `max_chars` characters of `text`, counted in Unicode scalar values.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Extract the first non-empty line of `text`, trimmed.
///
/// # Examples
///
/// ```
/// use smartnotes::util::text::extract_first_line;
///
/// let text = "\n  Photosynthesis converts light.  \nSecond line";
/// assert_eq!(extract_first_line(text), "Photosynthesis converts light.");
/// ```
pub fn extract_first_line(text: &str) -> String {
    text.lines()
        .map(|line| line.trim())
        .find(|line| !line.is_empty())
        .unwrap_or("")
        .to_string()
}

/// Greedy word wrap to at most `max_chars` characters per line.
///
/// Explicit newlines start a new line, blank lines are kept, and words longer
/// than a full line are broken hard. Always returns at least one line.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_len = 0;

        for word in paragraph.split_whitespace() {
            let mut word = word;
            let mut word_len = word.chars().count();

            if current_len > 0 && current_len + 1 + word_len <= max_chars {
                current.push(' ');
                current.push_str(word);
                current_len += 1 + word_len;
                continue;
            }

            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }

            while word_len > max_chars {
                let head = truncate_chars(word, max_chars);
                lines.push(head.to_string());
                word = &word[head.len()..];
                word_len -= max_chars;
            }

            current.push_str(word);
            current_len = word_len;
        }

        lines.push(current);
    }

    lines
}
