//! Text layout helpers for the terminal view
//!
//! Widths are counted in `char`s; every glyph the panel draws is one column.

/// Display width of a string in columns
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Truncate to at most `width` columns, ending with `…` when cut
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Pad with spaces on the right up to `width` columns (never truncates)
pub fn pad_right(text: &str, width: usize) -> String {
    let mut out = text.to_string();
    let len = display_width(text);
    if len < width {
        out.extend(std::iter::repeat(' ').take(width - len));
    }
    out
}

/// Greedy word wrap to `width` columns
///
/// Words longer than the width are hard-split. Always returns at least one
/// line, which may be empty.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        // Hard-split words that can never fit on a line
        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };

        if needed > width && current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_simple() {
        assert_eq!(
            wrap_words("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn test_wrap_empty() {
        assert_eq!(wrap_words("", 10), vec![String::new()]);
        assert_eq!(wrap_words("   ", 10), vec![String::new()]);
    }

    #[test]
    fn test_wrap_long_word() {
        assert_eq!(
            wrap_words("a abcdefghij b", 4),
            vec!["a", "abcd", "efgh", "ij b"]
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_to_width("package.json", 20), "package.json");
        assert_eq!(truncate_to_width("package.json", 5), "pack…");
        assert_eq!(truncate_to_width("package.json", 0), "");
    }

    #[test]
    fn test_pad_right() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_right("abcdef", 4), "abcdef");
    }
}
