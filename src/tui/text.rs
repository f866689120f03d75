//! Shared text formatting helpers used by terminal rendering.

/// Count visible character width (single-cell approximation).
pub fn visible_width(s: &str) -> usize {
    s.chars().count()
}

/// Right-pad `s` with spaces to `width` visible columns; longer input is clipped.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let clipped: String = s.chars().take(width).collect();
    let fill = width.saturating_sub(visible_width(&clipped));
    format!("{clipped}{}", " ".repeat(fill))
}

/// Center `s` within `width` columns.
pub fn center(s: &str, width: usize) -> String {
    let len = visible_width(s);
    if len >= width {
        return pad_to_width(s, width);
    }
    let left = (width - len) / 2;
    pad_to_width(&format!("{}{s}", " ".repeat(left)), width)
}

/// Wrap a single line to fit `max_width`.
///
/// Prefers whitespace boundaries and falls back to hard wrapping long words.
pub fn wrap_for_block(line: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }
    if line.is_empty() {
        return vec![String::new()];
    }

    let chars: Vec<char> = line.chars().collect();
    let mut out = Vec::new();
    let mut start = 0usize;

    while start < chars.len() {
        let end = (start + max_width).min(chars.len());
        if end == chars.len() {
            out.push(chars[start..end].iter().collect());
            break;
        }
        if chars[end].is_whitespace() {
            out.push(chars[start..end].iter().collect());
            start = skip_whitespace(&chars, end);
            continue;
        }

        match (start + 1..end).rev().find(|&idx| chars[idx].is_whitespace()) {
            Some(split_idx) => {
                out.push(chars[start..split_idx].iter().collect());
                start = skip_whitespace(&chars, split_idx);
            }
            None => {
                out.push(chars[start..end].iter().collect());
                start = end;
            }
        }
    }

    if out.is_empty() {
        out.push(String::new());
    }
    out
}

fn skip_whitespace(chars: &[char], mut idx: usize) -> usize {
    while idx < chars.len() && chars[idx].is_whitespace() {
        idx += 1;
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_prefers_whitespace_boundaries() {
        assert_eq!(
            wrap_for_block("take your time here", 10),
            vec!["take your", "time here"]
        );
    }

    #[test]
    fn wrap_hard_splits_long_words() {
        assert_eq!(wrap_for_block("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert!(wrap_for_block("anything", 0).is_empty());
        assert_eq!(wrap_for_block("", 5), vec![String::new()]);
    }

    #[test]
    fn pad_and_center_respect_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("abcdef", 3), "abc");
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(visible_width(&center("✦", 5)), 5);
    }
}
