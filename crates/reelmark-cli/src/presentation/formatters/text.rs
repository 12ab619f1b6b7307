pub const FILLED_STAR: char = '★';
pub const EMPTY_STAR: char = '☆';

/// Truncate to at most `max_chars` characters, marking the cut with `...`.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    if max_chars <= 3 {
        return s.chars().take(max_chars).collect();
    }
    let head: String = s.chars().take(max_chars - 3).collect();
    format!("{}...", head)
}

pub fn star_glyphs(filled: &[bool]) -> String {
    filled
        .iter()
        .map(|on| if *on { FILLED_STAR } else { EMPTY_STAR })
        .collect()
}

/// Join the present values with `sep`.
pub fn join_present(parts: &[Option<&str>], sep: &str) -> String {
    parts
        .iter()
        .flatten()
        .copied()
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("Amélie", 10), "Amélie");
        assert_eq!(truncate("The Good, the Bad and the Ugly", 12), "The Good,...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_star_glyphs() {
        insta::assert_snapshot!(star_glyphs(&[true, true, true, false, false]), @"★★★☆☆");
    }

    #[test]
    fn test_join_present_skips_missing() {
        assert_eq!(join_present(&[Some("Drama"), None, Some("142 min")], " · "), "Drama · 142 min");
        assert_eq!(join_present(&[None, None], " · "), "");
    }
}
