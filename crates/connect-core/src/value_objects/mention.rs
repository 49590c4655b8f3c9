//! Mention scanning - `@username` token extraction from comment text

/// Extract `@username` mentions from free text.
///
/// A mention is an `@` followed by one or more word characters (letters,
/// digits, `_` or `.`). Duplicates are collapsed, preserving first-seen
/// order; the caller is responsible for resolving names to users and for
/// excluding the author.
pub fn extract_mentions(content: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    let mut chars = content.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c != '@' {
            continue;
        }
        let start = i + c.len_utf8();
        let mut end = start;
        while let Some((j, next)) = chars.peek().copied() {
            if is_username_char(next) {
                end = j + next.len_utf8();
                chars.next();
            } else {
                break;
            }
        }
        if end > start {
            let name = &content[start..end];
            if !found.iter().any(|n| n == name) {
                found.push(name.to_string());
            }
        }
    }

    found
}

#[inline]
fn is_username_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_mention() {
        assert_eq!(extract_mentions("hey @rahul nice shot"), vec!["rahul"]);
    }

    #[test]
    fn test_multiple_mentions() {
        assert_eq!(
            extract_mentions("@priya.s @dev_07 check this"),
            vec!["priya.s", "dev_07"]
        );
    }

    #[test]
    fn test_duplicates_collapsed() {
        assert_eq!(extract_mentions("@sam and again @sam"), vec!["sam"]);
    }

    #[test]
    fn test_bare_at_ignored() {
        assert!(extract_mentions("meet @ the canteen").is_empty());
        assert!(extract_mentions("no mentions here").is_empty());
    }

    #[test]
    fn test_mention_stops_at_punctuation() {
        assert_eq!(extract_mentions("thanks @ananya!"), vec!["ananya"]);
    }
}
