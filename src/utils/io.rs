//! Path display and pattern matching utilities

/// Shorten a member path for table display, keeping the trailing segments.
pub fn truncate_path(path: &str, max_len: usize) -> String {
    let length = path.chars().count();
    if length <= max_len {
        path.to_string()
    } else {
        let keep = max_len.saturating_sub(3);
        let tail: String = path.chars().skip(length - keep).collect();
        format!("...{tail}")
    }
}

/// Case-insensitive `*` wildcard matching against a member name.
/// A pattern without wildcards matches as a substring.
pub fn matches_pattern(text: &str, pattern: &str) -> bool {
    if pattern.is_empty() || pattern == "*" {
        return true;
    }

    let text = text.to_lowercase();
    let pattern = pattern.to_lowercase();

    if !pattern.contains('*') {
        return text.contains(&pattern);
    }

    let parts: Vec<&str> = pattern.split('*').collect();
    let mut pos = 0;

    for (i, part) in parts.iter().enumerate() {
        if part.is_empty() {
            continue;
        }

        if i == 0 {
            if !text.starts_with(part) {
                return false;
            }
            pos = part.len();
        } else if let Some(found) = text[pos..].find(part) {
            pos += found + part.len();
        } else {
            return false;
        }
    }

    match parts.last() {
        Some(last) if !last.is_empty() => text.ends_with(last),
        _ => true,
    }
}
