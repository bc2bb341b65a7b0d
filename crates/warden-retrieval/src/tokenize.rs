use std::collections::BTreeSet;

/// Lowercase ASCII alphanumeric runs of `text`, deduplicated.
///
/// Everything else (punctuation, whitespace, non-ASCII letters) separates
/// tokens, so `"decision-making"` yields `{"decision", "making"}`.
pub fn tokenize(text: &str) -> BTreeSet<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether two token sets share at least one token.
pub fn overlaps(a: &BTreeSet<String>, b: &BTreeSet<String>) -> bool {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small.iter().any(|t| large.contains(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tokens: &[&str]) -> BTreeSet<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn splits_on_non_alphanumerics() {
        assert_eq!(
            tokenize("What is AI? Decision-making, 2nd ed."),
            set(&["what", "is", "ai", "decision", "making", "2nd", "ed"])
        );
    }

    #[test]
    fn empty_and_punctuation_only_yield_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("?!... --").is_empty());
    }

    #[test]
    fn non_ascii_letters_separate_tokens() {
        assert_eq!(tokenize("café"), set(&["caf"]));
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = set(&["ai", "systems"]);
        let b = set(&["systems"]);
        assert!(overlaps(&a, &b));
        assert!(overlaps(&b, &a));
        assert!(!overlaps(&a, &set(&["network"])));
        assert!(!overlaps(&a, &BTreeSet::new()));
    }
}
