//! Whole-word matching of player input against entity vocabularies.

/// Words the resolver skips when consuming object tokens.
pub const IGNORED_WORDS: &[&str] = &[
    "a", "an", "the", "in", "into", "on", "onto", "upon", "from", "to", "about", "with", "up",
];

/// Whether a token carries no meaning for object resolution.
pub fn is_ignored(word: &str) -> bool {
    IGNORED_WORDS.contains(&word)
}

/// Whether `word` occurs in `vocabulary` as a whole word (or whole phrase).
///
/// The comparison is case-insensitive and only spaces count as word
/// boundaries, so `"key"` matches `"box key lock"` but not `"keyhole"`.
pub fn matches(vocabulary: &str, word: &str) -> bool {
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return false;
    }

    let haystack = vocabulary.to_lowercase();
    let bytes = haystack.as_bytes();
    haystack.match_indices(&word).any(|(start, found)| {
        let end = start + found.len();
        let open = start == 0 || bytes[start - 1] == b' ';
        let close = end == bytes.len() || bytes[end] == b' ';
        open && close
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_word_only() {
        assert!(matches("box key lock", "key"));
        assert!(matches("box key lock", "box"));
        assert!(matches("box key lock", "lock"));
        assert!(!matches("keyhole", "key"));
        assert!(!matches("monkey", "key"));
    }

    #[test]
    fn case_insensitive() {
        assert!(matches("girl woman witch Melissa", "melissa"));
        assert!(matches("gold skull", "SKULL"));
    }

    #[test]
    fn phrases_match_at_word_boundaries() {
        assert!(matches("dark gold skull", "gold skull"));
        assert!(!matches("golden skull", "gold skull"));
    }

    #[test]
    fn empty_word_never_matches() {
        assert!(!matches("anything", ""));
        assert!(!matches("anything", "   "));
    }

    #[test]
    fn later_occurrence_can_match() {
        assert!(matches("keys key", "key"));
    }

    #[test]
    fn ignored_words() {
        assert!(is_ignored("the"));
        assert!(is_ignored("about"));
        assert!(!is_ignored("skull"));
    }
}
