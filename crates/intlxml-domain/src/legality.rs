//! Legality classification for a single (already trimmed) text value.
//!
//! A string is legal when, after peeling non-alphabetic characters and `$[SP]` markers from
//! both ends, nothing alphabetic is left or what is left is a placeholder expression
//! (`{{...}}` or a `${...` interpolation). Anything else is untranslated copy.

/// Non-breaking space marker emitted by the platform's templating layer.
pub const SPACE_MARKER: &str = "$[SP]";

/// Returns `true` when `text` contains no literal natural-language copy.
///
/// Only ASCII letters count as alphabetic. Rules are applied in a fixed order on every step,
/// and every step that does not decide strictly shortens the remainder.
pub fn is_legal(text: &str) -> bool {
    let mut rest = text;
    loop {
        if !rest.bytes().any(|b| b.is_ascii_alphabetic()) {
            return true;
        }
        if rest.starts_with("{{") && rest.ends_with("}}") {
            return true;
        }
        if rest.starts_with("${") {
            return true;
        }
        if let Some(stripped) = rest.strip_prefix(SPACE_MARKER) {
            rest = stripped;
            continue;
        }
        if let Some(stripped) = rest.strip_suffix(SPACE_MARKER) {
            rest = stripped;
            continue;
        }
        if !starts_alphabetic(rest) && !opens_placeholder(rest) {
            rest = drop_first(rest);
            continue;
        }
        if !ends_alphabetic(rest) && !rest.ends_with("}}") {
            rest = drop_last(rest);
            continue;
        }
        return false;
    }
}

fn starts_alphabetic(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}

fn ends_alphabetic(s: &str) -> bool {
    s.chars().next_back().is_some_and(|c| c.is_ascii_alphabetic())
}

fn opens_placeholder(s: &str) -> bool {
    s.starts_with("{{") || s.starts_with("${")
}

fn drop_first(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next();
    chars.as_str()
}

fn drop_last(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next_back();
    chars.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_without_letters_are_legal() {
        for s in ["", "123", "!!!", "  ", "42%", "&#160;", "---", "日本語"] {
            assert!(is_legal(s), "{s:?} should be legal");
        }
    }

    #[test]
    fn full_mustache_placeholder_is_legal() {
        assert!(is_legal("{{count}}"));
        assert!(is_legal("{{ctrl.title | translate}}"));
    }

    #[test]
    fn mustache_with_literal_tail_is_illegal() {
        assert!(!is_legal("{{count}} items"));
        assert!(!is_legal("Total: {{count}}"));
    }

    #[test]
    fn dollar_brace_opener_is_legal_regardless_of_suffix() {
        assert!(is_legal("${ctx.var}"));
        assert!(is_legal("${gs.getMessage('Hello')} and more words"));
    }

    #[test]
    fn space_markers_are_peeled() {
        assert!(!is_legal("$[SP]Hello$[SP]"));
        assert!(is_legal("$[SP]${gs.getMessage('Hi')}$[SP]"));
        assert!(is_legal("$[SP]$[SP]"));
        assert!(is_legal("$[SP]{{name}}"));
    }

    #[test]
    fn punctuation_is_peeled_from_both_ends() {
        assert!(is_legal("(${label})"));
        assert!(is_legal("- {{label}} -"));
        assert!(is_legal(": {{a}}"));
        assert!(!is_legal("\"Quoted\""));
        assert!(!is_legal("...Loading..."));
    }

    #[test]
    fn single_brace_is_not_a_placeholder() {
        assert!(!is_legal("{name}"));
        assert!(!is_legal("$name"));
    }

    #[test]
    fn placeholder_opener_stops_leading_peel() {
        // `{{` at the front is kept, so the trailing literal decides.
        assert!(!is_legal("{{a}} b"));
        // Trailing `}}` is kept, so the leading literal decides.
        assert!(!is_legal("a {{b}}"));
    }

    #[test]
    fn letters_at_both_ends_are_illegal() {
        assert!(!is_legal("Hello"));
        assert!(!is_legal("Hello ${name}"));
        assert!(!is_legal("a"));
    }

    #[test]
    fn non_ascii_letters_are_peeled_like_punctuation() {
        assert!(!is_legal("Café"));
        assert!(is_legal("é{{x}}"));
    }

    #[test]
    fn classification_is_idempotent() {
        for s in ["Hello", "{{a}}", "12", "$[SP]x", "${y}"] {
            assert_eq!(is_legal(s), is_legal(s));
        }
    }
}
