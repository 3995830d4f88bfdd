//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after XML examples.
    pub examples: ExamplePair,
}

/// Before and after XML examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Markup that would trigger a finding.
    pub before: &'static str,
    /// Markup that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Check IDs
        ids::CHECK_INTL_UNTRANSLATED_TEXT => Some(explain_untranslated_text()),
        ids::CHECK_INTL_XML_PARSE => Some(explain_xml_parse()),

        // Codes
        ids::CODE_LITERAL_TEXT => Some(explain_literal_text()),
        ids::CODE_PARSE_ERROR => Some(explain_parse_error()),
        ids::CODE_READ_ERROR => Some(explain_read_error()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[ids::CHECK_INTL_UNTRANSLATED_TEXT, ids::CHECK_INTL_XML_PARSE]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_LITERAL_TEXT,
        ids::CODE_PARSE_ERROR,
        ids::CODE_READ_ERROR,
    ]
}

// --- Check-level explanations ---

fn explain_untranslated_text() -> Explanation {
    Explanation {
        title: "Untranslated Text",
        description: "\
Detects element text that contains literal natural-language copy instead of a
message lookup or template interpolation.

Every text node is trimmed and then peeled from both ends: punctuation, digits,
whitespace and `$[SP]` markers are stripped until either nothing alphabetic is
left (legal), the remainder is a full `{{...}}` expression (legal), the remainder
starts with a `${` interpolation (legal), or a letter is reached at both ends
(illegal).

Text inside `script`, `g:evaluate` and `g2:evaluate` elements is never checked.
Attribute values are only checked when `check_attributes = true`.",
        remediation: "\
Move the copy into a message bundle and reference it through an interpolation:

    ${gs.getMessage('Welcome')}

Purely numeric or symbolic text, and text made only of placeholders, passes as is.",
        examples: ExamplePair {
            before: r#"<j:jelly xmlns:j="jelly:core">
  <h1>Welcome</h1>
  <span>{{count}} items</span>
</j:jelly>"#,
            after: r#"<j:jelly xmlns:j="jelly:core">
  <h1>${gs.getMessage('Welcome')}</h1>
  <span>{{itemsLabel}}</span>
</j:jelly>"#,
        },
    }
}

fn explain_xml_parse() -> Explanation {
    Explanation {
        title: "XML Parse Failure",
        description: "\
Reports documents that could not be read or parsed as well-formed XML.

A document that fails to parse is not checked for untranslated text, so its
contents are effectively unverified. Parse failures are reported as warnings and
never stop the rest of the batch.",
        remediation: "\
Fix the markup at the reported line and column. Common causes are unclosed or
mismatched tags, unescaped `&` and `<` in text, HTML-only entities such as
`&nbsp;`, and more than one root element.",
        examples: ExamplePair {
            before: r#"<j:jelly>
  <p>Terms &nbsp; Conditions</p>
</j:jelly"#,
            after: r#"<j:jelly>
  <p>${gs.getMessage('Terms and Conditions')}</p>
</j:jelly>"#,
        },
    }
}

// --- Code-level explanations ---

fn explain_literal_text() -> Explanation {
    let mut exp = explain_untranslated_text();
    exp.title = "Literal Text";
    exp
}

fn explain_parse_error() -> Explanation {
    let mut exp = explain_xml_parse();
    exp.title = "Parse Error";
    exp
}

fn explain_read_error() -> Explanation {
    Explanation {
        title: "Read Error",
        description: "\
A document matched a target pattern but could not be read, or its contents were
not valid UTF-8.",
        remediation: "\
Check file permissions and re-save the document as UTF-8, or exclude it from the
target with a `!` pattern.",
        examples: ExamplePair {
            before: r#"[targets.ui]
src = ["ui/**/*.xml"]"#,
            after: r#"[targets.ui]
src = ["ui/**/*.xml", "!ui/vendor/**"]"#,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_check_id() {
        assert!(lookup_explanation(ids::CHECK_INTL_UNTRANSLATED_TEXT).is_some());
        assert!(lookup_explanation(ids::CHECK_INTL_XML_PARSE).is_some());
    }

    #[test]
    fn lookup_by_code() {
        assert!(lookup_explanation(ids::CODE_LITERAL_TEXT).is_some());
        assert!(lookup_explanation(ids::CODE_PARSE_ERROR).is_some());
        assert!(lookup_explanation(ids::CODE_READ_ERROR).is_some());
    }

    #[test]
    fn lookup_unknown_returns_none() {
        assert!(lookup_explanation("unknown.check").is_none());
        assert!(lookup_explanation("unknown_code").is_none());
    }

    #[test]
    fn all_identifiers_are_registered() {
        for id in all_check_ids().iter().chain(all_codes()) {
            assert!(
                lookup_explanation(id).is_some(),
                "{} should be in registry",
                id
            );
        }
    }
}
