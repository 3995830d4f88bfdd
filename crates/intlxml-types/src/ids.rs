//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_INTL_UNTRANSLATED_TEXT: &str = "intl.untranslated_text";
pub const CHECK_INTL_XML_PARSE: &str = "intl.xml_parse";

// Codes: intl.untranslated_text
pub const CODE_LITERAL_TEXT: &str = "literal_text";

// Codes: intl.xml_parse
pub const CODE_PARSE_ERROR: &str = "parse_error";
pub const CODE_READ_ERROR: &str = "read_error";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
