//! Stable rule identifiers.

/// Line longer than the configured maximum.
pub const RULE_ID_LINE_LENGTH: &str = "SWS-F101";
/// Trailing whitespace at end of line.
pub const RULE_ID_TRAILING_WHITESPACE: &str = "SWS-F102";
/// Tab characters in indentation.
pub const RULE_ID_TAB_INDENTATION: &str = "SWS-F103";
/// Semicolon token.
pub const RULE_ID_TRAILING_SEMICOLON: &str = "SWS-F104";
/// Whitespace before a colon, or missing whitespace after one.
pub const RULE_ID_COLON_SPACING: &str = "SWS-F105";
/// Opening brace spacing/placement.
pub const RULE_ID_BRACE_SPACING: &str = "SWS-F106";

/// Postfix force unwrap.
pub const RULE_ID_FORCE_UNWRAP: &str = "SWS-S201";
/// Force cast (`as!`).
pub const RULE_ID_FORCE_CAST: &str = "SWS-S202";
/// Force try (`try!`).
pub const RULE_ID_FORCE_TRY: &str = "SWS-S203";
/// Implicitly unwrapped optional declaration.
pub const RULE_ID_IUO: &str = "SWS-S204";

/// `var` binding that is never mutated.
pub const RULE_ID_PREFER_LET: &str = "SWS-Q301";
/// Removable empty parentheses before a trailing closure.
pub const RULE_ID_EMPTY_PARENS: &str = "SWS-Q302";
/// `default:` switch case that only breaks.
pub const RULE_ID_DEFAULT_BREAK: &str = "SWS-Q303";

/// Type name is not UpperCamelCase.
pub const RULE_ID_TYPE_NAME: &str = "SWS-N401";
/// Member name is not lowerCamelCase.
pub const RULE_ID_MEMBER_NAME: &str = "SWS-N402";

/// Domain layer importing a module outside its allow-list.
pub const RULE_ID_DOMAIN_IMPORTS: &str = "SWS-A501";
/// Import that points against the layer dependency direction.
pub const RULE_ID_LAYER_DIRECTION: &str = "SWS-A502";
