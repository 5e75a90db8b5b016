//! Shared constants, compiled regexes, and static sets.

mod limits;
mod regexes;
mod sets;

pub use limits::{CONFIG_FILENAME, DEFAULT_MAX_LINE_LENGTH, MAX_RECURSION_DEPTH, PROGRESS_BAR_THRESHOLD};
pub use regexes::{get_lower_camel_re, get_suppression_re, get_test_file_re, get_upper_camel_re};
pub use sets::{get_assignment_operators, get_default_exclude_folders, get_import_kind_specifiers};

pub use get_assignment_operators as ASSIGNMENT_OPERATORS;
pub use get_default_exclude_folders as DEFAULT_EXCLUDE_FOLDERS;
pub use get_import_kind_specifiers as IMPORT_KIND_SPECIFIERS;
pub use get_lower_camel_re as LOWER_CAMEL_RE;
pub use get_suppression_re as SUPPRESSION_RE;
pub use get_test_file_re as TEST_FILE_RE;
pub use get_upper_camel_re as UPPER_CAMEL_RE;
