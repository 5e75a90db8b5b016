use std::sync::OnceLock;

/// Returns folder names that are excluded from analysis by default.
pub fn get_default_exclude_folders() -> &'static [&'static str] {
    static FOLDERS: OnceLock<Vec<&'static str>> = OnceLock::new();
    FOLDERS.get_or_init(|| {
        vec![
            ".git",
            ".build",
            ".swiftpm",
            "DerivedData",
            "Pods",
            "Carthage",
            "fastlane",
            "vendor",
            "node_modules",
        ]
    })
}

/// Returns the Swift assignment and compound-assignment operator spellings.
pub fn get_assignment_operators() -> &'static [&'static str] {
    static OPS: OnceLock<Vec<&'static str>> = OnceLock::new();
    OPS.get_or_init(|| {
        vec![
            "=", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<=", ">>=",
        ]
    })
}

/// Returns the import kind specifiers that may precede a module name
/// (`import class Foo.Bar`).
pub fn get_import_kind_specifiers() -> &'static [&'static str] {
    static KINDS: OnceLock<Vec<&'static str>> = OnceLock::new();
    KINDS.get_or_init(|| {
        vec![
            "class",
            "struct",
            "enum",
            "protocol",
            "func",
            "var",
            "let",
            "typealias",
        ]
    })
}
