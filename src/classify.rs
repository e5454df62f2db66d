//! File-name classification.
//!
//! A file is "text" or "script" purely by its extension, matched
//! case-insensitively against two fixed tables. Anything that is not text is
//! counted as binary. The tables overlap on purpose, so `build.sh` is both a
//! text file and a script.

/// Extensions treated as text. Includes the leading dot.
pub static TEXT_EXTENSIONS: &[&str] = &[
    ".txt", ".c", ".h", ".cpp", ".hpp", ".java", ".py", ".sh", ".pl", ".js", ".css", ".html",
    ".xml", ".json", ".md",
];

/// Extensions treated as scripts. Includes the leading dot.
pub static SCRIPT_EXTENSIONS: &[&str] = &[".sh", ".py", ".pl", ".rb", ".php", ".js", ".lua"];

/// Category flags for one file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileClass {
    pub text: bool,
    pub script: bool,
}

impl FileClass {
    /// Binary is simply "not text".
    pub fn is_binary(&self) -> bool {
        !self.text
    }
}

/// Returns the extension of the base name, dot included (`"a.tar.GZ"` -> `".GZ"`).
///
/// Only the final path component is inspected, so a dot in a parent directory
/// never produces an extension.
pub fn extension(name: &str) -> Option<&str> {
    let base = name
        .rsplit(|c| c == '/' || c == std::path::MAIN_SEPARATOR)
        .next()
        .unwrap_or(name);
    base.rfind('.').map(|idx| &base[idx..])
}

fn matches_any(name: &str, table: &[&str]) -> bool {
    match extension(name) {
        Some(ext) => table.iter().any(|known| known.eq_ignore_ascii_case(ext)),
        None => false,
    }
}

pub fn is_text(name: &str) -> bool {
    matches_any(name, TEXT_EXTENSIONS)
}

pub fn is_script(name: &str) -> bool {
    matches_any(name, SCRIPT_EXTENSIONS)
}

pub fn classify(name: &str) -> FileClass {
    FileClass {
        text: is_text(name),
        script: is_script(name),
    }
}
