use serde::Serialize;

/// Broad family an exception class belongs to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::EnumIter,
)]
pub enum ErrorCategory {
    Syntax,
    Type,
    Name,
    Lookup,
    #[strum(serialize = "File/IO")]
    #[serde(rename = "File/IO")]
    FileIo,
    Import,
    Arithmetic,
    Runtime,
    Connection,
    Other,
}

const SYNTAX: &[&str] = &["SyntaxError", "IndentationError", "TabError"];
const TYPE: &[&str] = &["TypeError", "ValueError", "AttributeError"];
const NAME: &[&str] = &["NameError", "UnboundLocalError"];
const LOOKUP: &[&str] = &["KeyError", "IndexError", "LookupError"];
const FILE_IO: &[&str] = &[
    "FileNotFoundError",
    "FileExistsError",
    "PermissionError",
    "IsADirectoryError",
    "NotADirectoryError",
    "IOError",
    "OSError",
];
const IMPORT: &[&str] = &["ImportError", "ModuleNotFoundError"];
const ARITHMETIC: &[&str] = &[
    "ZeroDivisionError",
    "OverflowError",
    "FloatingPointError",
    "ArithmeticError",
];
const RUNTIME: &[&str] = &["RuntimeError", "RecursionError", "NotImplementedError"];
const CONNECTION: &[&str] = &[
    "ConnectionError",
    "BrokenPipeError",
    "ConnectionAbortedError",
    "ConnectionRefusedError",
    "ConnectionResetError",
    "TimeoutError",
];

impl ErrorCategory {
    /// Classifies by fixed membership; anything unlisted is `Other`.
    pub fn of(class_name: &str) -> Self {
        let table: [(&[&str], Self); 9] = [
            (SYNTAX, Self::Syntax),
            (TYPE, Self::Type),
            (NAME, Self::Name),
            (LOOKUP, Self::Lookup),
            (FILE_IO, Self::FileIo),
            (IMPORT, Self::Import),
            (ARITHMETIC, Self::Arithmetic),
            (RUNTIME, Self::Runtime),
            (CONNECTION, Self::Connection),
        ];
        table
            .iter()
            .find(|(members, _)| members.contains(&class_name))
            .map_or(Self::Other, |(_, category)| *category)
    }
}

/// True for the malformed-source family (`SyntaxError` and its subclasses).
pub fn is_syntax_error(class_name: &str) -> bool {
    SYNTAX.contains(&class_name)
}
