//! Delimiter registry - per-language comment wrapping for header lines

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Width shared by every left and right delimiter in the registry
pub const DELIMITER_WIDTH: usize = 2;

/// Left/right comment delimiters wrapping every header line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delimiters {
    /// Replaces the first [`DELIMITER_WIDTH`] characters of each line
    pub left: &'static str,

    /// Replaces the last [`DELIMITER_WIDTH`] characters of each line
    pub right: &'static str,
}

impl Delimiters {
    const fn new(left: &'static str, right: &'static str) -> Self {
        Self { left, right }
    }
}

const SLASHES: Delimiters = Delimiters::new("/*", "*/");
const HASHES: Delimiters = Delimiters::new("# ", " #");
const SEMICOLONS: Delimiters = Delimiters::new(";;", ";;");
const PARENS: Delimiters = Delimiters::new("(*", "*)");
const DASHES: Delimiters = Delimiters::new("--", "--");
const PERCENTS: Delimiters = Delimiters::new("%%", "%%");

/// Editor language identifiers and their delimiters
const LANGUAGES: &[(&str, Delimiters)] = &[
    ("c", SLASHES),
    ("cpp", SLASHES),
    ("csharp", SLASHES),
    ("css", SLASHES),
    ("dart", SLASHES),
    ("go", SLASHES),
    ("groovy", SLASHES),
    ("java", SLASHES),
    ("javascript", SLASHES),
    ("javascriptreact", SLASHES),
    ("kotlin", SLASHES),
    ("less", SLASHES),
    ("objective-c", SLASHES),
    ("objective-cpp", SLASHES),
    ("php", SLASHES),
    ("rust", SLASHES),
    ("scala", SLASHES),
    ("scss", SLASHES),
    ("swift", SLASHES),
    ("typescript", SLASHES),
    ("typescriptreact", SLASHES),
    ("coffeescript", HASHES),
    ("dockerfile", HASHES),
    ("elixir", HASHES),
    ("makefile", HASHES),
    ("perl", HASHES),
    ("powershell", HASHES),
    ("python", HASHES),
    ("r", HASHES),
    ("ruby", HASHES),
    ("shellscript", HASHES),
    ("toml", HASHES),
    ("yaml", HASHES),
    ("clojure", SEMICOLONS),
    ("lisp", SEMICOLONS),
    ("scheme", SEMICOLONS),
    ("fsharp", PARENS),
    ("ocaml", PARENS),
    ("pascal", PARENS),
    ("ada", DASHES),
    ("elm", DASHES),
    ("haskell", DASHES),
    ("lua", DASHES),
    ("sql", DASHES),
    ("erlang", PERCENTS),
    ("latex", PERCENTS),
    ("matlab", PERCENTS),
    ("tex", PERCENTS),
];

static REGISTRY: Lazy<HashMap<&'static str, Delimiters>> =
    Lazy::new(|| LANGUAGES.iter().copied().collect());

/// Look up the delimiters for a language
pub fn delimiters_for(language_id: &str) -> Option<Delimiters> {
    REGISTRY.get(language_id).copied()
}

/// Check if a language has header support
pub fn supports_language(language_id: &str) -> bool {
    REGISTRY.contains_key(language_id)
}

/// All supported language identifiers with their delimiters, sorted by id
pub fn supported_languages() -> Vec<(&'static str, Delimiters)> {
    let mut languages = LANGUAGES.to_vec();
    languages.sort_by_key(|(id, _)| *id);
    languages
}
