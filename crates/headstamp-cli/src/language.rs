//! Language detection from file paths.
//!
//! Editors hand the header engine a language id; on the command line it is
//! derived from the file name instead.

use std::collections::BTreeMap;
use std::path::Path;

/// Determine the language id for `path`.
///
/// An explicit id wins, then config overrides (exact file name, then
/// extension), then the built-in tables.
pub fn detect(
    path: &Path,
    explicit: Option<&str>,
    overrides: &BTreeMap<String, String>,
) -> Option<String> {
    if let Some(id) = explicit {
        return Some(id.to_string());
    }

    let file_name = path.file_name()?.to_str()?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    if let Some(id) = overrides.get(file_name) {
        return Some(id.clone());
    }
    if let Some(id) = extension.as_deref().and_then(|e| overrides.get(e)) {
        return Some(id.clone());
    }

    by_file_name(file_name)
        .or_else(|| extension.as_deref().and_then(by_extension))
        .map(str::to_string)
}

fn by_file_name(name: &str) -> Option<&'static str> {
    match name {
        "Makefile" | "makefile" | "GNUmakefile" => Some("makefile"),
        "Dockerfile" => Some("dockerfile"),
        "Rakefile" | "Gemfile" => Some("ruby"),
        _ => None,
    }
}

fn by_extension(extension: &str) -> Option<&'static str> {
    let id = match extension {
        "c" | "h" => "c",
        "cc" | "cpp" | "cxx" | "hh" | "hpp" | "hxx" | "tpp" => "cpp",
        "cs" => "csharp",
        "css" => "css",
        "dart" => "dart",
        "go" => "go",
        "groovy" | "gradle" => "groovy",
        "java" => "java",
        "js" | "mjs" | "cjs" => "javascript",
        "jsx" => "javascriptreact",
        "kt" | "kts" => "kotlin",
        "less" => "less",
        "m" => "objective-c",
        "mm" => "objective-cpp",
        "php" => "php",
        "rs" => "rust",
        "scala" => "scala",
        "scss" => "scss",
        "swift" => "swift",
        "ts" | "mts" | "cts" => "typescript",
        "tsx" => "typescriptreact",
        "coffee" => "coffeescript",
        "ex" | "exs" => "elixir",
        "mk" => "makefile",
        "pl" | "pm" => "perl",
        "ps1" | "psm1" => "powershell",
        "py" => "python",
        "r" => "r",
        "rb" => "ruby",
        "sh" | "bash" | "zsh" => "shellscript",
        "toml" => "toml",
        "yml" | "yaml" => "yaml",
        "clj" | "cljs" | "cljc" => "clojure",
        "lisp" | "el" => "lisp",
        "scm" | "ss" => "scheme",
        "fs" | "fsi" | "fsx" => "fsharp",
        "ml" | "mli" => "ocaml",
        "pas" | "pp" => "pascal",
        "adb" | "ads" => "ada",
        "elm" => "elm",
        "hs" => "haskell",
        "lua" => "lua",
        "sql" => "sql",
        "erl" | "hrl" => "erlang",
        "tex" => "latex",
        _ => return None,
    };
    Some(id)
}
