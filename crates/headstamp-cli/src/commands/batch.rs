//! Shared per-file loop for the insert and update commands.

use crate::cli::StampArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::language;
use crate::output::{FileAction, Formatter};
use headstamp_domain::HeaderError;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// New document text produced for a file, if any.
pub type Stamped = Option<(FileAction, String)>;

/// Result of processing one file.
#[derive(Debug)]
pub struct Processed {
    /// What happened
    pub action: FileAction,
    /// New text, when the file changed
    pub text: Option<String>,
}

/// Read `path`, transform it and write it back unless `dry_run`.
///
/// `stamp` receives the document text, its language id and its file name.
pub fn process_file<F>(
    path: &Path,
    language: Option<&str>,
    config: &Config,
    dry_run: bool,
    stamp: F,
) -> Result<Processed>
where
    F: FnOnce(&str, &str, &str) -> std::result::Result<Stamped, HeaderError>,
{
    let language_id = language::detect(path, language, &config.languages)
        .ok_or_else(|| CliError::UnknownLanguage(path.to_path_buf()))?;
    let text = fs::read_to_string(path)?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    debug!(path = %path.display(), language_id, "processing file");

    let Some((action, new_text)) = stamp(&text, &language_id, &filename)? else {
        return Ok(Processed {
            action: FileAction::Skipped,
            text: None,
        });
    };

    if !dry_run {
        fs::write(path, &new_text)?;
        info!(path = %path.display(), action = action.as_str(), "header written");
    }

    Ok(Processed {
        action,
        text: Some(new_text),
    })
}

/// Process every path in `args`, reporting as it goes.
///
/// Unsupported or undetected languages are reported and skipped. Other
/// failures are counted and turn into [`CliError::Failed`] at the end.
pub fn run_batch<F>(
    args: &StampArgs,
    config: &Config,
    formatter: &Formatter,
    stamp: F,
) -> Result<()>
where
    F: Fn(&str, &str, &str) -> std::result::Result<Stamped, HeaderError>,
{
    let mut failed = 0;

    for path in &args.paths {
        match process_file(path, args.language.as_deref(), config, args.dry_run, &stamp) {
            Ok(Processed { text: Some(text), .. }) if args.dry_run => print!("{}", text),
            Ok(processed) => println!("{}", formatter.file_result(path, processed.action)?),
            Err(CliError::Header(HeaderError::UnsupportedLanguage(id))) => {
                println!("{}", formatter.info(&format!("No header support for language {}", id)));
            }
            Err(e @ CliError::UnknownLanguage(_)) => {
                warn!(path = %path.display(), "language not detected");
                eprintln!("{}", formatter.warning(&e.to_string()));
            }
            Err(e) => {
                failed += 1;
                eprintln!("{}", formatter.error(&format!("{}: {}", path.display(), e)));
            }
        }
    }

    if failed > 0 {
        Err(CliError::Failed(failed))
    } else {
        Ok(())
    }
}
