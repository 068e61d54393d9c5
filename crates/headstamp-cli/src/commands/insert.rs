//! Insert command implementation.

use crate::cli::StampArgs;
use crate::commands::batch::{run_batch, Stamped};
use crate::config::Config;
use crate::error::Result;
use crate::output::{FileAction, Formatter};
use chrono::NaiveDateTime;
use headstamp_domain::{stamp_document, timestamp, HeaderError, Identity, Stamp};

/// Execute the insert command.
pub fn execute_insert(
    args: StampArgs,
    config: &Config,
    identity: &Identity,
    formatter: &Formatter,
) -> Result<()> {
    let now = timestamp::now();
    run_batch(&args, config, formatter, |text, language_id, filename| {
        insert_or_update(text, language_id, filename, identity, now)
    })
}

/// Stamp one document, reporting whether its header was new.
fn insert_or_update(
    text: &str,
    language_id: &str,
    filename: &str,
    identity: &Identity,
    now: NaiveDateTime,
) -> std::result::Result<Stamped, HeaderError> {
    let stamped = match stamp_document(text, language_id, filename, identity, now)? {
        Stamp::Inserted(text) => (FileAction::Inserted, text),
        Stamp::Updated(text) => (FileAction::Updated, text),
    };
    Ok(Some(stamped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use headstamp_domain::{extract_header, get_header_info};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_insert_then_update_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("main.c");
        fs::write(&path, "int main(void) { return 0; }\n").unwrap();

        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let args = || StampArgs {
            paths: vec![path.clone()],
            language: None,
            dry_run: false,
        };

        execute_insert(args(), &Config::default(), &Identity::new("bob", "bob@example.com"), &formatter)
            .unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let info = get_header_info(extract_header(&text).unwrap()).unwrap();
        assert_eq!(info.filename, "main.c");
        assert_eq!(info.created_by, "bob");
        assert!(text.ends_with("\nint main(void) { return 0; }\n"));

        execute_insert(args(), &Config::default(), &Identity::new("alice", "alice@example.com"), &formatter)
            .unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let info = get_header_info(extract_header(&text).unwrap()).unwrap();
        assert_eq!(info.created_by, "bob");
        assert_eq!(info.updated_by, "alice");
        assert_eq!(text.matches("Created:").count(), 1);
    }

    #[test]
    fn test_insert_reports_action() {
        let identity = Identity::new("bob", "bob@example.com");
        let now = timestamp::now();

        let (action, text) = insert_or_update("x = 1\n", "python", "a.py", &identity, now)
            .unwrap()
            .unwrap();
        assert_eq!(action, FileAction::Inserted);
        assert!(text.starts_with("# "));

        let (action, _) = insert_or_update(&text, "python", "a.py", &identity, now)
            .unwrap()
            .unwrap();
        assert_eq!(action, FileAction::Updated);
    }
}
