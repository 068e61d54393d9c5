//! Update command implementation.

use crate::cli::StampArgs;
use crate::commands::batch::run_batch;
use crate::config::Config;
use crate::error::Result;
use crate::output::{FileAction, Formatter};
use headstamp_domain::{refresh_document, timestamp, Identity};

/// Execute the update command.
///
/// Only files that already carry a header are rewritten.
pub fn execute_update(
    args: StampArgs,
    config: &Config,
    identity: &Identity,
    formatter: &Formatter,
) -> Result<()> {
    let now = timestamp::now();
    run_batch(&args, config, formatter, |text, language_id, _| {
        let refreshed = refresh_document(text, language_id, identity, now)?;
        Ok(refreshed.map(|text| (FileAction::Updated, text)))
    })
}
