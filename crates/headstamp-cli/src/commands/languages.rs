//! Languages command implementation.

use crate::error::Result;
use crate::output::Formatter;
use headstamp_domain::delimiters::supported_languages;

/// Execute the languages command.
pub fn execute_languages(formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_languages(&supported_languages())?);
    Ok(())
}
