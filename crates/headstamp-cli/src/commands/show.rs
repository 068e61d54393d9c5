//! Show command implementation.

use crate::cli::ShowArgs;
use crate::error::Result;
use crate::output::Formatter;
use headstamp_domain::{extract_header, get_header_info};
use std::fs;

/// Execute the show command.
pub fn execute_show(args: ShowArgs, formatter: &Formatter) -> Result<()> {
    let text = fs::read_to_string(&args.path)?;

    match extract_header(&text) {
        Some(header) => {
            let info = get_header_info(header)?;
            println!("{}", formatter.format_info(&args.path, &info)?);
        }
        None => {
            println!("{}", formatter.info(&format!("No header in {}", args.path.display())));
        }
    }

    Ok(())
}
