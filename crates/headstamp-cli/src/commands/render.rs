//! Render command implementation.

use crate::cli::RenderArgs;
use crate::error::Result;
use headstamp_domain::{render_header, timestamp, HeaderInfo, Identity};

/// Execute the render command.
pub fn execute_render(args: RenderArgs, identity: &Identity) -> Result<()> {
    let info = HeaderInfo::new(args.filename, identity, timestamp::now());
    print!("{}", render_header(&args.language, &info)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use headstamp_domain::HeaderError;

    #[test]
    fn test_render_unsupported_language() {
        let args = RenderArgs {
            language: "unknown-lang".to_string(),
            filename: "x".to_string(),
        };
        let err = execute_render(args, &Identity::new("a", "a@b")).unwrap_err();
        assert!(matches!(
            err,
            CliError::Header(HeaderError::UnsupportedLanguage(_))
        ));
    }
}
