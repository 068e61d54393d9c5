//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            print!("{}", config.to_toml()?);
        }
        ConfigAction::Init { force } => {
            init_config(path, force)?;
            println!(
                "{}",
                formatter.success(&format!("Configuration written to {}", path.display()))
            );
        }
    }

    Ok(())
}

/// Write the default configuration to `path`.
fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::InvalidInput(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    Config::default().save(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".headstamp").join("config.toml");

        init_config(&path, false).unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.identity.email_domain, "localhost");
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[identity]\nuser = \"keep\"\n").unwrap();

        assert!(matches!(init_config(&path, false), Err(CliError::InvalidInput(_))));
        assert!(fs::read_to_string(&path).unwrap().contains("keep"));

        init_config(&path, true).unwrap();
        assert!(!fs::read_to_string(&path).unwrap().contains("keep"));
    }
}
