//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use headstamp_domain::timestamp::format_timestamp;
use headstamp_domain::{Delimiters, HeaderInfo};
use std::path::Path;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// What happened to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    /// A header was prepended
    Inserted,
    /// The existing header was refreshed
    Updated,
    /// The file was left as is
    Skipped,
}

impl FileAction {
    /// Lowercase action name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileAction::Inserted => "inserted",
            FileAction::Updated => "updated",
            FileAction::Skipped => "skipped",
        }
    }
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the fields of a header.
    pub fn format_info(&self, path: &Path, info: &HeaderInfo) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "path": path.display().to_string(),
                    "filename": info.filename,
                    "author": info.author,
                    "created_by": info.created_by,
                    "created_at": format_timestamp(&info.created_at),
                    "updated_by": info.updated_by,
                    "updated_at": format_timestamp(&info.updated_at),
                });
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => {
                let created_at = format_timestamp(&info.created_at);
                let updated_at = format_timestamp(&info.updated_at);
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                builder.push_record(["Filename", info.filename.as_str()]);
                builder.push_record(["Author", info.author.as_str()]);
                builder.push_record(["Created by", info.created_by.as_str()]);
                builder.push_record(["Created at", created_at.as_str()]);
                builder.push_record(["Updated by", info.updated_by.as_str()]);
                builder.push_record(["Updated at", updated_at.as_str()]);
                Ok(self.finish_table(builder))
            }
            OutputFormat::Quiet => Ok(info.filename.clone()),
        }
    }

    /// Format the supported languages.
    pub fn format_languages(&self, languages: &[(&str, Delimiters)]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = languages
                    .iter()
                    .map(|(id, d)| {
                        serde_json::json!({
                            "language": id,
                            "left": d.left,
                            "right": d.right,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Language", "Left", "Right"]);
                for (id, d) in languages {
                    builder.push_record([*id, d.left, d.right]);
                }
                Ok(self.finish_table(builder))
            }
            OutputFormat::Quiet => {
                let ids: Vec<&str> = languages.iter().map(|(id, _)| *id).collect();
                Ok(ids.join("\n"))
            }
        }
    }

    /// Format the outcome for one file.
    pub fn file_result(&self, path: &Path, action: FileAction) -> Result<String> {
        let path = path.display().to_string();
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(&serde_json::json!({
                "path": path,
                "action": action.as_str(),
            }))?),
            OutputFormat::Table => Ok(match action {
                FileAction::Inserted => self.success(&format!("Header inserted: {}", path)),
                FileAction::Updated => self.success(&format!("Header updated: {}", path)),
                FileAction::Skipped => self.info(&format!("No header to update: {}", path)),
            }),
            OutputFormat::Quiet => Ok(path),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn finish_table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
