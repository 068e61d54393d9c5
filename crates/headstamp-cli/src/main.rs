//! Headstamp CLI - Insert and refresh fixed-layout file headers.

use clap::Parser;
use headstamp_cli::commands;
use headstamp_cli::identity;
use headstamp_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> headstamp_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Load config, falling back to defaults when the file is absent
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::path()?,
    };
    let config = Config::load(&config_path)?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);
    let identity = identity::resolve(cli.user.as_deref(), cli.email.as_deref(), &config.identity);

    match cli.command {
        Command::Insert(args) => commands::execute_insert(args, &config, &identity, &formatter),
        Command::Update(args) => commands::execute_update(args, &config, &identity, &formatter),
        Command::Show(args) => commands::execute_show(args, &formatter),
        Command::Render(args) => commands::execute_render(args, &identity),
        Command::Languages => commands::execute_languages(&formatter),
        Command::Config(args) => commands::execute_config(args, &config, &config_path, &formatter),
    }
}

/// Log to stderr; `RUST_LOG` overrides the verbosity flag.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
