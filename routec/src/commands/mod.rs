mod check;
mod compile;
mod completions;
mod inspect;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use compile::CompileCommand;
use completions::CompletionsCommand;
use encoding_rs::Encoding;
use eyre::{Result, eyre};
use inspect::InspectCommand;
use routec_core::CompilationError;
use routec_parser::SyntaxError;

#[derive(Parser)]
#[command(name = "routec")]
#[command(version)]
#[command(about = "Compile a routes DSL into Rust router source")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Compile(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a routes file into generated router source
    Compile(CompileCommand),

    /// Parse a routes file without generating code
    Check(CheckCommand),

    /// Examine a file for routec authorship and line mappings
    Inspect(InspectCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Resolve an encoding label like `utf-8` or `windows-1252`.
pub(crate) fn encoding_by_label(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.as_bytes())
        .ok_or_else(|| eyre!("unknown encoding label '{}'", label))
}

/// Print parse errors, pretty by default or as JSON.
pub(crate) fn report_errors(
    input: &std::path::Path,
    encoding: &'static Encoding,
    errors: &[CompilationError],
    json: bool,
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(errors)?);
        return Ok(());
    }

    // Re-read the input for source context; when that fails (missing or
    // undecodable file) the errors still print, just without snippets.
    let source = std::fs::read(input)
        .ok()
        .and_then(|bytes| routec_core::decode(&bytes, encoding));
    let filename = input.display().to_string();

    match source {
        Some(src) => {
            for error in errors {
                let pretty = SyntaxError::new(error, src.clone(), &filename);
                eprintln!("{:?}", miette::Report::new(pretty));
            }
        }
        None => {
            for error in errors {
                eprintln!("error: {}", error);
            }
        }
    }
    Ok(())
}
