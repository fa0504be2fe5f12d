use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use routec_parser::RoutesFileParser;

use super::{encoding_by_label, report_errors};

#[derive(Args)]
pub struct CheckCommand {
    /// Routes file to validate
    pub input: PathBuf,

    /// Text encoding for reading the input
    #[arg(long, default_value = "utf-8")]
    pub encoding: String,

    /// Emit parse errors as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let encoding = encoding_by_label(&self.encoding)?;

        let rules = match RoutesFileParser::new(encoding).parse(&self.input) {
            Ok(rules) => rules,
            Err(errors) => {
                report_errors(&self.input, encoding, &errors, self.json)?;
                std::process::exit(1);
            }
        };

        println!("✓ {} is valid", self.input.display());
        println!();
        println!(
            "  {} route{}:",
            rules.len(),
            if rules.len() == 1 { "" } else { "s" }
        );
        for rule in &rules {
            println!(
                "    {:<8} {:<24} {}",
                rule.verb.as_str(),
                rule.path_pattern(),
                rule.call
            );
        }

        Ok(())
    }
}
