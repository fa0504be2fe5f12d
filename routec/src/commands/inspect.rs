use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use routec_core::GeneratedSource;

use super::encoding_by_label;

#[derive(Args)]
pub struct InspectCommand {
    /// File to examine
    pub file: PathBuf,

    /// Map this 1-based generated line back to its source line
    #[arg(short, long)]
    pub line: Option<usize>,

    /// Text encoding for reading the file
    #[arg(long, default_value = "utf-8")]
    pub encoding: String,
}

impl InspectCommand {
    /// Run the inspect command
    pub fn run(&self) -> Result<()> {
        let encoding = encoding_by_label(&self.encoding)?;

        let Some(detected) = GeneratedSource::detect(&self.file, encoding) else {
            println!("{} was not produced by routec", self.file.display());
            std::process::exit(1);
        };

        println!("{} is routec output", self.file.display());
        match detected.source() {
            Some(source) => println!("  source: {}", source.display()),
            None => println!("  source: (not recorded)"),
        }

        if let Some(line) = self.line {
            match detected.map_line(line) {
                Some(original) => println!("  line {} <- source line {}", line, original),
                None => println!("  line {} precedes any line marker", line),
            }
        }

        Ok(())
    }
}
