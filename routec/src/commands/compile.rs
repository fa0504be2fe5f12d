use std::path::{Path, PathBuf};

use clap::Args;
use eyre::Result;
use routec_codegen::{CompileOutcome, RustRouterGenerator, compile};
use routec_core::CompileTask;
use routec_parser::RoutesFileParser;

use super::{encoding_by_label, report_errors};
use crate::config::Config;

#[derive(Args)]
pub struct CompileCommand {
    /// Routes file to compile
    pub input: PathBuf,

    /// Output directory for generated code
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip the forward router
    #[arg(long)]
    pub no_forward: bool,

    /// Skip the reverse router
    #[arg(long)]
    pub no_reverse: bool,

    /// Wrap the reverse router in a namespace module
    #[arg(long)]
    pub namespace_reverse: bool,

    /// Extra `use` line for generated files (repeatable)
    #[arg(long = "import", value_name = "USE")]
    pub imports: Vec<String>,

    /// Text encoding for all reads and writes
    #[arg(long)]
    pub encoding: Option<String>,

    /// Emit parse errors as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to routec.toml
    #[arg(short, long, default_value = "routec.toml")]
    pub config: PathBuf,
}

/// Settings for one compile after merging flags over `routec.toml`.
#[derive(Debug)]
struct ResolvedOptions {
    task: CompileTask,
    output: PathBuf,
    encoding_label: String,
}

impl CompileCommand {
    /// Merge CLI flags over the config file.
    ///
    /// Flags win wherever both speak. The boolean flags are one-directional
    /// overrides: `--no-forward`/`--no-reverse` can only disable and
    /// `--namespace-reverse` can only enable, so the config file holds the
    /// resting state and a flag narrows it for one invocation.
    fn resolve(&self, config: &Config) -> ResolvedOptions {
        let output = self
            .output
            .clone()
            .or_else(|| config.compile.output.clone())
            .unwrap_or_else(|| PathBuf::from("src/generated"));
        let encoding_label = self
            .encoding
            .clone()
            .or_else(|| config.compile.encoding.clone())
            .unwrap_or_else(|| "utf-8".to_string());

        let task = CompileTask::new(&self.input)
            .with_imports(config.compile.imports.iter().cloned())
            .with_imports(self.imports.iter().cloned())
            .forward(!self.no_forward && config.compile.forward.unwrap_or(true))
            .reverse(!self.no_reverse && config.compile.reverse.unwrap_or(true))
            .namespaced_reverse(
                self.namespace_reverse || config.compile.namespace_reverse.unwrap_or(false),
            );

        ResolvedOptions {
            task,
            output,
            encoding_label,
        }
    }

    /// Run the compile command
    pub fn run(&self) -> Result<()> {
        let config = Config::load_if_present(&self.config)?;
        let options = self.resolve(&config);
        let encoding = encoding_by_label(&options.encoding_label)?;
        let output = options.output;

        let outcome = compile(
            &options.task,
            &RoutesFileParser::new(encoding),
            &RustRouterGenerator::new(),
            &output,
            encoding,
        )?;

        match outcome {
            CompileOutcome::Success(written) => {
                Self::print_summary(&self.input, &output, &written);
                Ok(())
            }
            CompileOutcome::ParseFailed(errors) => {
                report_errors(&self.input, encoding, &errors, self.json)?;
                std::process::exit(1);
            }
        }
    }

    fn print_summary(input: &Path, output: &Path, written: &[PathBuf]) {
        // Written paths come back absolute; show them relative to the
        // output directory when possible.
        let base = std::path::absolute(output).unwrap_or_else(|_| output.to_path_buf());

        println!("Compiled {}", input.display());
        println!();
        println!("Generated: {}/", output.display());
        for path in written {
            let shown = path.strip_prefix(&base).unwrap_or(path);
            println!("  + {}", shown.display());
        }
    }
}
