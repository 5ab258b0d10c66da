//! CLI argument parsing.

use camino::Utf8PathBuf;
use clap::Parser;

/// Convert TypeScript interfaces and classes to C# classes.
#[derive(Debug, Parser)]
#[command(name = "ts2cs")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// TypeScript file to convert (`-` or omitted reads stdin)
    pub input: Option<Utf8PathBuf>,

    /// File to write the C# output to (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<Utf8PathBuf>,

    /// Only convert declarations marked `export`
    #[arg(long = "exported-only")]
    pub exported_only: bool,

    /// Prefix for every generated class name
    #[arg(long)]
    pub prefix: Option<String>,

    /// Suffix for every generated class name
    #[arg(long)]
    pub suffix: Option<String>,

    /// Path to a ts2cs.json config file (defaults to ./ts2cs.json if present)
    #[arg(long)]
    pub config: Option<Utf8PathBuf>,

    /// Print the extracted declarations as JSON instead of C# (for debugging)
    #[arg(long = "emit-declarations")]
    pub emit_declarations: bool,

    /// Log pipeline progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Returns the input path, or `None` when reading stdin.
    pub fn input_path(&self) -> Option<&Utf8PathBuf> {
        self.input.as_ref().filter(|p| p.as_str() != "-")
    }

    /// Returns a display name for the input in diagnostics.
    pub fn input_name(&self) -> &str {
        self.input_path().map_or("<stdin>", |p| p.as_str())
    }
}
