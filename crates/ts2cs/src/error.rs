//! CLI error types.

use camino::Utf8PathBuf;
use decl_parser::ParseError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// An error that stops a ts2cs run.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    /// The input could not be read.
    #[error("failed to read {name}")]
    #[diagnostic(code(ts2cs::read))]
    Read {
        /// The input path, or `<stdin>`.
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be written.
    #[error("failed to write {path}")]
    #[diagnostic(code(ts2cs::write))]
    Write {
        /// The output path.
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A config file passed with `--config` is missing or malformed.
    #[error("invalid config file {path}")]
    #[diagnostic(
        code(ts2cs::config),
        help("expected a JSON object with `exportedOnly`, `namePrefix` or `nameSuffix`")
    )]
    Config {
        /// The config path.
        path: Utf8PathBuf,
        #[source]
        source: ConfigSource,
    },

    /// The declarations could not be serialized for `--emit-declarations`.
    #[error("failed to serialize declarations")]
    #[diagnostic(code(ts2cs::json))]
    Json(#[source] serde_json::Error),

    /// The input does not match the declaration grammar.
    #[error("{message}")]
    #[diagnostic(
        code(ts2cs::parse),
        help("only `interface` and `class` blocks with `name?: type` fields are supported")
    )]
    Parse {
        /// The parse error message, with position.
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },
}

/// Why a config file could not be used.
#[derive(Debug, Error)]
pub enum ConfigSource {
    /// Reading the file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The file is not valid config JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Wraps a parse error together with the source it refers to.
    pub fn parse(error: ParseError, name: &str, source: String) -> Self {
        let message = format!(
            "{} ({}:{})",
            error.kind,
            name,
            error.line_col(&source)
        );
        Self::Parse {
            message,
            src: NamedSource::new(name, source),
            span: error.span.as_range().into(),
        }
    }
}
