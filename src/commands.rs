//! One-shot command execution
//!
//! Resolves the key from flags and configuration, reads the text, runs one
//! fence operation and writes the result.

use std::io::{Read, Write};

use strum::Display;
use tracing::{debug, info};

use crate::cli::FenceArgs;
use crate::config_file::FenceConfig;
use crate::error::{RailFenceError, Result};
use crate::fence::{self, FenceKey};
use crate::source::TextSource;

/// Fence operation selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    Encrypt,
    Decrypt,
    Render,
}

impl Operation {
    /// Apply the operation to `text`
    pub fn apply(self, text: &str, key: FenceKey) -> String {
        match self {
            Self::Encrypt => fence::encrypt(text, key),
            Self::Decrypt => fence::decrypt(text, key),
            Self::Render => {
                let mut diagram = fence::render(text, key);
                if !diagram.is_empty() {
                    diagram.push('\n');
                }
                diagram
            }
        }
    }
}

/// Key from `--rails`/`--start`, falling back to the configuration.
///
/// The configured start position is only used together with the configured
/// rail count; with `--rails` alone the fence starts on the top rail.
pub fn resolve_key(args: &FenceArgs, config: &FenceConfig) -> Result<FenceKey> {
    let (rails, start) = match args.rails {
        Some(rails) => (rails, args.start.unwrap_or(1)),
        None => {
            let rails = config.rails.ok_or_else(|| {
                RailFenceError::validation(
                    "No rail count given; pass --rails or set \"rails\" in the configuration file",
                )
            })?;
            (rails, args.start.or(config.start).unwrap_or(1))
        }
    };
    Ok(FenceKey::from_one_based(rails, start)?)
}

/// Text from `--text`, `--input`, or else all of `stdin`
pub fn read_text<S: TextSource, R: Read>(
    args: &FenceArgs,
    source: &S,
    mut stdin: R,
) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(location) = &args.input {
        return Ok(source.fetch(location)?);
    }

    debug!("reading text from standard input");
    let mut text = String::new();
    stdin.read_to_string(&mut text)?;
    Ok(text)
}

/// Run `operation` end to end.
///
/// The result goes to `--output` when given, otherwise to `stdout`, exactly
/// as produced.
pub fn execute<S, R, W>(
    operation: Operation,
    args: &FenceArgs,
    config: &FenceConfig,
    source: &S,
    stdin: R,
    mut stdout: W,
) -> Result<()>
where
    S: TextSource,
    R: Read,
    W: Write,
{
    let key = resolve_key(args, config)?;
    let text = read_text(args, source, stdin)?;
    info!(%operation, %key, chars = text.chars().count(), "running fence operation");

    let result = operation.apply(&text, key);

    match &args.output {
        Some(path) => {
            std::fs::write(path, &result)?;
            info!(path = %path.display(), "result written");
        }
        None => {
            stdout.write_all(result.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceError;

    struct NoSource;

    impl TextSource for NoSource {
        fn fetch(&self, location: &str) -> std::result::Result<String, SourceError> {
            Err(SourceError::NotFound {
                path: location.into(),
            })
        }
    }

    fn args() -> FenceArgs {
        FenceArgs {
            rails: None,
            start: None,
            input: None,
            text: None,
            output: None,
        }
    }

    #[test]
    fn test_key_from_flags() {
        let a = FenceArgs {
            rails: Some(4),
            start: Some(3),
            ..args()
        };
        assert_eq!(
            resolve_key(&a, &FenceConfig::default()).unwrap(),
            FenceKey::new(4, 2).unwrap()
        );
    }

    #[test]
    fn test_key_from_config() {
        let config = FenceConfig {
            rails: Some(5),
            start: Some(5),
            ..FenceConfig::default()
        };
        assert_eq!(
            resolve_key(&args(), &config).unwrap(),
            FenceKey::new(5, 4).unwrap()
        );

        // --rails overrides and ignores the configured start
        let a = FenceArgs {
            rails: Some(3),
            ..args()
        };
        assert_eq!(
            resolve_key(&a, &config).unwrap(),
            FenceKey::new(3, 0).unwrap()
        );
    }

    #[test]
    fn test_missing_rails() {
        let err = resolve_key(&args(), &FenceConfig::default()).unwrap_err();
        assert!(matches!(err, RailFenceError::Validation(_)));
    }

    #[test]
    fn test_out_of_range_key() {
        let a = FenceArgs {
            rails: Some(3),
            start: Some(0),
            ..args()
        };
        let err = resolve_key(&a, &FenceConfig::default()).unwrap_err();
        assert!(matches!(err, RailFenceError::Key(_)));
    }

    #[test]
    fn test_execute_reads_stdin() {
        let a = FenceArgs {
            rails: Some(3),
            ..args()
        };
        let mut out = Vec::new();
        execute(
            Operation::Encrypt,
            &a,
            &FenceConfig::default(),
            &NoSource,
            "WEAREDISCOVEREDFLEEATONCE".as_bytes(),
            &mut out,
        )
        .unwrap();
        assert_eq!(out, b"WECRLTEERDSOEEFEAOCAIVDEN");
    }

    #[test]
    fn test_execute_reports_source_error() {
        let a = FenceArgs {
            rails: Some(3),
            input: Some("gone.txt".to_string()),
            ..args()
        };
        let err = execute(
            Operation::Decrypt,
            &a,
            &FenceConfig::default(),
            &NoSource,
            std::io::empty(),
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, RailFenceError::Source(_)));
    }

    #[test]
    fn test_render_ends_with_newline() {
        let key = FenceKey::new(2, 0).unwrap();
        assert_eq!(Operation::Render.apply("ABCD", key), "A   C\n  B   D\n");
        assert_eq!(Operation::Render.apply("", key), "");
    }

    #[test]
    fn test_execute_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let a = FenceArgs {
            rails: Some(3),
            text: Some("WECRLTEERDSOEEFEAOCAIVDEN".to_string()),
            output: Some(path.clone()),
            ..args()
        };
        let mut out = Vec::new();
        execute(
            Operation::Decrypt,
            &a,
            &FenceConfig::default(),
            &NoSource,
            std::io::empty(),
            &mut out,
        )
        .unwrap();
        assert!(out.is_empty());
        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "WEAREDISCOVEREDFLEEATONCE"
        );
    }
}
