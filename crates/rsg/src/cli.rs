//! CLI definitions and exit codes.

use std::path::PathBuf;

use clap::Parser;
use rsg::{EmitConfig, GenerateOptions};

/// Exit code for success.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for usage, spec and I/O failures.
pub const EXIT_FAILURE: i32 = 1;
/// Exit code for an unrecognized artifact selector.
pub const EXIT_BAD_SELECTOR: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "rsg")]
#[command(about = "Command-protocol generator - emits marshaling and playback code from an api spec")]
#[command(version)]
pub struct Cli {
    /// File whose first character selects the artifact (0-3)
    #[arg(value_name = "COMMAND_FILE")]
    pub selector: PathBuf,

    /// Output file (truncated)
    #[arg(value_name = "OUT_FILE")]
    pub output: PathBuf,

    /// Api spec file (read from stdin when omitted)
    #[arg(long, value_name = "PATH")]
    pub spec: Option<PathBuf>,

    /// Inline payload limit in bytes
    #[arg(long, value_name = "BYTES", default_value_t = rsg_emit::DEFAULT_INLINE_THRESHOLD)]
    pub inline_threshold: u32,

    /// Enable verbose output (sets RUST_LOG=debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Generator options described by the flags.
    #[must_use]
    pub fn options(&self) -> GenerateOptions {
        let config = EmitConfig::default().with_inline_threshold(self.inline_threshold);
        let options = GenerateOptions::new().with_config(config);
        match &self.spec {
            Some(path) => options.with_spec_file(path),
            None => options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use rsg::SpecSource;

    #[test]
    fn test_two_positionals() {
        let cli = Cli::try_parse_from(["rsg", "sel", "out.h"]).unwrap();
        assert_eq!(cli.selector, PathBuf::from("sel"));
        assert_eq!(cli.output, PathBuf::from("out.h"));
        let options = cli.options();
        assert_eq!(options.spec, SpecSource::Stdin);
        assert_eq!(options.config.inline_threshold, 1024);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "rsg",
            "--spec",
            "rs.spec",
            "--inline-threshold",
            "512",
            "sel",
            "out.h",
        ])
        .unwrap();
        let options = cli.options();
        assert_eq!(options.spec, SpecSource::File(PathBuf::from("rs.spec")));
        assert_eq!(options.config.inline_threshold, 512);
    }

    #[test]
    fn test_wrong_argument_count() {
        let err = Cli::try_parse_from(["rsg", "sel"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        let err = Cli::try_parse_from(["rsg", "a", "b", "c"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
