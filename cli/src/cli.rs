use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Parser};

use aovzstd_core::compression::{CompressionLevel, LevelError};
use aovzstd_core::config::{BatchConfig, Operation, Target};
use aovzstd_core::constants::{DEFAULT_DICTIONARY_PATH, DICTIONARY_ENV};

use crate::error::{CliError, CliResult};

#[derive(Parser, Debug)]
#[command(
    name = "aovzstd",
    about = "Compress or decompress game asset files with a shared zstd dictionary",
    version,
    disable_version_flag = true,
    after_help = "Examples:\n  aovzstd -c -f input.txt -o output.zst\n  aovzstd -d -D /input/dir -o /output/dir"
)]
#[command(group(ArgGroup::new("mode").required(true).args(["compress", "decompress"])))]
#[command(group(ArgGroup::new("input").required(true).args(["dir", "file"])))]
pub struct Cli {
    /// Compress the specified file or directory
    #[arg(short = 'c', long)]
    pub compress: bool,

    /// Decompress the specified file or directory
    #[arg(short = 'd', long)]
    pub decompress: bool,

    /// Compression level (1 up to the engine maximum, default 19)
    #[arg(short = 'l', long = "clevel", value_name = "LEVEL", conflicts_with = "decompress", allow_negative_numbers = true)]
    pub clevel: Option<i32>,

    /// Process every file in a directory
    #[arg(short = 'D', long, value_name = "DIRECTORY")]
    pub dir: Option<PathBuf>,

    /// Process a single file
    #[arg(short = 'f', long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output file or directory; defaults to rewriting the input in place
    #[arg(short = 'o', long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Show per-file details and a preview of each result
    #[arg(short = 'V', long)]
    pub verbose: bool,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Dictionary file
    #[arg(long, value_name = "PATH", env = DICTIONARY_ENV, default_value = DEFAULT_DICTIONARY_PATH)]
    pub dict: PathBuf,

    /// Print run telemetry as JSON on stdout
    #[arg(long)]
    pub stats: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn operation(&self) -> Operation {
        if self.compress {
            Operation::Compress
        } else {
            Operation::Decompress
        }
    }

    pub fn target(&self) -> CliResult<Target> {
        match (&self.file, &self.dir) {
            (Some(f), None) => Ok(Target::File(f.clone())),
            (None, Some(d)) => Ok(Target::Dir(d.clone())),
            _ => Err(CliError::Usage("exactly one of --file or --dir is required".into())),
        }
    }

    /// Requested level, or the preset plus the reason the request was refused.
    pub fn level(&self) -> (CompressionLevel, Option<LevelError>) {
        match CompressionLevel::resolve(self.clevel) {
            Ok(level) => (level, None),
            Err(e) => (CompressionLevel::PRESET, Some(e)),
        }
    }

    pub fn batch_config(&self, level: CompressionLevel) -> BatchConfig {
        let mut cfg = BatchConfig::new(self.operation()).with_level(level);
        cfg.output = self.output.clone();
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("aovzstd").chain(args.iter().copied()))
    }

    #[test]
    fn compress_file_with_level() {
        let cli = parse(&["-c", "-l", "5", "-f", "a.bin", "-o", "out"]).unwrap();
        assert_eq!(cli.operation(), Operation::Compress);
        assert_eq!(cli.target().unwrap(), Target::File(PathBuf::from("a.bin")));
        assert_eq!(cli.level().0.get(), 5);
        assert_eq!(cli.output, Some(PathBuf::from("out")));
    }

    #[test]
    fn mode_is_required_and_exclusive() {
        assert_eq!(parse(&["-f", "a"]).unwrap_err().kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(parse(&["-c", "-d", "-f", "a"]).unwrap_err().kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn input_is_required_and_exclusive() {
        assert_eq!(parse(&["-c"]).unwrap_err().kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(parse(&["-c", "-f", "a", "-D", "b"]).unwrap_err().kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn level_is_rejected_with_decompress() {
        assert_eq!(
            parse(&["-d", "-l", "3", "-D", "dir"]).unwrap_err().kind(),
            ErrorKind::ArgumentConflict
        );
        assert_eq!(
            parse(&["-d", "--clevel", "19", "-f", "a.bin"]).unwrap_err().kind(),
            ErrorKind::ArgumentConflict
        );
        assert!(parse(&["-c", "-l", "3", "-D", "dir"]).is_ok());
    }

    #[test]
    fn out_of_range_level_falls_back_to_preset() {
        let cli = parse(&["-c", "-l", "0", "-f", "a"]).unwrap();
        let (level, err) = cli.level();
        assert_eq!(level, CompressionLevel::PRESET);
        assert_eq!(err.unwrap().level, 0);

        let cli = parse(&["-c", "-l", "-3", "-f", "a"]).unwrap();
        assert!(cli.level().1.is_some());
    }

    #[test]
    fn verbose_and_version_shorts_are_distinct() {
        let cli = parse(&["-d", "-V", "-D", "dir"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(parse(&["-v"]).unwrap_err().kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn batch_config_carries_output() {
        let cli = parse(&["-d", "-D", "in", "-o", "out"]).unwrap();
        let cfg = cli.batch_config(CompressionLevel::PRESET);
        assert_eq!(cfg.operation, Operation::Decompress);
        assert_eq!(cfg.output, Some(PathBuf::from("out")));
    }
}
