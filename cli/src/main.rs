mod cli;
mod error;
mod output;

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::WriteStyle;
use log::LevelFilter;

use aovzstd_core::batch::run_batch;
use aovzstd_core::compression::{CompressionLevel, Dictionary};
use aovzstd_core::config::Operation;

use cli::Cli;
use error::{exit_with_error, CliResult, EXIT_ERROR, EXIT_SUCCESS};

fn init_logging(cli: &Cli, color: bool) {
    // Logging policy:
    //   RUST_LOG  → honoured when set
    //   --verbose → "info"
    //   default   → "warn" (skipped and failed items only)
    let mut builder = env_logger::Builder::new();
    builder.filter_level(if cli.verbose { LevelFilter::Info } else { LevelFilter::Warn });
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.write_style(if color { WriteStyle::Auto } else { WriteStyle::Never });

    builder.format(|buf, record| {
        writeln!(buf, "[{:<7}] {}", record.level(), record.args())
    });
    builder.init();
}

fn main() {
    let cli = Cli::parse();

    let color = !(cli.no_color || std::env::var_os("NO_COLOR").is_some());
    if !color {
        colored::control::set_override(false);
    }

    init_logging(&cli, color);

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => exit_with_error(e),
    }
}

fn run(cli: Cli) -> CliResult<i32> {
    if cli.verbose {
        output::options(&std::env::args().collect::<Vec<_>>());
    }

    let level = if cli.operation() == Operation::Compress {
        let (level, refused) = cli.level();
        if let Some(e) = refused {
            output::warn("-l", format!("{e}, using preset level {}", CompressionLevel::PRESET));
        }
        level
    } else {
        CompressionLevel::PRESET
    };

    let target = cli.target()?;
    let config = cli.batch_config(level);
    let dict = Dictionary::load(&cli.dict)?;
    log::info!("dictionary {} loaded, {:?}", cli.dict.display(), dict);

    let verbose = cli.verbose;
    let report = run_batch(&target, &dict, &config, |item, bytes| {
        if verbose {
            output::item(item, bytes, level);
        }
    })?;

    if verbose {
        output::summary(&report);
    }
    if cli.stats {
        output::stats(&report)?;
    }

    Ok(if report.has_io_errors() { EXIT_ERROR } else { EXIT_SUCCESS })
}
