//! ai_model - emit a detection payload for one image file
//!
//! Invoked by an orchestrator with an image path; prints exactly one JSON line
//! to stdout and exits 0 whether or not the image could be opened. With no
//! path it does nothing.

use anyhow::{Context, Result};
use clap::Parser;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use ai_model::{ImageProcessor, Payload, ProcessorConfig};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    /// Image file path, followed by any number of ignored arguments. Every
    /// argument is taken verbatim, including ones that look like flags.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<OsString>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut args = args.args.into_iter();
    let Some(image_path) = args.next().map(PathBuf::from) else {
        log::debug!("no image path given, nothing to do");
        return Ok(());
    };
    let ignored = args.count();
    if ignored > 0 {
        log::debug!("ignoring {} extra argument(s)", ignored);
    }

    let payload = run(&image_path);
    let line = payload.to_line()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", line).context("write payload to stdout")?;
    out.flush().context("flush stdout")?;
    Ok(())
}

fn run(image_path: &Path) -> Payload {
    let processor = match ProcessorConfig::load().and_then(|cfg| ImageProcessor::from_config(&cfg)) {
        Ok(processor) => processor,
        Err(err) => {
            log::warn!("processor setup failed: {:#}", err);
            return Payload::from_error(&err);
        }
    };
    processor.process(image_path)
}
