//! # Rain Preview
//!
//! Prints one coin batch (inline styles or JSON) and optional sampled
//! frames. Logging goes to stderr; set `RUST_LOG=debug` to see cache
//! activity and config normalization.

use std::process::ExitCode;

use coinrain::cli::{run, PreviewArgs};

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let result = PreviewArgs::parse(std::env::args().skip(1)).and_then(|args| run(&args));

    match result {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("rain preview failed: {err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
