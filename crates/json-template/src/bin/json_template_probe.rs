//! `json-template-probe` — resolve an access path against a JSON document.
//!
//! Usage:
//!   json-template-probe [--no-quotes] '<access path>'
//!
//! The document is read from stdin and bound as `root`, so paths look like
//! `root.items[0]` or `root.valuePair.y`. Set `RUST_LOG=json_template=trace`
//! to watch the wrapper at work.

use clap::Parser;
use json_template::cli::{probe, ProbeArgs};
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = ProbeArgs::parse();

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match probe(&buf, &args.path, &args.config()) {
        Ok(lines) => {
            let mut out = io::stdout().lock();
            for line in lines {
                if let Err(e) = writeln!(out, "{line}") {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
