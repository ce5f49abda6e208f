// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

use std::{path::PathBuf, process::ExitCode};

use anyhow::{anyhow, Error};
use blockyaml::{dump, load, store, Document};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Check, format and query block-style config files", long_about = None)]
struct Cli {
    /// Log at debug level. RUST_LOG takes precedence.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse each file and report whether it loads.
    Check { files: Vec<PathBuf> },
    /// Print a file in canonical form.
    Fmt {
        file: PathBuf,
        /// Rewrite the file in place instead of printing it.
        #[arg(long)]
        write: bool,
    },
    /// Print the value at a dotted path, e.g. `items.0.name`.
    Get { file: PathBuf, path: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).try_init();

    match run(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<bool, Error> {
    match command {
        Command::Check { files } => Ok(check(&files)),
        Command::Fmt { file, write } => {
            let doc = load(&file)?;
            if write {
                store(&file, &doc)?;
            } else {
                println!("{}", dump(&doc));
            }
            Ok(true)
        }
        Command::Get { file, path } => {
            let doc = load(&file)?;
            let value = doc
                .get_path(&path)
                .ok_or_else(|| anyhow!("{}: no value at `{}`", file.display(), path))?;
            println!("{}", render_value(value));
            Ok(true)
        }
    }
}

fn check(files: &[PathBuf]) -> bool {
    let mut all_ok = true;
    for file in files {
        match load(file) {
            Ok(_) => println!("{}: ok", file.display()),
            Err(err) => {
                println!("{}", err);
                all_ok = false;
            }
        }
    }
    all_ok
}

fn render_value(value: &Document) -> String {
    match value {
        Document::String(value) => value.clone(),
        _ => dump(value),
    }
}
