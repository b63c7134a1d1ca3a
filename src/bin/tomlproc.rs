// ------------------------------------------------------------------------------------------------
// tomlproc - TOML 1.0.0 processor
//
// Copyright (c) 2026, The tomlproc authors.
// All rights reserved.
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// * Redistributions of source code must retain the above copyright notice, this
//   list of conditions and the following disclaimer.
//
// * Redistributions in binary form must reproduce the above copyright notice,
//   this list of conditions and the following disclaimer in the documentation
//   and/or other materials provided with the distribution.
//
// * Neither the name of the copyright holder nor the names of its
//   contributors may be used to endorse or promote products derived from
//   this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
// ------------------------------------------------------------------------------------------------

//! Command line front-end for the tomlproc library.
//! Thin wrapper over the core: reads files, dispatches to parse, validity check or
//! re-serialization and maps the outcome to exit codes. 0 means success, 1 a parse
//! failure, 2 an I/O failure.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use clap::{Parser, Subcommand};
use log::debug;
use tomlproc::{parse_with_context, stringify_with, FormatOptions, TomlDocument};

/// tomlproc - parse, check and format TOML 1.0.0 files
#[derive (Parser, Debug)]
#[command(name = "tomlproc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "TOML 1.0.0 processor", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands
}

/// Available subcommands.
#[derive (Subcommand, Debug)]
enum Commands {
    /// Parse a TOML file and print a summary of its root keys
    Parse {
        /// the TOML file to parse
        file: PathBuf,
        /// additionally print the re-serialized document
        #[arg(short, long)]
        verbose: bool
    },
    /// Check a TOML file for validity
    Validate {
        /// the TOML file to check
        file: PathBuf,
        /// suppress output on success
        #[arg(short, long)]
        quiet: bool
    },
    /// Parse a TOML file and re-serialize it with the chosen formatting options
    Fmt {
        /// the TOML file to format
        file: PathBuf,
        /// overwrite the input file instead of writing to stdout
        #[arg(short, long)]
        in_place: bool,
        /// emit each table's keys in byte-wise ascending order
        #[arg(short, long)]
        sort_keys: bool,
        /// number of columns per nesting level
        #[arg(long, default_value_t = 2)]
        indent: usize
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Parse { file, verbose } => run_parse(&file, verbose),
        Commands::Validate { file, quiet } => run_validate(&file, quiet),
        Commands::Fmt { file, in_place, sort_keys, indent } => {
            run_fmt(&file, in_place, sort_keys, indent)
        }
    }
}

/// Reads the given file, printing a message and returning **None** on I/O failure.
fn read_input(file: &Path) -> Option<String> {
    match fs::read_to_string(file) {
        Ok(contents) => Some(contents),
        Err(error) => {
            eprintln!("{}: {}", file.display(), error);
            None
        }
    }
}

/// Parses the given file, printing the caret diagnostic and returning **None** on
/// parse failure.
fn parse_input(file: &Path, contents: &str) -> Option<TomlDocument> {
    debug!("parsing {}", file.display());
    let outcome = parse_with_context(contents);
    match outcome.document {
        Some(document) => Some(document),
        None => {
            eprint!("{}", outcome.error.unwrap().render());
            None
        }
    }
}

/// Runs the parse subcommand.
fn run_parse(file: &Path, verbose: bool) -> ExitCode {
    let contents = match read_input(file) {
        Some(c) => c,
        None => return ExitCode::from(2)
    };
    let document = match parse_input(file, &contents) {
        Some(d) => d,
        None => return ExitCode::from(1)
    };
    for (key, item) in document.root_items() {
        println!("{} ({})", key, item.value().kind_name());
    }
    if verbose {
        print!("{}", tomlproc::stringify(&document));
    }
    ExitCode::SUCCESS
}

/// Runs the validate subcommand.
fn run_validate(file: &Path, quiet: bool) -> ExitCode {
    let contents = match read_input(file) {
        Some(c) => c,
        None => return ExitCode::from(2)
    };
    match parse_input(file, &contents) {
        Some(_) => {
            if ! quiet {
                println!("{}: OK", file.display());
            }
            ExitCode::SUCCESS
        },
        None => ExitCode::from(1)
    }
}

/// Runs the fmt subcommand.
fn run_fmt(file: &Path, in_place: bool, sort_keys: bool, indent: usize) -> ExitCode {
    let contents = match read_input(file) {
        Some(c) => c,
        None => return ExitCode::from(2)
    };
    let document = match parse_input(file, &contents) {
        Some(d) => d,
        None => return ExitCode::from(1)
    };
    let options = FormatOptions { indent_size: indent, sort_keys,
                                  ..FormatOptions::default() };
    let output = stringify_with(&document, &options);
    if in_place {
        if let Err(error) = fs::write(file, &output) {
            eprintln!("{}: {}", file.display(), error);
            return ExitCode::from(2)
        }
    } else {
        print!("{}", output);
    }
    ExitCode::SUCCESS
}
