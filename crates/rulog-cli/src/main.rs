// Dweve RULOG - Rule Logic Language
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! RULOG Command Line Interface

use clap::{Parser as ClapParser, Subcommand};
use colored::Colorize;
use rulog_core::{OperTable, Parser};
use rulog_facts::{load_facts, NoExpanders};
use std::path::PathBuf;
use std::process::ExitCode;

/// RULOG - Rule Logic Language toolkit
///
/// Parse RULOG source into terms, or load tabular fact files, and print
/// the results.
#[derive(ClapParser)]
#[command(name = "rulog")]
#[command(author, version, about = "RULOG - Rule Logic Language toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a source file and echo each term back in canonical form.
    Parse {
        /// Source file to parse.
        file: PathBuf,
    },
    /// Load a tabular fact file and print each decoded row.
    Facts {
        /// Fact table file to load.
        file: PathBuf,
        /// Field delimiter character.
        #[arg(short, long, default_value = ",")]
        delimiter: char,
    },
}

fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    let ops = OperTable::standard();
    match command {
        Commands::Parse { file } => {
            let source = std::fs::read_to_string(&file)?;
            let mut parser = Parser::new(&source, &ops);
            while !parser.at_eof()? {
                let term = parser.read(false)?;
                println!("{}", term.display(&ops));
            }
        }
        Commands::Facts { file, delimiter } => {
            if !delimiter.is_ascii() {
                return Err("delimiter must be a single ASCII character".into());
            }
            let source = std::fs::read_to_string(&file)?;
            let name = file.display().to_string();
            load_facts(
                &source,
                &name,
                delimiter as u8,
                &ops,
                &NoExpanders,
                |row, values| {
                    let rendered: Vec<String> =
                        values.iter().map(|v| v.display(&ops).to_string()).collect();
                    println!("{:>6}  [{}]", row, rendered.join(", "));
                },
            )?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
