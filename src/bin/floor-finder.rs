use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use day1_2::{input, CliArgs, FloorDirections, Program};

/// Compute the final floor from a directions file (only "(" and ")" characters).
#[derive(Debug, Parser)]
struct Args {
    #[command(flatten)]
    cli: CliArgs,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let program = Program {
        malformed_hint:
            "Malformed directions sequence, please verify that it contains only \"(\" and \")\" characters",
    };

    program.run(&args.cli, |path| -> Result<String> {
        let content = input::read_file(path)?;
        let sequence = content
            .strip_suffix('\n')
            .map(|s| s.strip_suffix('\r').unwrap_or(s))
            .unwrap_or(content.as_str());
        let directions = sequence.parse::<FloorDirections>().with_context(|| {
            format!(
                "Failed to read directions from given file({})",
                path.display()
            )
        })?;

        Ok(format!(
            "Final Floor: {}\nFirst basement direction position: {}",
            directions.final_floor(),
            directions.first_basement_position()
        ))
    })
}
