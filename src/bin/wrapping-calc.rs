use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use day1_2::{input, CliArgs, PresentDimensions, Program, WrappingAnalysis};

/// Compute how much wrapping paper is needed to wrap presents of given dimensions.
#[derive(Debug, Parser)]
struct Args {
    #[command(flatten)]
    cli: CliArgs,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let program = Program {
        malformed_hint: "Malformed dimensions file sequence, please verify that it contains only lines in the format: \"<length>x<width>x<height>\"",
    };

    program.run(&args.cli, |path| -> Result<String> {
        let presents = input::read_lines(path)?
            .iter()
            .enumerate()
            .map(|(ind, l)| {
                l.parse::<PresentDimensions>()
                    .with_context(|| format!("Failed to read present on line #{}", ind + 1))
            })
            .collect::<Result<Vec<_>>>()?;
        let analysis = WrappingAnalysis::new(presents)?;

        Ok(format!(
            "Total Square Feet of Wrapping Paper: {}",
            analysis.total_wrapping_paper()
        ))
    })
}
