use std::{
    any::Any,
    io,
    panic::{self, AssertUnwindSafe},
    path::{Path, PathBuf},
    process::{self, ExitCode},
};

use anyhow::Result;
use clap::Parser;
use int_enum::IntEnum;
use tracing::{debug, error, warn};

use crate::{floor, input, output, present, wrapping};

const READ_FAILURE_HINT: &str =
    "Could not read input file, please verify that you have provided the correct path";

#[repr(u8)]
#[derive(IntEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnCode {
    Success = 0,
    KeyboardInterrupt = 1,
    UnexpectedError = 2,
    FileReadingError = 3,
    MalformedInputError = 4,
}

impl ReturnCode {
    /// Classify a pipeline failure by the library error it carries.
    pub fn of(error: &anyhow::Error) -> Self {
        if error.downcast_ref::<input::Error>().is_some() {
            ReturnCode::FileReadingError
        } else if error.downcast_ref::<floor::Error>().is_some()
            || error.downcast_ref::<present::Error>().is_some()
            || error.downcast_ref::<wrapping::Error>().is_some()
        {
            ReturnCode::MalformedInputError
        } else {
            ReturnCode::UnexpectedError
        }
    }
}

impl From<ReturnCode> for ExitCode {
    fn from(code: ReturnCode) -> Self {
        ExitCode::from(code.int_value())
    }
}

#[derive(Debug, Parser)]
pub struct CliArgs {
    /// Path to the input file
    #[arg(value_name = "FILE")]
    pub input_path: PathBuf,
    /// Print diagnostic logs to stderr
    #[arg(long)]
    pub log: bool,
}

/// Shell shared by the command-line programs.
pub struct Program {
    /// Explanation printed when the input content is malformed.
    pub malformed_hint: &'static str,
}

impl Program {
    /// Run `analyze` on the input file and report its outcome, returning the exit code.
    ///
    /// `analyze` produces the success message; its errors and panics are mapped to
    /// [`ReturnCode`]s.
    pub fn run<F>(&self, args: &CliArgs, analyze: F) -> ExitCode
    where
        F: FnOnce(&Path) -> Result<String>,
    {
        if args.log {
            tracing_subscriber::fmt()
                .with_max_level(tracing::Level::DEBUG)
                .with_writer(io::stderr)
                .init();
        }
        if let Err(e) = install_interrupt_handler() {
            warn!("Failed to install interrupt handler: {}", e);
        }
        panic::set_hook(Box::new(|info| debug!("{}", info)));

        let code = match panic::catch_unwind(AssertUnwindSafe(|| analyze(&args.input_path))) {
            Ok(Ok(message)) => match output::notify_success(&message) {
                Ok(()) => ReturnCode::Success,
                Err(e) => {
                    error!("Failed to print result: {}", e);
                    ReturnCode::UnexpectedError
                }
            },
            Ok(Err(e)) => {
                let code = ReturnCode::of(&e);
                debug!(?code, "analysis failed");
                let hint = match code {
                    ReturnCode::FileReadingError => READ_FAILURE_HINT,
                    ReturnCode::MalformedInputError => self.malformed_hint,
                    _ => "Critical failure",
                };
                report_failure(&format!("{}\nCause: {:#}", hint, e));
                code
            }
            Err(payload) => {
                report_failure(&format!("Critical failure\nCause: {}", panic_message(&*payload)));
                ReturnCode::UnexpectedError
            }
        };

        code.into()
    }
}

fn report_failure(message: &str) {
    if let Err(e) = output::notify_error(message) {
        error!("Failed to print error: {}", e);
    }
}

fn install_interrupt_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        report_failure("Execution interrupted by user");
        process::exit(ReturnCode::KeyboardInterrupt.int_value().into());
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "unknown panic"
    }
}
