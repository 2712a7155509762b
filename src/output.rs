use std::io::{self, Write};

pub const SUCCESS_HEADER: &str = "Execution successful";
pub const FAILURE_HEADER: &str = "Execution failed";

pub fn write_success<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{}", SUCCESS_HEADER)?;
    writeln!(out, "{}", message)?;
    out.flush()
}

pub fn write_error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{}", FAILURE_HEADER)?;
    writeln!(out, "{}", message)?;
    out.flush()
}

/// Print a success message to stdout.
pub fn notify_success(message: &str) -> io::Result<()> {
    write_success(&mut io::stdout().lock(), message)
}

/// Print an error message to stderr.
pub fn notify_error(message: &str) -> io::Result<()> {
    write_error(&mut io::stderr().lock(), message)
}
