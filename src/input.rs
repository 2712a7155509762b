use std::{
    error,
    fmt::Display,
    fs, io,
    path::{Path, PathBuf},
};

use tracing::debug;

#[derive(Debug)]
pub enum Error {
    PathNotFound(PathBuf),
    NotAFile(PathBuf),
    NotAccessible(PathBuf, io::Error),
    Encoding(PathBuf),
    IOError(PathBuf, io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::PathNotFound(p) => {
                write!(f, "The resource \"{}\" does not exist", p.display())
            }
            Error::NotAFile(p) => write!(f, "The resource \"{}\" is not a file", p.display()),
            Error::NotAccessible(p, _) => {
                write!(f, "The file \"{}\" is not accessible", p.display())
            }
            Error::Encoding(p) => write!(f, "The file \"{}\" is not UTF-8 encoded", p.display()),
            Error::IOError(p, ioe) => {
                write!(f, "I/O error while reading file \"{}\": {}", p.display(), ioe)
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::NotAccessible(_, ioe) | Error::IOError(_, ioe) => Some(ioe),
            _ => None,
        }
    }
}

/// Read the whole content of a UTF-8 encoded file.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::PathNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(Error::NotAFile(path.to_path_buf()));
    }

    let bytes = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::PermissionDenied => Error::NotAccessible(path.to_path_buf(), e),
        _ => Error::IOError(path.to_path_buf(), e),
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read input file");

    String::from_utf8(bytes).map_err(|_| Error::Encoding(path.to_path_buf()))
}

/// Read the lines of a UTF-8 encoded file, accepting both `\n` and `\r\n` endings.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, Error> {
    let lines = read_file(path)?
        .lines()
        .map(str::to_string)
        .collect::<Vec<_>>();
    debug!(count = lines.len(), "split input into lines");

    Ok(lines)
}
