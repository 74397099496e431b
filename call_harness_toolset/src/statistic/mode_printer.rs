use crate::error::HarnessError;
use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::PathBuf,
};

/// Defines the output destination for printing the statistic
/// * Console - will print to the Console only
/// * File - will append to the specified file
/// * Mixed - will print both to the Console and specified file
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModePrinter {
    #[default]
    Console,
    File(PathBuf),
    Mixed(PathBuf),
}

impl ModePrinter {
    pub fn print(&self, buf: &[u8]) -> Result<(), HarnessError> {
        match self {
            Self::Console => Self::select_stdout().write_all(buf),
            Self::File(path) => Self::select_file_output(path)?.write_all(buf),
            Self::Mixed(path) => Self::select_file_output(path)?
                .write_all(buf)
                .and_then(|_| Self::select_stdout().write_all(buf)),
        }
        .map_err(|err| HarnessError::Custom(err.to_string()))
    }

    // several consumers usually share one report file
    fn select_file_output(path: &PathBuf) -> Result<Box<dyn Write>, HarnessError> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map(|f| Box::new(f) as Box<dyn Write>)
            .map_err(|err| HarnessError::Custom(format!("{}: {err}", path.display())))
    }

    fn select_stdout() -> Box<dyn Write> {
        Box::new(io::stdout())
    }
}

// Printing both to stdout and file is the default for a bare path
impl From<PathBuf> for ModePrinter {
    fn from(value: PathBuf) -> Self {
        ModePrinter::Mixed(value)
    }
}
