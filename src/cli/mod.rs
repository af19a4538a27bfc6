use std::{
    io::Write,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    convert,
    error::{Error, Result},
};

pub const HELP: &str = "\n\
csv2tex: convert your csv values in a TeX-formatted table.\n\
-\n\
- Usage: csv2tex <path_to_csv_file>.csv\n\
-\n\
- If the given csv file exists, a new .tex file will be created within\n\
- the same directory and with the same name.";

pub const SUCCESS: &str = "Conversion successful";
pub const INCORRECT_FILE: &str = "Error: incorrect file specified";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Convert(PathBuf),
}

/// Decide what to do from the arguments, program name excluded.
pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Command> {
    let args: Vec<String> = args.into_iter().collect();

    match args.as_slice() {
        [flag] if flag == "-h" => Ok(Command::Help),
        [path] if Path::new(path).is_file() => Ok(Command::Convert(PathBuf::from(path))),
        [path] => Err(Error::FileNotFound(PathBuf::from(path))),
        _ => Err(Error::InvalidArguments(args.len())),
    }
}

/// Run one invocation, writing user facing messages to `out`.
///
/// Wrong argument counts fall back to the help text and a path that is not a
/// regular file is reported on `out`; neither is a failure. Conversion errors
/// are returned untouched.
pub fn run(args: impl IntoIterator<Item = String>, out: &mut impl Write) -> Result<()> {
    match parse(args) {
        Ok(Command::Help) => writeln!(out, "{HELP}")?,
        Ok(Command::Convert(input)) => {
            convert::to_tex(&input)?;
            writeln!(out, "{SUCCESS}")?;
        }
        Err(Error::InvalidArguments(count)) => {
            debug!("got {count} arguments, showing help");
            writeln!(out, "{HELP}")?;
        }
        Err(Error::FileNotFound(path)) => {
            debug!("{} is not a regular file", path.display());
            writeln!(out, "{INCORRECT_FILE}")?;
        }
        Err(err) => return Err(err),
    }

    Ok(())
}
