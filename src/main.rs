mod cli;
mod convert;
mod csv;
mod error;
mod tex;

use std::{error::Error as _, io, process::ExitCode};

use log::error;

fn main() -> ExitCode {
    env_logger::init();

    let mut stdout = io::stdout().lock();
    match cli::run(std::env::args().skip(1), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.source() {
                Some(source) => error!("{err}: {source}"),
                None => error!("{err}"),
            }
            ExitCode::FAILURE
        }
    }
}
