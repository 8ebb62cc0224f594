use crate::core::system::System;
use macros::log;
use std::process::ExitCode;

mod core;
mod interface;
mod model;
mod ui;
mod utils;

#[tokio::main]
async fn main() -> ExitCode {
    let system = match System::initialize() {
        Ok(system) => system,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let result = system.run();
    if let Err(err) = &result {
        log!(err);
    }
    system.terminate();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
