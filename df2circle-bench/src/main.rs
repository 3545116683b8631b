use df2circle_bench::{full_report, BenchConfig, BenchError};
use std::process::ExitCode;

fn run() -> Result<(), BenchError> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading config from {}", path);
            BenchConfig::load(path)?
        }
        None => BenchConfig::default(),
    };
    print!("{}", full_report(&config));
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
