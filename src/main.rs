use std::process::ExitCode;
use clap::Parser as ClapParser;
use axle::Config;

fn main() -> ExitCode {
    let config: Config = Config::parse();
    axle::init_tracing(config.verbose);

    match axle::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        },
    }
}
