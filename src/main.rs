use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    mandel_batch::init_logging();

    let args = mandel_batch::CliArgs::parse();
    let controller = mandel_batch::CliController::new(args);

    match controller.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
