use std::process::ExitCode;

fn main() -> ExitCode {
    match coulomb_surface::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error ... {}", e);
            ExitCode::FAILURE
        }
    }
}
