//! rTrivia main entrypoint.

use rtrivia::errors::AppError;
use rtrivia::run;

fn main() {
    pretty_env_logger::init();
    println!();
    if let Err(e) = run() {
        match &e {
            // the quiz already told the participant
            AppError::NotEligible { .. } => {}
            AppError::Cancelled => eprintln!("{}", e),
            _ => eprintln!("Error: {}", e),
        }
        std::process::exit(e.exit_code());
    }
}
