//! clap-helptree - command tree browser for clap applications

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = clap_helptree::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
