//! Main entry point for the treestat CLI app

fn main() -> std::process::ExitCode {
    if let Err(e) = treestat::cli_runner::run_cli_app() {
        eprintln!("{}", e);
        return std::process::ExitCode::FAILURE;
    }
    std::process::ExitCode::SUCCESS
}
