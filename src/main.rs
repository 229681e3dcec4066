//! Strict front end CLI entry point

fn main() {
    strict::cli::run();
}
