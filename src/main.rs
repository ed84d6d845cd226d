use std::process::exit;

use phonebook::{config, prelude::run_app};

fn main() {
    config::load_env();
    config::init_logging();

    if let Err(e) = run_app() {
        eprintln!("Error: {e}");
        exit(1);
    }
}
