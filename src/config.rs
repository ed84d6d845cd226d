use std::path::PathBuf;

use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use crate::cli::command::Cli;
use crate::store::JsonStore;

pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub db_path: PathBuf,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            db_path: cli.db_path.clone(),
        }
    }

    pub fn store(&self) -> JsonStore {
        JsonStore::new(&self.db_path)
    }
}

/// Loads `.env` from the working directory, if present, so clap's `env`
/// fallbacks and `RUST_LOG` can be set there.
pub fn load_env() {
    dotenv().ok();
}

/// Logs go to stderr; stdout is reserved for phone book output.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // try_init: a second call in the same process must not abort the run
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn db_path_flag_is_used() {
        let cli = Cli::parse_from(["phonebook", "--list-all", "--db-path", "/tmp/book.json"]);
        let settings = Settings::from_cli(&cli);

        assert_eq!(settings.store().path(), std::path::Path::new("/tmp/book.json"));
    }
}
