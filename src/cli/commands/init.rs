use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::SqliteStore;
use crate::ui::messages::success;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    // Opening the store once creates the schema.
    SqliteStore::open(&cfg.database)?;
    success("Store initialized");
    Ok(())
}
