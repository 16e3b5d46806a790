use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};
use zapharvest_config::AppConfig;
use zapharvest_store::Store;

pub mod extract;
pub mod records;
pub mod reset;
pub mod send;

pub struct Context<'a> {
    pub store: &'a Store,
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
