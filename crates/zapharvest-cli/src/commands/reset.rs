use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use clap::Args;
use serde::Serialize;
use zapharvest_core::ContactStore;

#[derive(Debug, Args)]
pub struct ResetArgs {
    /// Confirm that every saved contact should be deleted
    #[arg(long)]
    pub yes: bool,
}

#[derive(Debug, Serialize)]
struct ResetReport {
    removed: i64,
}

pub fn reset_store(ctx: &Context<'_>, args: ResetArgs) -> Result<()> {
    if !args.yes {
        return Err(invalid_input(
            "reset deletes every saved contact and cannot be undone; pass --yes to confirm",
        ));
    }

    let contacts = ctx.store.contacts();
    let removed = contacts.count()?;
    contacts.clear_all().with_context(|| "clear contacts")?;

    if ctx.json {
        return print_json(&ResetReport { removed });
    }
    println!("removed {} contact(s)", removed);
    Ok(())
}
