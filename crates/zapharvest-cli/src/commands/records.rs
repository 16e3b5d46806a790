use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::Result;
use clap::Args;
use zapharvest_config::MAX_RECENT_LIMIT;
use zapharvest_core::time::format_millis_date;
use zapharvest_core::StoreCountsDto;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Number of records to show, newest first
    #[arg(long)]
    pub limit: Option<usize>,
}

pub fn list_records(ctx: &Context<'_>, args: ListArgs) -> Result<()> {
    let limit = args.limit.unwrap_or(ctx.config.recent_limit);
    if limit == 0 || limit > MAX_RECENT_LIMIT {
        return Err(invalid_input(format!(
            "limit must be between 1 and {}",
            MAX_RECENT_LIMIT
        )));
    }

    let contacts = ctx.store.contacts().list_recent(limit)?;
    if ctx.json {
        return print_json(&contacts);
    }
    if contacts.is_empty() {
        println!("no records yet");
        return Ok(());
    }
    for contact in contacts {
        let email = contact.email.as_deref().unwrap_or("-");
        let sent = if contact.sent { "sent" } else { "pending" };
        println!(
            "{}  {}  {}  {}  {}  {}",
            contact.id,
            format_millis_date(contact.timestamp),
            contact.domain,
            contact.whatsapp,
            email,
            sent
        );
    }
    Ok(())
}

pub fn count_records(ctx: &Context<'_>) -> Result<()> {
    let counts = StoreCountsDto {
        total: ctx.store.contacts().count()?,
        unsent: ctx.store.contacts().count_unsent()?,
    };
    if ctx.json {
        return print_json(&counts);
    }
    println!("{} contact(s), {} not sent yet", counts.total, counts.unsent);
    Ok(())
}
