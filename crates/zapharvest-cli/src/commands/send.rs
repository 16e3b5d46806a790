use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use zapharvest_core::{send_next, whatsapp_web_url, SendNext, SendNextDto, SendStatus};

pub fn send_next_contact(ctx: &Context<'_>) -> Result<()> {
    let next = send_next(&ctx.store.contacts()).with_context(|| "select next contact")?;
    let dto = match next {
        SendNext::Exhausted => SendNextDto {
            status: SendStatus::Exhausted,
            contact: None,
            url: None,
        },
        SendNext::Selected(contact) => {
            let url = whatsapp_web_url(&contact.whatsapp)?;
            SendNextDto {
                status: SendStatus::Selected,
                contact: Some(contact),
                url: Some(url.to_string()),
            }
        }
    };

    if ctx.json {
        return print_json(&dto);
    }
    match (&dto.contact, &dto.url) {
        (Some(contact), Some(url)) => {
            println!("{} ({})", contact.whatsapp, contact.domain);
            println!("{}", url);
        }
        _ => println!("all numbers have already been sent"),
    }
    Ok(())
}
