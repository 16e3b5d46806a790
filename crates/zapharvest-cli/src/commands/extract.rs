use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use clap::Args;
use std::path::PathBuf;
use std::time::Duration;
use zapharvest_core::time::now_millis;
use zapharvest_core::{extract, save_extraction, ExtractionOutcomeDto, SessionTally};
use zapharvest_fetch::{FileSource, HttpSource, PageSource};

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Saved page to scan; `-` reads stdin
    #[arg(long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,
    /// Page to download and scan
    #[arg(long = "url", value_name = "URL")]
    pub urls: Vec<String>,
    /// Hostname recorded for --file pages
    #[arg(long)]
    pub domain: Option<String>,
}

pub fn extract_pages(ctx: &Context<'_>, args: ExtractArgs) -> Result<()> {
    let sources = build_sources(ctx, args)?;
    let show_session = sources.len() > 1;
    let mut tally = SessionTally::new();
    let mut outcomes = Vec::with_capacity(sources.len());

    for source in &sources {
        let outcome = match extract_source(ctx, source.as_ref(), &mut tally) {
            Ok(outcome) => outcome,
            Err(err) => {
                // Pages already saved keep their counts even when a later one fails.
                if ctx.json && !outcomes.is_empty() {
                    print_json(&outcomes)?;
                }
                return Err(err);
            }
        };
        if !ctx.json {
            print_outcome(&outcome, show_session);
        }
        outcomes.push(outcome);
    }

    if ctx.json {
        return print_json(&outcomes);
    }
    Ok(())
}

fn extract_source(
    ctx: &Context<'_>,
    source: &dyn PageSource,
    tally: &mut SessionTally,
) -> Result<ExtractionOutcomeDto> {
    let location = source.location();
    let page = source
        .load()
        .with_context(|| format!("load page {}", location))?;
    let result = extract(&page.content, &page.domain);
    let report = save_extraction(&ctx.store.contacts(), &result, now_millis())
        .with_context(|| format!("save contacts from {}", location))?;
    if let Some(report) = &report {
        tally.record(report);
    }

    Ok(ExtractionOutcomeDto {
        source: location,
        domain: result.domain.clone(),
        numbers: result
            .whatsapp
            .iter()
            .map(|number| number.to_string())
            .collect(),
        emails: result.emails,
        report,
        session_total: tally.total(),
    })
}

fn build_sources(ctx: &Context<'_>, args: ExtractArgs) -> Result<Vec<Box<dyn PageSource>>> {
    if args.files.is_empty() && args.urls.is_empty() {
        return Err(invalid_input("provide at least one --file or --url"));
    }
    if args.files.iter().filter(|path| path.as_os_str() == "-").count() > 1 {
        return Err(invalid_input("stdin (-) can only be read once"));
    }

    let mut sources: Vec<Box<dyn PageSource>> = Vec::new();
    for path in args.files {
        sources.push(Box::new(FileSource::new(path, args.domain.clone())));
    }
    let timeout = Duration::from_secs(ctx.config.fetch.timeout_secs);
    for url in args.urls {
        sources.push(Box::new(HttpSource::new(
            url,
            ctx.config.fetch.user_agent.clone(),
            timeout,
        )));
    }
    Ok(sources)
}

fn print_outcome(outcome: &ExtractionOutcomeDto, show_session: bool) {
    match &outcome.report {
        None => println!("{}: no WhatsApp numbers found", outcome.source),
        Some(report) => {
            println!(
                "{}: {} number(s) found, {} saved, {} already stored",
                outcome.source,
                outcome.numbers.len(),
                report.saved,
                report.duplicates
            );
            if report.failed > 0 {
                println!("  {} could not be saved (see log)", report.failed);
            }
        }
    }
    if show_session {
        println!("  session total: {}", outcome.session_total);
    }
}
