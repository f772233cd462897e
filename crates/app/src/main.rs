use std::io::Write;

use api_types::snapshot::SnapshotFile;
use clap::Parser;
use settings::{Args, Format, Settings};

mod convert;
mod error;
mod render;
mod settings;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = Settings::new(Args::parse())?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(format!(
            "conti={level},engine={level}",
            level = settings.level
        ))
        .init();

    let path = settings
        .snapshot
        .as_deref()
        .ok_or(error::AppError::MissingSetting("snapshot"))?;
    tracing::info!("Loading snapshot from {path}...");

    let raw = std::fs::read_to_string(path).map_err(error::AppError::from)?;
    let file: SnapshotFile = serde_json::from_str(&raw).map_err(error::AppError::from)?;
    let mut snapshot = convert::snapshot(file, settings.owner.as_deref())?;
    snapshot.ensure_owner_person();

    tracing::info!(
        owner = snapshot.owner(),
        people = snapshot.people().len(),
        expenses = snapshot.expenses().len(),
        "snapshot validated"
    );
    for expense in snapshot.expenses_by_date() {
        tracing::debug!(date = %expense.date, share = %expense.share(), "{expense}");
    }

    let summary = snapshot.summarize();
    let report = convert::report(snapshot.owner(), &summary);

    let output = match settings.format {
        Format::Table => render::table(&report),
        Format::Json => format!("{}\n", serde_json::to_string_pretty(&report)?),
    };
    std::io::stdout().lock().write_all(output.as_bytes())?;

    Ok(())
}
