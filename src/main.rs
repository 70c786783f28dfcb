use anyhow::Context;
use chrono::Utc;
use log::info;

use party_on::uri::navigation_query;
use party_on::{FixtureReader, FormatOptions, PartyFormatter, PartyListSource};

const DEFAULT_FIXTURE: &str = "fixtures/dummy.json";
const CONFIG_FILE: &str = "party-on.config.json";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let fixture = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_FIXTURE.to_string());
    let source = FixtureReader::new(&fixture);
    let parties = source.fetch().context("party list unavailable")?;
    info!("loaded {} parties from {}", parties.len(), source.source_id());

    let options = FormatOptions::load(CONFIG_FILE).map_err(anyhow::Error::msg)?;
    let formatter = PartyFormatter::new(options);
    let now = Utc::now();

    for party in &parties {
        println!(
            "{} | {} | {}",
            party.title,
            formatter.starts_label(Some(party), now)?,
            formatter.gendered_price_label(Some(party))?,
        );
    }

    // stand-in for selecting a row on the list surface
    if let Some(selected) = parties.first() {
        println!();
        println!("{}", formatter.render_detail(Some(selected), now)?);
        println!("Navigate: {}", navigation_query(&selected.formatted_address));
    }

    Ok(())
}
