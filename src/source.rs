use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::debug;
use serde_json::Value;

use crate::api::ApiObject;
use crate::error::MalformedPartyError;
use crate::models::Party;

/// Supplies the ordered party list shown on the list surface. The live feed
/// and the bundled fixture sit behind the same seam.
pub trait PartyListSource {
    fn source_id(&self) -> &'static str;

    fn fetch(&self) -> Result<Vec<Party>>;
}

/// Reads parties from a JSON fixture file, used in place of a live feed.
pub struct FixtureReader {
    path: PathBuf,
}

impl FixtureReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PartyListSource for FixtureReader {
    fn source_id(&self) -> &'static str {
        "fixture"
    }

    fn fetch(&self) -> Result<Vec<Party>> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("unable to read fixture {:?}", self.path))?;
        let parties = parse_parties(&contents)
            .with_context(|| format!("invalid fixture {:?}", self.path))?;
        debug!("loaded {} parties from {:?}", parties.len(), self.path);
        Ok(parties)
    }
}

/// Decodes a document holding one party object or an array of them, keeping
/// the array order. A malformed element fails the whole document; entries
/// are never dropped silently.
pub fn parse_parties(document: &str) -> Result<Vec<Party>, MalformedPartyError> {
    let value: Value = serde_json::from_str(document)?;
    match value {
        Value::Array(items) => items.iter().map(Party::from_json).collect(),
        other => Ok(vec![Party::from_json(&other)?]),
    }
}
