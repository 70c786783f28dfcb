use std::{fs, path::Path};

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

const DEFAULT_TIMEZONE: Tz = chrono_tz::UTC;

/// Presentation settings the surfaces inject into the formatter: the
/// currency prefix, the two price-category titles, and the calendar used
/// for day and hour derivation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    pub currency_prefix: String,
    pub male_label: String,
    pub female_label: String,
    pub timezone: Tz,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            currency_prefix: "$".to_string(),
            male_label: "Guys: ".to_string(),
            female_label: "Girls: ".to_string(),
            timezone: DEFAULT_TIMEZONE,
        }
    }
}

impl FormatOptions {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path).map_err(|err| err.to_string())?;
        serde_json::from_str(&contents).map_err(|err| err.to_string())
    }
}
