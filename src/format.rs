use chrono::{DateTime, Timelike, Utc};

use crate::config::FormatOptions;
use crate::error::PartyNotFoundError;
use crate::models::Party;

/// Builds the display strings for the list and detail surfaces. The
/// reference instant is always passed in, never sampled, so every call is
/// deterministic.
pub struct PartyFormatter {
    options: FormatOptions,
}

impl PartyFormatter {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// "Today" when the party starts on the same calendar date as `now` in
    /// the configured timezone, "Tomorrow" for any other date.
    pub fn day_label(
        &self,
        party: Option<&Party>,
        now: DateTime<Utc>,
    ) -> Result<&'static str, PartyNotFoundError> {
        let party = party.ok_or(PartyNotFoundError)?;
        let tz = self.options.timezone;
        let start = party.start_time.with_timezone(&tz).date_naive();
        let today = now.with_timezone(&tz).date_naive();
        Ok(if start == today { "Today" } else { "Tomorrow" })
    }

    /// 12-hour label for the start hour: 0 -> "12AM", 9 -> "9AM",
    /// 12 -> "12PM", 15 -> "3PM".
    pub fn time_label(&self, party: Option<&Party>) -> Result<String, PartyNotFoundError> {
        let party = party.ok_or(PartyNotFoundError)?;
        let hour = party
            .start_time
            .with_timezone(&self.options.timezone)
            .hour();
        let (display, suffix) = match hour {
            0 => (12, "AM"),
            1..=11 => (hour, "AM"),
            12 => (12, "PM"),
            _ => (hour - 12, "PM"),
        };
        Ok(format!("{display}{suffix}"))
    }

    pub fn starts_label(
        &self,
        party: Option<&Party>,
        now: DateTime<Utc>,
    ) -> Result<String, PartyNotFoundError> {
        let day = self.day_label(party, now)?;
        let time = self.time_label(party)?;
        Ok(format!("Starts {day} at {time}"))
    }

    pub fn gendered_price_label(
        &self,
        party: Option<&Party>,
    ) -> Result<String, PartyNotFoundError> {
        let party = party.ok_or(PartyNotFoundError)?;
        let opts = &self.options;
        Ok(format!(
            "{}{}{} / {}{}{}",
            opts.male_label,
            opts.currency_prefix,
            party.male_cost,
            opts.female_label,
            opts.currency_prefix,
            party.female_cost,
        ))
    }

    pub fn byob_flag(&self, party: Option<&Party>) -> Result<bool, PartyNotFoundError> {
        Ok(party.ok_or(PartyNotFoundError)?.byob)
    }

    /// The full detail view text: title, address, description, start line,
    /// prices, BYOB marker, then the word entries in posting order.
    pub fn render_detail(
        &self,
        party: Option<&Party>,
        now: DateTime<Utc>,
    ) -> Result<String, PartyNotFoundError> {
        let selected = party.ok_or(PartyNotFoundError)?;

        let mut lines = vec![
            selected.title.clone(),
            selected.formatted_address.clone(),
            selected.description.clone(),
            self.starts_label(party, now)?,
            self.gendered_price_label(party)?,
        ];

        if selected.byob {
            lines.push("BYOB".to_string());
        }

        if !selected.the_word.is_empty() {
            lines.push("The Word:".to_string());
            lines.extend(selected.the_word.iter().cloned());
        }

        Ok(lines.join("\n"))
    }
}
