use thiserror::Error;

#[derive(Debug, Error)]
pub enum MalformedPartyError {
    #[error("party payload did not match the expected shape: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("party start time {start} is not before end time {end}")]
    TimeRange { start: i64, end: i64 },
}

/// Raised when a formatting call receives no party to render. The detail
/// surface must show a not-found state instead of partial text.
#[derive(Debug, Error)]
#[error("no party was supplied to render")]
pub struct PartyNotFoundError;
