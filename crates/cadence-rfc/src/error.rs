use thiserror::Error;

/// Errors raised while handing a rule to the RFC 5545 recurrence engine
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("RRule error: {0}")]
    RRuleError(#[from] rrule::RRuleError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
