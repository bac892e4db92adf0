//! Ticket payment status.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Payment state of a ticket.
///
/// Stored as upper-case strings. The ticketing system owns the set of
/// states, so anything other than `RESERVED` and `PAID` is kept verbatim
/// as [`TicketStatus::Other`] and treated as not paid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TicketStatus {
    /// Ticket held for the enrollment but not paid for yet.
    Reserved,

    /// Payment confirmed.
    Paid,

    /// Any other stored state.
    Other(String),
}

impl TicketStatus {
    /// Returns true once payment has been confirmed.
    pub fn is_paid(&self) -> bool {
        matches!(self, TicketStatus::Paid)
    }

    /// Returns the stored string form.
    pub fn as_str(&self) -> &str {
        match self {
            TicketStatus::Reserved => "RESERVED",
            TicketStatus::Paid => "PAID",
            TicketStatus::Other(status) => status,
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TicketStatus::from(s.to_string()))
    }
}

impl From<String> for TicketStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "RESERVED" => TicketStatus::Reserved,
            "PAID" => TicketStatus::Paid,
            _ => TicketStatus::Other(s),
        }
    }
}

impl From<TicketStatus> for String {
    fn from(status: TicketStatus) -> Self {
        match status {
            TicketStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}
