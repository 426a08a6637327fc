use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassengerKind {
    Adult,
    Child,
    Infant,
}

impl PassengerKind {
    pub const ALL: [PassengerKind; 3] = [PassengerKind::Adult, PassengerKind::Child, PassengerKind::Infant];
}

impl fmt::Display for PassengerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassengerKind::Adult => write!(f, "adult"),
            PassengerKind::Child => write!(f, "child"),
            PassengerKind::Infant => write!(f, "infant"),
        }
    }
}

/// One passenger stepper, read from the form before it is adjusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassengerCounter {
    pub kind: PassengerKind,
    pub current: u32,
    pub target: u32,
}

impl PassengerCounter {
    pub fn new(kind: PassengerKind, current: u32, target: u32) -> Self {
        Self { kind, current, target }
    }

    /// Number of clicks needed to reach the target.
    pub fn steps(&self) -> u32 {
        self.current.abs_diff(self.target)
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    pub departure_point: String,
    pub destination: String,
    /// dd/mm/yyyy
    pub departure_date: String,
    /// dd/mm/yyyy
    pub return_date: String,
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
}

impl SearchCriteria {
    pub fn passengers(&self, kind: PassengerKind) -> u32 {
        match kind {
            PassengerKind::Adult => self.adults,
            PassengerKind::Child => self.children,
            PassengerKind::Infant => self.infants,
        }
    }
}

/// Externally supplied test data for the data-driven scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchData {
    pub url: String,
    pub flight: FlightData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightData {
    pub departure_point: String,
    pub destination: String,
    #[serde(default = "default_adults")]
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    #[serde(default)]
    pub infants: u32,
}

fn default_adults() -> u32 {
    1
}

impl FlightData {
    pub fn into_criteria(self, departure_date: String, return_date: String) -> SearchCriteria {
        SearchCriteria {
            departure_point: self.departure_point,
            destination: self.destination,
            departure_date,
            return_date,
            adults: self.adults,
            children: self.children,
            infants: self.infants,
        }
    }
}
