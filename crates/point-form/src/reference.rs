//! Reference Data
//!
//! Province/city lookup lists derived from the static datasets, the
//! province selection gate, and sequence tokens for city requests.

use crate::models::{CityRecord, ProvinceRecord};

/// `<select>` value of the placeholder option
pub const UNSELECTED_VALUE: &str = "0";

/// Parse a `<select>` value, mapping the placeholder to `None`
pub fn select_value(value: &str) -> Option<String> {
    if value.is_empty() || value == UNSELECTED_VALUE {
        None
    } else {
        Some(value.to_string())
    }
}

/// Province dropdown state; gates the city fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProvinceSelection {
    #[default]
    Unselected,
    Selected(String),
}

impl ProvinceSelection {
    pub fn from_value(value: &str) -> Self {
        match select_value(value) {
            Some(name) => ProvinceSelection::Selected(name),
            None => ProvinceSelection::Unselected,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            ProvinceSelection::Selected(name) => Some(name),
            ProvinceSelection::Unselected => None,
        }
    }

    /// Value for the `<select>` element
    pub fn as_value(&self) -> &str {
        self.name().unwrap_or(UNSELECTED_VALUE)
    }
}

/// Province names in source order
pub fn province_names(records: &[ProvinceRecord]) -> Vec<String> {
    records.iter().map(|p| p.name.clone()).collect()
}

/// Cities of one province, sorted alphabetically
pub fn cities_for_province(records: &[CityRecord], province: &str) -> Vec<String> {
    let mut cities: Vec<String> = records
        .iter()
        .filter(|row| row.province_name == province)
        .map(|row| row.city.clone())
        .collect();
    cities.sort();
    cities
}

/// Token identifying one city request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Issues sequence tokens; only the newest token's response is applied
#[derive(Debug, Clone, Default)]
pub struct CityRequests {
    latest: u64,
}

impl CityRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, invalidating every earlier token
    pub fn begin(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    /// Invalidate in-flight requests without starting a new one
    pub fn cancel(&mut self) {
        self.latest += 1;
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}
