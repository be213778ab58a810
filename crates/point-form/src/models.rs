//! Wire Models
//!
//! Data structures matching the backend API and the static reference datasets.

use serde::{Deserialize, Serialize};

/// Residue category (matches backend `GET /items`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub title: String,
    pub image_url: String,
}

/// Province record from `provinces.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvinceRecord {
    #[serde(default)]
    pub initials: String,
    pub name: String,
}

/// Province-to-city row from `geolocation.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    pub province_name: String,
    pub city: String,
}

/// A latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Map center used before geolocation resolves
    pub fn origin() -> Self {
        Self::default()
    }
}

/// Body of `POST /points`
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionPointSubmission {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub province: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub items: Vec<u32>,
}
