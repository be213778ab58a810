//! Reference Dataset Client
//!
//! Province and city lists from the externally hosted static JSON files.

use point_form::{cities_for_province, province_names, CityRecord, ProvinceRecord};

use super::{endpoint, get_json, ApiError};

const PROVINCES_FILE: &str = "provinces.json";
const CITIES_FILE: &str = "geolocation.json";

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceData {
    base_url: String,
}

impl ReferenceData {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    /// Province names in source order
    pub async fn provinces(&self) -> Result<Vec<String>, ApiError> {
        let records: Vec<ProvinceRecord> = get_json(&endpoint(&self.base_url, PROVINCES_FILE)).await?;
        Ok(province_names(&records))
    }

    /// Sorted city names of `province`; fetches the whole dataset each time
    pub async fn cities(&self, province: &str) -> Result<Vec<String>, ApiError> {
        let records: Vec<CityRecord> = get_json(&endpoint(&self.base_url, CITIES_FILE)).await?;
        let cities = cities_for_province(&records, province);
        log::debug!("[REFERENCE] {} cities in {}", cities.len(), province);
        Ok(cities)
    }
}
