//! Point Form Controller
//!
//! All mutable state of the registration form and the rules for
//! turning it into a submission.

use crate::models::{CollectionPointSubmission, Coordinates};
use crate::reference::{select_value, ProvinceSelection};
use crate::selection::SelectedItems;
use crate::submission::ValidationError;

/// Contact fields, one per text input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub mobile: String,
}

/// Text inputs of the form, keyed by their `name` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Mobile,
}

impl Field {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "mobile" => Some(Field::Mobile),
            _ => None,
        }
    }
}

/// What the caller must do after a province change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvinceChange {
    /// Same province as before
    Unchanged,
    /// Province cleared; drop the city list
    Cleared,
    /// Fetch the cities of this province
    FetchCities(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointForm {
    pub data: FormData,
    pub province: ProvinceSelection,
    pub city: Option<String>,
    pub items: SelectedItems,
    pub position: Option<Coordinates>,
}

impl PointForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one contact field; unknown names are ignored
    pub fn on_field_change(&mut self, name: &str, value: String) {
        match Field::from_name(name) {
            Some(field) => self.set_field(field, value),
            None => log::debug!("[FORM] Ignoring unknown field '{}'", name),
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.data.name = value,
            Field::Email => self.data.email = value,
            Field::Mobile => self.data.mobile = value,
        }
    }

    /// Select a province from its `<select>` value.
    ///
    /// A different province resets the selected city.
    pub fn on_province_change(&mut self, value: &str) -> ProvinceChange {
        let next = ProvinceSelection::from_value(value);
        if next == self.province {
            return ProvinceChange::Unchanged;
        }
        self.province = next;
        self.city = None;
        match &self.province {
            ProvinceSelection::Selected(name) => ProvinceChange::FetchCities(name.clone()),
            ProvinceSelection::Unselected => ProvinceChange::Cleared,
        }
    }

    pub fn on_city_change(&mut self, value: &str) {
        self.city = select_value(value);
    }

    pub fn on_item_toggle(&mut self, id: u32) {
        self.items.toggle(id);
    }

    /// Last click wins
    pub fn on_map_click(&mut self, latitude: f64, longitude: f64) {
        self.position = Some(Coordinates::new(latitude, longitude));
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.submission().map(|_| ())
    }

    /// Re-check a displayed validation error against the current input.
    /// Nothing shown stays hidden; a fixed error is replaced by the next one.
    pub fn recheck(&self, shown: Option<ValidationError>) -> Option<ValidationError> {
        shown.and_then(|_| self.validate().err())
    }

    /// Assemble the `POST /points` body
    pub fn submission(&self) -> Result<CollectionPointSubmission, ValidationError> {
        let FormData { name, email, mobile } = &self.data;
        if name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if !is_plausible_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        if mobile.trim().is_empty() {
            return Err(ValidationError::MissingMobile);
        }
        let province = self.province.name().ok_or(ValidationError::MissingProvince)?;
        let city = self.city.as_deref().ok_or(ValidationError::MissingCity)?;
        let position = self.position.ok_or(ValidationError::MissingPosition)?;
        if self.items.is_empty() {
            return Err(ValidationError::NoItems);
        }

        Ok(CollectionPointSubmission {
            name: name.clone(),
            email: email.clone(),
            mobile: mobile.clone(),
            province: province.to_string(),
            city: city.to_string(),
            latitude: position.latitude,
            longitude: position.longitude,
            items: self.items.to_vec(),
        })
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.trim().split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> PointForm {
        let mut form = PointForm::new();
        form.on_field_change("name", "A".to_string());
        form.on_field_change("email", "a@b.com".to_string());
        form.on_field_change("mobile", "123".to_string());
        form.on_province_change("Ontario");
        form.on_city_change("Toronto");
        form.on_map_click(43.6, -79.4);
        form.on_item_toggle(1);
        form.on_item_toggle(3);
        form
    }

    #[test]
    fn test_submission_payload() {
        let submission = filled_form().submission().unwrap();
        assert_eq!(
            submission,
            CollectionPointSubmission {
                name: "A".to_string(),
                email: "a@b.com".to_string(),
                mobile: "123".to_string(),
                province: "Ontario".to_string(),
                city: "Toronto".to_string(),
                latitude: 43.6,
                longitude: -79.4,
                items: vec![1, 3],
            }
        );

        let body = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "A",
                "email": "a@b.com",
                "mobile": "123",
                "province": "Ontario",
                "city": "Toronto",
                "latitude": 43.6,
                "longitude": -79.4,
                "items": [1, 3]
            })
        );
    }

    #[test]
    fn test_field_change_writes_one_key() {
        let mut form = PointForm::new();
        form.on_field_change("email", "x@y.z".to_string());
        assert_eq!(form.data.email, "x@y.z");
        assert!(form.data.name.is_empty());
        assert!(form.data.mobile.is_empty());

        form.on_field_change("fax", "nope".to_string());
        assert_eq!(form.data, FormData { email: "x@y.z".to_string(), ..Default::default() });
    }

    #[test]
    fn test_province_change_resets_city() {
        let mut form = PointForm::new();
        assert_eq!(
            form.on_province_change("Ontario"),
            ProvinceChange::FetchCities("Ontario".to_string())
        );
        form.on_city_change("Toronto");
        assert_eq!(form.city.as_deref(), Some("Toronto"));

        assert_eq!(
            form.on_province_change("Quebec"),
            ProvinceChange::FetchCities("Quebec".to_string())
        );
        assert_eq!(form.city, None);
    }

    #[test]
    fn test_clear_then_reselect_refetches() {
        let mut form = filled_form();
        assert_eq!(form.on_province_change("0"), ProvinceChange::Cleared);
        assert_eq!(form.city, None);

        assert_eq!(
            form.on_province_change("Ontario"),
            ProvinceChange::FetchCities("Ontario".to_string())
        );
        assert_eq!(form.province.as_value(), "Ontario");
        assert_eq!(form.validate(), Err(ValidationError::MissingCity));
    }

    #[test]
    fn test_same_province_keeps_city() {
        let mut form = PointForm::new();
        form.on_province_change("Ontario");
        form.on_city_change("Toronto");
        assert_eq!(form.on_province_change("Ontario"), ProvinceChange::Unchanged);
        assert_eq!(form.city.as_deref(), Some("Toronto"));
    }

    #[test]
    fn test_clearing_province() {
        let mut form = PointForm::new();
        assert_eq!(form.on_province_change("0"), ProvinceChange::Unchanged);
        form.on_province_change("Ontario");
        assert_eq!(form.on_province_change("0"), ProvinceChange::Cleared);
        assert_eq!(form.province, ProvinceSelection::Unselected);
    }

    #[test]
    fn test_map_click_last_wins() {
        let mut form = PointForm::new();
        assert_eq!(form.position, None);
        form.on_map_click(1.0, 2.0);
        form.on_map_click(-3.5, 4.25);
        assert_eq!(form.position, Some(Coordinates::new(-3.5, 4.25)));
    }

    #[test]
    fn test_item_clicks() {
        let mut form = PointForm::new();
        form.on_item_toggle(1);
        form.on_item_toggle(2);
        form.on_item_toggle(1);
        assert_eq!(form.items.as_slice(), &[2]);
        assert!(form.items.contains(2));
    }

    #[test]
    fn test_validation_order() {
        let mut form = filled_form();
        form.on_field_change("name", "  ".to_string());
        assert_eq!(form.validate(), Err(ValidationError::MissingName));

        let mut form = filled_form();
        form.on_field_change("email", "not-an-email".to_string());
        assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));

        let mut form = filled_form();
        form.on_field_change("email", "@b.com".to_string());
        assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));

        let mut form = filled_form();
        form.on_field_change("mobile", String::new());
        assert_eq!(form.validate(), Err(ValidationError::MissingMobile));

        let mut form = filled_form();
        form.on_city_change("0");
        assert_eq!(form.validate(), Err(ValidationError::MissingCity));

        let mut form = filled_form();
        form.on_province_change("0");
        assert_eq!(form.validate(), Err(ValidationError::MissingProvince));

        let mut form = filled_form();
        form.position = None;
        assert_eq!(form.validate(), Err(ValidationError::MissingPosition));

        let mut form = filled_form();
        form.on_item_toggle(1);
        form.on_item_toggle(3);
        assert_eq!(form.validate(), Err(ValidationError::NoItems));

        assert_eq!(filled_form().validate(), Ok(()));
    }

    #[test]
    fn test_recheck_follows_input() {
        let mut form = filled_form();
        form.on_field_change("name", String::new());
        form.on_field_change("mobile", String::new());

        // Nothing displayed yet, nothing to update
        assert_eq!(form.recheck(None), None);

        let shown = form.validate().err();
        assert_eq!(shown, Some(ValidationError::MissingName));

        form.on_field_change("name", "A".to_string());
        assert_eq!(form.recheck(shown), Some(ValidationError::MissingMobile));

        form.on_field_change("mobile", "123".to_string());
        assert_eq!(form.recheck(Some(ValidationError::MissingMobile)), None);
    }
}
