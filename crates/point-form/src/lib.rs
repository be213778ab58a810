//! Point Form
//!
//! Framework-free state and rules behind the collection point
//! registration form. The UI crate wraps these types in signals.

mod form;
mod models;
mod reference;
mod selection;
mod submission;

pub use form::{Field, FormData, PointForm, ProvinceChange};
pub use models::{CityRecord, CollectionPointSubmission, Coordinates, Item, ProvinceRecord};
pub use reference::{
    cities_for_province, province_names, select_value, CityRequests, ProvinceSelection,
    RequestToken, UNSELECTED_VALUE,
};
pub use selection::SelectedItems;
pub use submission::{SubmissionState, ValidationError};
