//! UI Components
//!
//! Pages and the form sections they are built from.

mod address_fields;
mod contact_fields;
mod create_point;
mod home;
mod item_grid;
mod location_map;
mod not_found;
mod page_header;

pub use address_fields::AddressFields;
pub use contact_fields::ContactFields;
pub use create_point::CreatePoint;
pub use home::Home;
pub use item_grid::ItemGrid;
pub use location_map::LocationMap;
pub use not_found::NotFound;
pub use page_header::PageHeader;
