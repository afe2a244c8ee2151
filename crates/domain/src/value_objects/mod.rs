//! Value Objects - Immutable, identity-less domain primitives

mod advisory;
mod city_query;
mod geo_location;
mod heat_index;
mod humidity;
mod place_category;

pub use advisory::{AdvisoryTier, CAUTION_THRESHOLD_C, HospitalAdvisory, URGENT_THRESHOLD_C};
pub use city_query::CityQuery;
pub use geo_location::GeoLocation;
pub use heat_index::{HeatIndex, round_to_tenth};
pub use humidity::Humidity;
pub use place_category::PlaceCategory;
