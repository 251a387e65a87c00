//! Kundli Shared - Contract between the gateway and its clients
//!
//! - Wire-format request and response bodies
//! - The basis/query composer used on both sides before a horoscope request
//! - The result normalizer for the backend's per-sign payloads
//! - Birth details and the chart computations relayed to the backend
//!
//! # Design Principles
//!
//! 1. **No I/O** - Pure data types and transformations
//! 2. **Domain vocabulary** - Locations and bases come from `kundli-domain`

pub mod chart;
pub mod composer;
pub mod normalizer;
pub mod requests;
pub mod responses;

pub use chart::{parse_instant, transit_instant, ChartInput, ChartOperation};
pub use composer::{build_query, parse_date, BasisQuery, QueryError, TODAY_PATH};
pub use normalizer::{
    blurb, detect_shape, find_card, normalize, normalize_with_limit, sample_records, sign_name,
    ShapeAdapter, MAX_SIGN_RECORDS,
};
pub use requests::{
    BasisParams, GeoSearchRequest, PlaceDetailsQuery, PlacesQuery, ReverseGeocodeRequest,
    TransitQuery,
};
pub use responses::{ErrorBody, GeoPlace, PlaceDetails, PlacePrediction, PlacesResponse};
