//! Vocabulary shared by the kundli gateway and client: locations, bases,
//! zodiac signs and the static narrative tables. No I/O lives here.

pub mod error;
pub mod narrative;
pub mod value_objects;
pub mod zodiac;

pub use error::DomainError;

pub use value_objects::{
    Basis, Coordinates, Location, PlaceCandidate, ResolvedLocation, Timezone,
    MAX_TIMEZONE_LENGTH, MIN_TIMEZONE_LENGTH,
};

pub use zodiac::{sun_sign_for, ZodiacSign, SIGN_NAMES};

pub use narrative::{Planet, Relationship};
