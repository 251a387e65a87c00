//! Value objects - Immutable objects defined by their attributes

mod basis;
mod location;

// Astrological basis for daily predictions
pub use basis::Basis;

// Geography: validated coordinates, timezone, and the location lifecycle
pub use location::{
    Coordinates, Location, PlaceCandidate, ResolvedLocation, Timezone, MAX_TIMEZONE_LENGTH,
    MIN_TIMEZONE_LENGTH,
};
