pub mod itinerary;
pub mod snapshot;

pub use itinerary::{ItemKind, Itinerary, ItineraryItem};
pub use snapshot::SessionSnapshot;
