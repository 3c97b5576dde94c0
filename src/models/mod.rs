mod geo;
mod stop;
mod trip;

pub use geo::{GeoPoint, ResolvedStop};
pub use stop::Stop;
pub use trip::Trip;
