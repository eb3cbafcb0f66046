mod address;
mod location_record;
mod position;
mod timestamp;
mod tracker_error;

pub use address::{Address, UNKNOWN};
pub use location_record::LocationRecord;
pub use position::Position;
pub use timestamp::Timestamp;
pub use tracker_error::TrackerError;
