mod position_source;
mod replay;

pub use position_source::{NoSensor, PositionSource, PositionStream, SensorError, WatchOptions, watch};
pub use replay::{ReplayError, ReplaySource};
