use crate::domain::Position;
use std::fmt::{Debug, Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkerId(pub u64);

impl Display for MarkerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "marker-{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
}

/// The map widget drawing tiles and markers. Only the operations the tracker needs are exposed.
pub trait MapWidget: Debug + Send {
    fn add_tile_layer(&mut self, layer: &TileLayer);

    fn set_view(&mut self, center: Position, zoom: u8);

    fn add_marker(&mut self, position: Position, popup: &str) -> MarkerId;

    fn remove_marker(&mut self, marker: MarkerId);

    fn open_popup(&mut self, marker: MarkerId);
}
