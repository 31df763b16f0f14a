use crate::{
    participants::{interleave, ParticipantSegment},
    Walk,
};

pub const INFO_SEPARATOR: &str = " – ";
pub const PLACEHOLDER: &str = "Select a walk";

/// What the details panel shows.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailsView<'a> {
    Empty,
    Walk(WalkDetails<'a>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WalkDetails<'a> {
    pub title: &'a str,
    pub date: String,
    pub distance: String,
    pub walkers: String,
    pub participants: Vec<ParticipantSegment<'a>>,
}

impl<'a> DetailsView<'a> {
    pub fn new(walk: Option<&'a Walk>) -> Self {
        match walk {
            Some(walk) => DetailsView::Walk(WalkDetails::new(walk)),
            None => DetailsView::Empty,
        }
    }
}

impl<'a> WalkDetails<'a> {
    pub fn new(walk: &'a Walk) -> Self {
        Self {
            title: &walk.title,
            date: walk.date.to_string(),
            distance: format!("{} km", walk.distance),
            walkers: format!("{} walkers", walk.participants.len()),
            participants: interleave(&walk.participants),
        }
    }

    /// Date, distance and walker count on one line.
    pub fn info_line(&self) -> String {
        [self.date.as_str(), self.distance.as_str(), self.walkers.as_str()].join(INFO_SEPARATOR)
    }
}
