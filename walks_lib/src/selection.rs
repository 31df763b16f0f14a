use crate::{appearance::RouteState, Walk};

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionAction {
    SelectWalk(usize),
    SelectName(String),
    Clear,
}

/// The currently selected walk and participant. The two fields are independent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub walk: Option<usize>,
    pub name: Option<String>,
}

impl Selection {
    pub fn new(walk: Option<usize>, name: Option<String>) -> Self {
        Self { walk, name }
    }

    /// Returns whether the selection changed.
    pub fn apply(&mut self, action: SelectionAction) -> bool {
        let old = self.clone();
        match action {
            SelectionAction::SelectWalk(index) => self.walk = Some(index),
            SelectionAction::SelectName(name) => self.name = Some(name),
            SelectionAction::Clear => *self = Self::default(),
        }
        *self != old
    }

    pub fn selected_walk<'a>(&self, walks: &'a [Walk]) -> Option<&'a Walk> {
        self.walk.and_then(|index| walks.get(index))
    }

    /// A walk is marked when it contains the selected participant.
    pub fn marks(&self, walk: &Walk) -> bool {
        self.name.as_deref().is_some_and(|name| walk.has_participant(name))
    }

    pub fn route_state(&self, index: usize, walk: &Walk, hovered: bool) -> RouteState {
        RouteState {
            hovered,
            selected: self.marks(walk),
            active: self.walk == Some(index),
        }
    }

    /// `hovered` is indexed like `walks`; missing entries count as not hovered.
    pub fn route_states(&self, walks: &[Walk], hovered: &[bool]) -> Vec<RouteState> {
        walks
            .iter()
            .enumerate()
            .map(|(i, walk)| self.route_state(i, walk, hovered.get(i).copied().unwrap_or(false)))
            .collect()
    }
}
