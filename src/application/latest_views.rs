use crate::application::dto::ScreenView;
use crate::application::profiles::ScreenKind;
use dashmap::DashMap;

/// Handle for one issued refresh cycle of a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewTicket {
    screen: ScreenKind,
    generation: u64,
}

impl ViewTicket {
    pub fn screen(&self) -> ScreenKind {
        self.screen
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Default)]
struct Slot {
    issued: u64,
    accepted: Option<ScreenView>,
}

/// Last-snapshot-wins store of screen views.
///
/// Refresh cycles are never cancelled. Each cycle takes a ticket when it
/// starts, and only the most recently issued ticket of a screen may
/// publish its view; results of superseded cycles are discarded.
#[derive(Default)]
pub struct LatestViews {
    slots: DashMap<ScreenKind, Slot>,
}

impl LatestViews {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket that supersedes every earlier ticket of `screen`
    pub fn begin(&self, screen: ScreenKind) -> ViewTicket {
        let mut slot = self.slots.entry(screen).or_default();
        slot.issued += 1;
        ViewTicket {
            screen,
            generation: slot.issued,
        }
    }

    /// Publishes `view` if `ticket` is still the latest one issued.
    ///
    /// Returns whether the view was accepted.
    pub fn complete(&self, ticket: ViewTicket, view: ScreenView) -> bool {
        let Some(mut slot) = self.slots.get_mut(&ticket.screen) else {
            return false;
        };
        if slot.issued != ticket.generation {
            return false;
        }
        slot.accepted = Some(view);
        true
    }

    /// Most recently accepted view of `screen`
    pub fn latest(&self, screen: ScreenKind) -> Option<ScreenView> {
        self.slots
            .get(&screen)
            .and_then(|slot| slot.accepted.clone())
    }
}
