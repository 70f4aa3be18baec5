//! Console surface state
//!
//! One tagged state instead of independent visibility flags, so two
//! surfaces can never be open at once.

use ac_client::RoleItem;

/// Which surface is currently visible
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConsoleState {
    /// Plain listing, nothing open
    #[default]
    Idle,

    /// Create modal open
    Creating,

    /// Update modal open for the given row
    Editing { current: RoleItem },

    /// Read-only detail drawer for the given row
    ViewingDetail { current: RoleItem },
}

impl ConsoleState {
    pub fn is_idle(&self) -> bool {
        matches!(self, ConsoleState::Idle)
    }

    /// The row held by the update modal or detail drawer, if any
    pub fn current_row(&self) -> Option<&RoleItem> {
        match self {
            ConsoleState::Editing { current } | ConsoleState::ViewingDetail { current } => {
                Some(current)
            }
            ConsoleState::Idle | ConsoleState::Creating => None,
        }
    }
}
