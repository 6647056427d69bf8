//! Interaction mode of the list.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Swipe a row left to reveal its delete button
    #[default]
    Browse,
    /// Long-press to drag rows; explicit delete affordance per row
    Edit,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Browse => Mode::Edit,
            Mode::Edit => Mode::Browse,
        }
    }

    /// Header button label for switching out of this mode
    pub fn toggle_label(self) -> &'static str {
        match self {
            Mode::Browse => "Edit",
            Mode::Edit => "Done",
        }
    }
}
