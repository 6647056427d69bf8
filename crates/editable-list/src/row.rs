//! Row Gesture Phases
//!
//! Per-row swipe state for browse mode:
//! `Resting -> Tracking -> {Revealed | Resting}`, then `Revealed -> Removing`.
//! A pan that drifts vertically first becomes `Scrolling` and stays there
//! until release. Removal itself happens on the list once the collapse finishes.

use crate::config::ListConfig;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RowPhase {
    /// Row sits at offset 0
    #[default]
    Resting,
    /// Finger is down and the row follows it
    Tracking {
        /// Offset the pan started from (0 or the revealed offset)
        origin: f64,
        /// Current horizontal translation, never positive
        offset: f64,
    },
    /// Pan abandoned as a scroll; later movement is ignored until release
    Scrolling {
        /// Whether the row was revealed when the pan started
        revealed: bool,
    },
    /// Delete button exposed, waiting for a press (pending removal)
    Revealed,
    /// Collapse animation running; removal fires when it completes
    Removing,
}

impl RowPhase {
    /// Revealed or collapsing: the only phases from which removal may happen.
    pub fn is_pending_removal(&self) -> bool {
        matches!(self, RowPhase::Revealed | RowPhase::Removing)
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self, RowPhase::Tracking { .. })
    }

    /// Apply a pan update with the cumulative displacement since pointer-down.
    ///
    /// A resting row only starts tracking on a leftward pan past the
    /// activation slop. Vertical travel past `vertical_fail_px` before that
    /// abandons the pan for good.
    pub fn on_pan(self, dx: f64, dy: f64, config: &ListConfig) -> RowPhase {
        let vertical = dy.abs() > config.vertical_fail_px;
        match self {
            RowPhase::Resting => {
                if vertical {
                    RowPhase::Scrolling { revealed: false }
                } else if dx > -config.swipe_activation_px {
                    RowPhase::Resting
                } else {
                    RowPhase::Tracking { origin: 0.0, offset: dx.min(0.0) }
                }
            }
            RowPhase::Revealed => {
                if vertical {
                    RowPhase::Scrolling { revealed: true }
                } else if dx.abs() < config.swipe_activation_px {
                    RowPhase::Revealed
                } else {
                    let origin = -config.delete_button_width;
                    RowPhase::Tracking { origin, offset: (origin + dx).min(0.0) }
                }
            }
            RowPhase::Tracking { origin, .. } => RowPhase::Tracking {
                origin,
                offset: (origin + dx).min(0.0),
            },
            RowPhase::Scrolling { .. } | RowPhase::Removing => self,
        }
    }

    /// Where a release with cumulative displacement `dx` settles.
    ///
    /// Only a tracking row moves; a release past half the button width
    /// reveals, anything shorter snaps back. A scrolling row returns to
    /// where the pan started.
    pub fn on_release(self, dx: f64, config: &ListConfig) -> RowPhase {
        match self {
            RowPhase::Tracking { origin, .. } => {
                let offset = (origin + dx).min(0.0);
                if offset < -config.reveal_threshold() {
                    RowPhase::Revealed
                } else {
                    RowPhase::Resting
                }
            }
            RowPhase::Scrolling { revealed: true } => RowPhase::Revealed,
            RowPhase::Scrolling { revealed: false } => RowPhase::Resting,
            other => other,
        }
    }

    /// Horizontal translation to render for this phase.
    pub fn offset(&self, config: &ListConfig) -> f64 {
        match self {
            RowPhase::Resting | RowPhase::Scrolling { revealed: false } => 0.0,
            RowPhase::Tracking { offset, .. } => *offset,
            RowPhase::Scrolling { revealed: true } | RowPhase::Revealed | RowPhase::Removing => {
                -config.delete_button_width
            }
        }
    }
}
