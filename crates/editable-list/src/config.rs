//! List Configuration
//!
//! Gesture thresholds and animation timings. Every field has a default so an
//! override document only needs the keys it changes.

use serde::{Deserialize, Serialize};

use crate::entity::{ListError, ListResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Width of the red delete button revealed behind a row (px)
    pub delete_button_width: f64,
    /// Resting row height, collapsed to zero while removing (px)
    pub row_height: f64,
    /// Duration of the collapse animation before removal fires (ms)
    pub collapse_ms: u32,
    /// Horizontal travel before a pan counts as a swipe (px)
    pub swipe_activation_px: f64,
    /// Vertical travel that abandons a swipe (px)
    pub vertical_fail_px: f64,
    /// Hold time before a press in edit mode starts a drag (ms)
    pub long_press_ms: u32,
    /// Pointer travel before a press becomes a pan, or a long press is dropped as a scroll (px)
    pub drag_threshold_px: i32,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            delete_button_width: 80.0,
            row_height: 60.0,
            collapse_ms: 300,
            swipe_activation_px: 10.0,
            vertical_fail_px: 5.0,
            long_press_ms: 500,
            drag_threshold_px: 5,
        }
    }
}

impl ListConfig {
    /// Parse an override document, falling back to defaults for missing keys.
    pub fn from_json(json: &str) -> ListResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ListError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Leftward displacement a swipe must pass to arm the delete button.
    pub fn reveal_threshold(&self) -> f64 {
        self.delete_button_width / 2.0
    }

    fn validate(&self) -> ListResult<()> {
        if !(self.delete_button_width > 0.0) {
            return Err(ListError::Config("delete_button_width must be positive".into()));
        }
        if !(self.row_height > 0.0) {
            return Err(ListError::Config("row_height must be positive".into()));
        }
        if self.swipe_activation_px < 0.0 || self.vertical_fail_px < 0.0 {
            return Err(ListError::Config("gesture slop must not be negative".into()));
        }
        if self.drag_threshold_px < 0 {
            return Err(ListError::Config("drag_threshold_px must not be negative".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_half_button() {
        let config = ListConfig::default();
        assert_eq!(config.reveal_threshold(), 40.0);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = ListConfig::from_json(r#"{"collapse_ms": 150}"#).unwrap();
        assert_eq!(config.collapse_ms, 150);
        assert_eq!(config.delete_button_width, 80.0);
    }

    #[test]
    fn test_rejects_non_positive_width() {
        let err = ListConfig::from_json(r#"{"delete_button_width": 0}"#).unwrap_err();
        assert!(matches!(err, ListError::Config(_)));
    }

    #[test]
    fn test_drag_threshold_override() {
        let config = ListConfig::from_json(r#"{"drag_threshold_px": 12}"#).unwrap();
        assert_eq!(config.drag_threshold_px, 12);
        assert!(ListConfig::from_json(r#"{"drag_threshold_px": -1}"#).is_err());
    }

    #[test]
    fn test_rejects_malformed_document() {
        assert!(ListConfig::from_json("{not json").is_err());
    }
}
