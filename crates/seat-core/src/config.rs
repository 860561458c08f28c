//! Engine configuration.
//!
//! Every field has a default, so a host can pass `{}` or only the keys it
//! cares about. Keys are camelCase to match the JSON the browser side
//! already speaks.

use crate::model::Color;
use serde::{Deserialize, Serialize};

/// The canvas (viewport) dimensions in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Display colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Palette {
    pub seat: Color,
    pub seat_selected: Color,
    /// Seats proposed by an in-progress draw gesture.
    pub proposal: Color,
    pub frame: Color,
    pub frame_width: f64,
    pub label: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            seat: Color::from_rgb8(0x00, 0x80, 0x00),
            seat_selected: Color::from_rgb8(0x66, 0xFF, 0x99),
            proposal: Color::from_rgb8(0x00, 0x80, 0x00),
            frame: Color::from_rgb8(0xFF, 0xFF, 0x00),
            frame_width: 1.0,
            label: Color::from_rgb8(0x00, 0x00, 0xFF),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Side of one seat square, logical units.
    pub seat_size: f64,
    /// Placement grid step. At least `seat_size`; the difference is the gutter.
    pub place_size: f64,
    /// Multiplicative zoom step for `scale_up` (and its reciprocal for `scale_down`).
    pub zoom_step: f64,
    pub viewport: Viewport,
    pub palette: Palette,
    pub show_mode_label: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seat_size: 10.0,
            place_size: 12.0,
            zoom_step: 1.1,
            viewport: Viewport::default(),
            palette: Palette::default(),
            show_mode_label: true,
        }
    }
}

impl EngineConfig {
    /// Seats of `size` packed edge to edge on a `size` grid.
    pub fn with_grid(size: f64) -> Self {
        Self {
            seat_size: size,
            place_size: size,
            ..Self::default()
        }
    }

    /// Parse from JSON and validate.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: EngineConfig =
            serde_json::from_str(json).map_err(|e| format!("Invalid engine config: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns a message naming the first offending field.
    pub fn validate(&self) -> Result<(), String> {
        let positive = |name: &str, v: f64| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(format!("{name} must be a positive finite number, got {v}"))
            }
        };
        positive("seatSize", self.seat_size)?;
        positive("placeSize", self.place_size)?;
        positive("zoomStep", self.zoom_step)?;
        positive("viewport.width", self.viewport.width)?;
        positive("viewport.height", self.viewport.height)?;
        positive("palette.frameWidth", self.palette.frame_width)?;
        if self.seat_size > self.place_size {
            return Err(format!(
                "seatSize ({}) must not exceed placeSize ({})",
                self.seat_size, self.place_size
            ));
        }
        Ok(())
    }
}
