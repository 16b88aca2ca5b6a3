// Core data types for the pinch-to-density card grid.
// Everything here is plain data; the state machines live in `state`.

use serde::{Deserialize, Serialize};

/// Minimum time between two committed level changes during one pinch.
pub const THROTTLE_WINDOW_MS: f64 = 150.0;

/// Bounds of the continuous preview scale while a level change is possible.
pub const PREVIEW_SCALE_MIN: f64 = 0.6;
pub const PREVIEW_SCALE_MAX: f64 = 1.4;

// Hysteresis bands, lower bound inclusive.
const STRONG_SHRINK: f64 = 0.6;
const SHRINK: f64 = 0.85;
const GROW: f64 = 1.15;
const STRONG_GROW: f64 = 1.4;

pub const DEFAULT_SETTLE_TRANSITION: &str = "transform 0.3s cubic-bezier(0.4, 0, 0.2, 1)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DensityLevel {
    /// One card per row.
    #[default]
    One,
    Two,
    Four,
    /// Densest layout.
    Six,
}

impl DensityLevel {
    /// Narrowest (fewest columns) first.
    pub const ALL: [DensityLevel; 4] = [
        DensityLevel::One,
        DensityLevel::Two,
        DensityLevel::Four,
        DensityLevel::Six,
    ];

    pub fn columns(self) -> u32 {
        match self {
            DensityLevel::One => 1,
            DensityLevel::Two => 2,
            DensityLevel::Four => 4,
            DensityLevel::Six => 6,
        }
    }

    pub fn index(self) -> usize {
        match self {
            DensityLevel::One => 0,
            DensityLevel::Two => 1,
            DensityLevel::Four => 2,
            DensityLevel::Six => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<DensityLevel> {
        Self::ALL.get(i).copied()
    }

    pub fn narrowest() -> DensityLevel {
        Self::ALL[0]
    }

    pub fn widest() -> DensityLevel {
        Self::ALL[Self::ALL.len() - 1]
    }

    pub fn is_narrowest(self) -> bool {
        self == Self::narrowest()
    }

    pub fn is_widest(self) -> bool {
        self == Self::widest()
    }

    pub fn label(self) -> &'static str {
        match self {
            DensityLevel::One => "1 column",
            DensityLevel::Two => "2 columns",
            DensityLevel::Four => "4 columns",
            DensityLevel::Six => "6 columns",
        }
    }
}

/// Map a pinch scale ratio to a level index relative to `start`.
///
/// `len` is the number of ordered levels. A ratio below 1 means the fingers
/// moved together and asks for more columns (a higher index); above 1 asks
/// for fewer. The band around 1 keeps small jitter from flipping levels, and
/// no band moves more than one step.
pub fn classify_scale(scale: f64, start: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let last = len - 1;
    let i = start.min(last);
    if scale < STRONG_SHRINK {
        (i + 1).min(last)
    } else if scale < SHRINK {
        if i < last { i + 1 } else { i }
    } else if scale < GROW {
        i
    } else if scale < STRONG_GROW {
        if i > 0 { i - 1 } else { i }
    } else {
        i.saturating_sub(1)
    }
}

/// Per-level pinch distance thresholds in pixels.
///
/// Accepted for compatibility with callers that already pass them; the
/// classifier works on distance ratios and does not read these.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureThresholds {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            a: 50.0,
            b: 150.0,
            c: 250.0,
            d: 350.0,
        }
    }
}

/// Spacing between grid cells.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Gap {
    /// Pixels.
    Px(f64),
    /// Any CSS length, e.g. `"1rem"`.
    Css(String),
}

impl Default for Gap {
    fn default() -> Self {
        Gap::Px(12.0)
    }
}

impl Gap {
    pub fn to_css(&self) -> String {
        match self {
            Gap::Px(px) => format!("{}px", px),
            Gap::Css(s) => s.clone(),
        }
    }
}

/// Top-left corner of a grid item, relative to the grid container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ItemPosition {
    pub x: f64,
    pub y: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_follow_level_order() {
        let cols: Vec<u32> = DensityLevel::ALL.iter().map(|l| l.columns()).collect();
        assert_eq!(cols, vec![1, 2, 4, 6]);
        for (i, level) in DensityLevel::ALL.iter().enumerate() {
            assert_eq!(level.index(), i);
            assert_eq!(DensityLevel::from_index(i), Some(*level));
        }
        assert_eq!(DensityLevel::from_index(4), None);
        assert!(DensityLevel::One < DensityLevel::Six);
    }

    #[test]
    fn strong_pinch_moves_one_step_clamped_to_ends() {
        for len in 1..=8 {
            for i in 0..len {
                assert_eq!(classify_scale(1.4, i, len), i.saturating_sub(1));
                assert_eq!(classify_scale(3.0, i, len), i.saturating_sub(1));
                assert_eq!(classify_scale(0.59, i, len), (i + 1).min(len - 1));
                assert_eq!(classify_scale(0.1, i, len), (i + 1).min(len - 1));
            }
        }
    }

    #[test]
    fn dead_zone_keeps_start_index() {
        for len in 1..=8 {
            for i in 0..len {
                for scale in [0.85, 0.9, 1.0, 1.1, 1.149] {
                    assert_eq!(classify_scale(scale, i, len), i, "scale {scale} at {i}/{len}");
                }
            }
        }
    }

    #[test]
    fn mild_bands_respect_edges() {
        assert_eq!(classify_scale(0.7, 0, 4), 1);
        assert_eq!(classify_scale(0.7, 3, 4), 3);
        assert_eq!(classify_scale(1.2, 2, 4), 1);
        assert_eq!(classify_scale(1.2, 0, 4), 0);
        assert_eq!(classify_scale(0.6, 1, 4), 2);
        assert_eq!(classify_scale(1.15, 1, 4), 0);
    }

    #[test]
    fn empty_level_list_is_harmless() {
        assert_eq!(classify_scale(0.1, 0, 0), 0);
    }

    #[test]
    fn gap_renders_pixels_or_passthrough() {
        assert_eq!(Gap::Px(12.0).to_css(), "12px");
        assert_eq!(Gap::Px(7.5).to_css(), "7.5px");
        assert_eq!(Gap::Css("1rem".into()).to_css(), "1rem");
        assert_eq!(Gap::default(), Gap::Px(12.0));
    }

    #[test]
    fn level_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&DensityLevel::Four).unwrap(), "\"four\"");
        let l: DensityLevel = serde_json::from_str("\"six\"").unwrap();
        assert_eq!(l, DensityLevel::Six);
    }
}
