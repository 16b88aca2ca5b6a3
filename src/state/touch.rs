// Two-finger pinch interpretation. DOM-free: the component feeds contact
// positions and timestamps in and applies what comes out.
use crate::model::{
    classify_scale, DensityLevel, PREVIEW_SCALE_MAX, PREVIEW_SCALE_MIN, THROTTLE_WINDOW_MS,
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

/// Distance between the first two contacts, or 0 with fewer than two.
pub fn contact_distance(points: &[TouchPoint]) -> f64 {
    match points {
        [a, b, ..] => {
            let dx = b.x - a.x;
            let dy = b.y - a.y;
            (dx * dx + dy * dy).sqrt()
        }
        _ => 0.0,
    }
}

/// Continuous visual feedback for a raw pinch ratio.
///
/// At the narrowest level there is nothing to spread out to, so growing is
/// pinned to 1; the widest level pins shrinking the same way.
pub fn preview_scale(scale: f64, current: DensityLevel) -> f64 {
    if current.is_narrowest() && scale > 1.0 {
        1.0
    } else if current.is_widest() && scale < 1.0 {
        1.0
    } else {
        scale.clamp(PREVIEW_SCALE_MIN, PREVIEW_SCALE_MAX)
    }
}

/// Lives while exactly two contacts are down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    pub start_distance: f64,
    /// Pivot for every classification in this session.
    pub start_level: DensityLevel,
    pub last_transition_ms: f64,
}

impl GestureSession {
    pub fn new(start_distance: f64, start_level: DensityLevel) -> Self {
        Self {
            start_distance,
            start_level,
            last_transition_ms: 0.0,
        }
    }

    /// Ratio of `distance` to the start distance; 1 when that is undefined.
    pub fn scale(&self, distance: f64) -> f64 {
        if self.start_distance.is_nan() || self.start_distance <= 0.0 {
            return 1.0;
        }
        let scale = distance / self.start_distance;
        if scale.is_finite() { scale } else { 1.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureUpdate {
    pub preview_scale: f64,
    /// Level to switch to, at most once per throttle window.
    pub commit: Option<DensityLevel>,
}

/// What the items should look like right now.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preview {
    pub scale: f64,
    /// While fingers are down the scale follows them without easing.
    pub pinching: bool,
}

impl Preview {
    pub const RESTING: Preview = Preview {
        scale: 1.0,
        pinching: false,
    };

    pub fn transition<'a>(&self, settle: &'a str) -> &'a str {
        if self.pinching { "none" } else { settle }
    }
}

impl Default for Preview {
    fn default() -> Self {
        Self::RESTING
    }
}

#[derive(Debug, Clone)]
pub struct GestureInterpreter {
    session: Option<GestureSession>,
    throttle_ms: f64,
}

impl Default for GestureInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureInterpreter {
    pub fn new() -> Self {
        Self {
            session: None,
            throttle_ms: THROTTLE_WINDOW_MS,
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    #[cfg(test)]
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Second contact went down. `shown` is the level on screen; it becomes
    /// the pivot for the whole session. Replaces any session still around.
    pub fn begin(&mut self, distance: f64, shown: DensityLevel) -> Preview {
        self.session = Some(GestureSession::new(distance, shown));
        Preview {
            scale: 1.0,
            pinching: true,
        }
    }

    /// Contacts moved. `shown` is the level on screen right now.
    /// Returns `None` when no session is active.
    pub fn update(
        &mut self,
        distance: f64,
        shown: DensityLevel,
        now_ms: f64,
    ) -> Option<GestureUpdate> {
        let throttle_ms = self.throttle_ms;
        let session = self.session.as_mut()?;
        let scale = session.scale(distance);
        let index = classify_scale(
            scale,
            session.start_level.index(),
            DensityLevel::ALL.len(),
        );
        let target = DensityLevel::from_index(index).unwrap_or(session.start_level);

        if target != shown && now_ms - session.last_transition_ms >= throttle_ms {
            session.last_transition_ms = now_ms;
            return Some(GestureUpdate {
                preview_scale: 1.0,
                commit: Some(target),
            });
        }
        Some(GestureUpdate {
            preview_scale: preview_scale(scale, shown),
            commit: None,
        })
    }

    /// Fewer than two contacts remain, or gestures were switched off.
    /// Safe to call with no session; always hands back the resting preview.
    pub fn end(&mut self) -> Preview {
        if self.session.take().is_some() {
            log::trace!("pinch ended");
        }
        Preview::RESTING
    }
}
