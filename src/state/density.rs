use crate::model::DensityLevel;

/// Outcome of an accepted level request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Commit {
    pub level: DensityLevel,
    /// False in controlled mode: only the caller may change what is shown.
    pub update_internal: bool,
}

/// Which density level is shown, and what the grid last asked for.
#[derive(Debug, Clone)]
pub struct DensityState {
    internal: DensityLevel,
    in_effect: DensityLevel,
    last_seen: DensityLevel,
}

impl DensityState {
    pub fn new(initial: DensityLevel) -> Self {
        Self {
            internal: initial,
            in_effect: initial,
            last_seen: initial,
        }
    }

    /// An explicit level from the caller always wins.
    pub fn effective(&self, controlled: Option<DensityLevel>) -> DensityLevel {
        controlled.unwrap_or(self.internal)
    }

    pub fn in_effect(&self) -> DensityLevel {
        self.in_effect
    }

    /// Level on screen, taken as the pivot of a new gesture. A request the
    /// controlling caller left unanswered is forgotten, so the new gesture
    /// may ask for it again.
    pub fn pivot(&mut self, controlled: Option<DensityLevel>) -> DensityLevel {
        let shown = self.effective(controlled);
        self.in_effect = shown;
        shown
    }

    /// Called on every render with the level about to be shown. Only an
    /// actual change resyncs, so a controlling caller that has not answered
    /// a request yet does not cause the request to be repeated.
    pub fn observe(&mut self, shown: DensityLevel) {
        if shown != self.last_seen {
            self.last_seen = shown;
            self.in_effect = shown;
        }
    }

    pub fn request(
        &mut self,
        target: DensityLevel,
        controlled: Option<DensityLevel>,
    ) -> Option<Commit> {
        if target == self.in_effect {
            return None;
        }
        self.in_effect = target;
        let update_internal = controlled.is_none();
        if update_internal {
            self.internal = target;
        }
        Some(Commit {
            level: target,
            update_internal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GestureInterpreter;

    #[test]
    fn uncontrolled_request_updates_internal_level() {
        let mut d = DensityState::new(DensityLevel::One);
        let c = d.request(DensityLevel::Four, None).unwrap();
        assert_eq!(
            c,
            Commit {
                level: DensityLevel::Four,
                update_internal: true
            }
        );
        assert_eq!(d.effective(None), DensityLevel::Four);
        assert_eq!(d.in_effect(), DensityLevel::Four);
    }

    #[test]
    fn same_level_request_is_a_no_op() {
        let mut d = DensityState::new(DensityLevel::Two);
        assert_eq!(d.request(DensityLevel::Two, None), None);
        assert_eq!(d.request(DensityLevel::Two, Some(DensityLevel::Two)), None);
    }

    #[test]
    fn any_level_is_reachable_directly() {
        let mut d = DensityState::new(DensityLevel::One);
        assert!(d.request(DensityLevel::Six, None).is_some());
        assert!(d.request(DensityLevel::One, None).is_some());
        assert_eq!(d.effective(None), DensityLevel::One);
    }

    #[test]
    fn controlled_level_stays_until_caller_changes_it() {
        let controlled = Some(DensityLevel::One);
        let mut d = DensityState::new(DensityLevel::One);
        d.observe(d.effective(controlled));

        let c = d.request(DensityLevel::Two, controlled).unwrap();
        assert!(!c.update_internal);
        assert_eq!(c.level, DensityLevel::Two);

        // Re-render with the same explicit level: nothing moves.
        let shown = d.effective(controlled);
        d.observe(shown);
        assert_eq!(shown, DensityLevel::One);
        // The pending request is not re-sent while the caller stays silent.
        assert_eq!(d.request(DensityLevel::Two, controlled), None);

        // Caller accepts.
        let controlled = Some(DensityLevel::Two);
        let shown = d.effective(controlled);
        d.observe(shown);
        assert_eq!(shown, DensityLevel::Two);
        assert_eq!(d.in_effect(), DensityLevel::Two);
    }

    #[test]
    fn external_change_resyncs_in_effect_level() {
        let mut d = DensityState::new(DensityLevel::Two);
        d.observe(DensityLevel::Six);
        assert_eq!(d.in_effect(), DensityLevel::Six);
        assert!(d.request(DensityLevel::Two, Some(DensityLevel::Six)).is_some());
    }

    #[test]
    fn ignored_request_does_not_move_next_pinch_pivot() {
        let controlled = Some(DensityLevel::One);
        let mut d = DensityState::new(DensityLevel::One);
        assert!(d.request(DensityLevel::Two, controlled).is_some());
        d.observe(d.effective(controlled));
        assert_eq!(d.in_effect(), DensityLevel::Two);

        // Fresh pinch on a grid still showing one column.
        let shown = d.pivot(controlled);
        assert_eq!(shown, DensityLevel::One);
        let mut g = GestureInterpreter::new();
        g.begin(100.0, shown);

        // Spreading on the narrowest level asks for nothing.
        let u = g.update(150.0, d.effective(controlled), 1_000.0).unwrap();
        assert_eq!(u.commit, None);

        // Pinching in moves one step from what is on screen, not two.
        let u = g.update(40.0, d.effective(controlled), 2_000.0).unwrap();
        assert_eq!(u.commit, Some(DensityLevel::Two));
        let c = d.request(DensityLevel::Two, controlled).unwrap();
        assert!(!c.update_internal);

        // Within the same gesture the unanswered request is not re-sent.
        let u = g.update(40.0, d.effective(controlled), 2_200.0).unwrap();
        assert_eq!(u.commit, Some(DensityLevel::Two));
        assert_eq!(d.request(DensityLevel::Two, controlled), None);
    }

    #[test]
    fn pivot_matches_uncontrolled_level() {
        let mut d = DensityState::new(DensityLevel::Four);
        assert_eq!(d.pivot(None), DensityLevel::Four);
        d.request(DensityLevel::Six, None);
        assert_eq!(d.pivot(None), DensityLevel::Six);
    }
}
