// Position bookkeeping for FLIP (first, last, invert, play) transitions.
use crate::model::ItemPosition;

// Sub-pixel layout noise is not worth animating.
const MIN_DELTA_PX: f64 = 0.01;

/// Last measured position per item index.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PositionArena {
    slots: Vec<Option<ItemPosition>>,
}

impl PositionArena {
    pub fn capture<I>(positions: I) -> Self
    where
        I: IntoIterator<Item = (usize, ItemPosition)>,
    {
        let mut arena = Self::default();
        for (index, pos) in positions {
            arena.insert(index, pos);
        }
        arena
    }

    pub fn insert(&mut self, index: usize, pos: ItemPosition) {
        if index >= self.slots.len() {
            self.slots.resize(index + 1, None);
        }
        self.slots[index] = Some(pos);
    }

    pub fn get(&self, index: usize) -> Option<ItemPosition> {
        self.slots.get(index).copied().flatten()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, ItemPosition)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.map(|p| (i, p)))
    }
}

/// Inverse offset that puts an item back where it was before the reflow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlipMove {
    pub index: usize,
    pub dx: f64,
    pub dy: f64,
}

impl FlipMove {
    pub fn translate_css(&self) -> String {
        format!("translate({}px, {}px)", self.dx, self.dy)
    }
}

/// Items present on both sides whose position changed.
pub fn plan_flip(before: &PositionArena, after: &PositionArena) -> Vec<FlipMove> {
    after
        .iter()
        .filter_map(|(index, last)| {
            let first = before.get(index)?;
            let dx = first.x - last.x;
            let dy = first.y - last.y;
            if dx.abs() < MIN_DELTA_PX && dy.abs() < MIN_DELTA_PX {
                return None;
            }
            Some(FlipMove { index, dx, dy })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64, y: f64) -> ItemPosition {
        ItemPosition { x, y }
    }

    #[test]
    fn unmoved_items_get_no_move() {
        let before = PositionArena::capture([(0, at(0.0, 0.0)), (1, at(100.0, 0.0))]);
        let after = PositionArena::capture([(0, at(0.0, 0.0)), (1, at(0.0, 120.0))]);
        let moves = plan_flip(&before, &after);
        assert_eq!(
            moves,
            vec![FlipMove {
                index: 1,
                dx: 100.0,
                dy: -120.0
            }]
        );
    }

    #[test]
    fn items_missing_on_either_side_are_skipped() {
        let before = PositionArena::capture([(0, at(0.0, 0.0)), (2, at(50.0, 50.0))]);
        let after = PositionArena::capture([(0, at(10.0, 0.0)), (1, at(20.0, 0.0))]);
        let moves = plan_flip(&before, &after);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].index, 0);
        assert_eq!(moves[0].dx, -10.0);
    }

    #[test]
    fn empty_snapshot_plans_nothing() {
        let after = PositionArena::capture([(0, at(1.0, 1.0))]);
        assert!(plan_flip(&PositionArena::default(), &after).is_empty());
    }

    #[test]
    fn sparse_arena_reports_only_filled_slots() {
        let mut a = PositionArena::default();
        assert!(a.is_empty());
        a.insert(3, at(1.0, 2.0));
        assert_eq!(a.len(), 1);
        assert_eq!(a.get(0), None);
        assert_eq!(a.get(3), Some(at(1.0, 2.0)));
        assert_eq!(a.get(10), None);
        assert_eq!(a.iter().collect::<Vec<_>>(), vec![(3, at(1.0, 2.0))]);
    }

    #[test]
    fn translate_uses_pixels() {
        let m = FlipMove {
            index: 0,
            dx: -12.5,
            dy: 40.0,
        };
        assert_eq!(m.translate_css(), "translate(-12.5px, 40px)");
    }
}
