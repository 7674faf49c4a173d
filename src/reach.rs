use crate::grid::CellPos;

/// The rectangular region of cells an actor may dig
///
/// Reach is not a fixed radius: it is calibrated by marker cells placed
/// around the actor (children of the actor in the scene, converted to cells
/// by the caller). The box starts one row above the actor at width 1 and
/// height 2, then grows its left and top edges to cover every marker, and
/// widens to 2 when any marker sits off the actor's column. Membership keeps
/// a one-cell margin on every edge; that margin is part of the expected
/// gameplay reach, not an accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReachBox {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl ReachBox {
    /// Derives the reach box for an actor and its calibration markers
    pub fn from_markers(actor: CellPos, markers: &[CellPos]) -> Self {
        let mut left = actor.x;
        let mut top = actor.y + 1;
        let mut width = 1;
        let height = 2;

        for marker in markers {
            left = left.min(marker.x);
            top = top.max(marker.y);
            if marker.x != actor.x {
                width = 2;
            }
        }

        ReachBox {
            left,
            top,
            width,
            height,
        }
    }

    /// Whether the target cell is inside the box (z is ignored)
    pub fn contains(&self, target: CellPos) -> bool {
        target.x >= self.left - 1
            && target.x <= self.left + self.width
            && target.y <= self.top + 1
            && target.y >= self.top - self.height
    }
}

/// Range gate for one dig attempt
pub fn can_dig(actor: CellPos, markers: &[CellPos], target: CellPos) -> bool {
    ReachBox::from_markers(actor, markers).contains(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: i32, y: i32) -> CellPos {
        CellPos::new(x, y, 0)
    }

    #[test]
    fn test_default_box_accepts_adjacent_cell() {
        assert!(can_dig(pos(0, 0), &[], pos(0, 1)));
    }

    #[test]
    fn test_default_box_rejects_distant_cell() {
        assert!(!can_dig(pos(0, 0), &[], pos(3, 3)));
    }

    #[test]
    fn test_default_box_extents() {
        // No markers: left=0, top=1, w=1, h=2
        let reach = ReachBox::from_markers(pos(0, 0), &[]);

        assert!(reach.contains(pos(-1, 2)));
        assert!(reach.contains(pos(1, -1)));
        assert!(!reach.contains(pos(-2, 0)));
        assert!(!reach.contains(pos(2, 0)));
        assert!(!reach.contains(pos(0, 3)));
        assert!(!reach.contains(pos(0, -2)));
    }

    #[test]
    fn test_marker_extends_left_edge() {
        let reach = ReachBox::from_markers(pos(0, 0), &[pos(-2, 0)]);

        assert_eq!(reach.left, -2);
        assert_eq!(reach.width, 2);
        assert!(reach.contains(pos(-3, 0)));
    }

    #[test]
    fn test_marker_raises_top_edge() {
        let reach = ReachBox::from_markers(pos(0, 0), &[pos(0, 3)]);

        assert_eq!(reach.top, 3);
        assert_eq!(reach.width, 1); // same column, no widening
        assert!(reach.contains(pos(0, 4)));
        assert!(reach.contains(pos(0, 1)));
    }

    #[test]
    fn test_off_column_marker_widens_box() {
        // Marker to the right of the actor: left edge stays, width doubles
        let reach = ReachBox::from_markers(pos(0, 0), &[pos(1, 0)]);

        assert_eq!(reach.left, 0);
        assert_eq!(reach.width, 2);
        assert!(reach.contains(pos(2, 0)));
        assert!(!reach.contains(pos(3, 0)));
    }

    #[test]
    fn test_z_component_ignored() {
        assert!(can_dig(pos(0, 0), &[], CellPos::new(0, 1, 5)));
    }

    #[test]
    fn test_box_moves_with_actor() {
        assert!(can_dig(pos(10, 10), &[], pos(10, 11)));
        assert!(!can_dig(pos(10, 10), &[], pos(0, 1)));
    }
}
