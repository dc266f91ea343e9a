use crate::domain::topology::model::Position;

/// Coordinate assignment for topology nodes.
///
/// `idx` is the node's position in the filtered feed order, `group` the
/// index of its namespace cluster. Implementations must be deterministic so
/// repeated builds of the same feed agree.
pub trait PositionAssigner {
    fn position(&self, idx: usize, group: usize) -> Position;
}

/// Default placement: a five-column grid, with namespace clusters spread
/// along the x-axis far enough apart that they never overlap at the chosen
/// column width.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridLayout;

impl GridLayout {
    const COLUMNS: usize = 5;
    const X_ORIGIN: i64 = 200;
    const Y_ORIGIN: i64 = 100;
    const COLUMN_WIDTH: i64 = 200;
    const ROW_HEIGHT: i64 = 150;
    const GROUP_OFFSET: i64 = 1000;
}

impl PositionAssigner for GridLayout {
    fn position(&self, idx: usize, group: usize) -> Position {
        let column = (idx % Self::COLUMNS) as i64;
        let row = (idx / Self::COLUMNS) as i64;

        Position {
            x: Self::X_ORIGIN + column * Self::COLUMN_WIDTH + group as i64 * Self::GROUP_OFFSET,
            y: Self::Y_ORIGIN + row * Self::ROW_HEIGHT,
        }
    }
}
