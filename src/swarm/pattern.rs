//! Directional patterns around a cell and the window test that scores them

use crate::board::{Board, Cell, Player};

/// The four lines passing through a cell
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Axis {
    EastWest,
    NorthEastSouthWest,
    SouthEastNorthWest,
    SouthNorth,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::EastWest,
        Axis::NorthEastSouthWest,
        Axis::SouthEastNorthWest,
        Axis::SouthNorth,
    ];

    /// Unit step (dx, dy) towards the second half of the pattern; y grows
    /// downwards
    fn step(&self) -> (isize, isize) {
        match self {
            Axis::EastWest => (1, 0),
            Axis::NorthEastSouthWest => (1, -1),
            Axis::SouthEastNorthWest => (1, 1),
            Axis::SouthNorth => (0, 1),
        }
    }
}

/// Collects up to `inarow - 1` marks walking away from (column, row),
/// nearest first, stopping at the grid edge
fn walk(board: &Board, column: usize, row: usize, (dx, dy): (isize, isize)) -> Vec<Cell> {
    let reach = board.config().inarow.saturating_sub(1);
    let mut marks = Vec::with_capacity(reach);
    let (mut x, mut y) = (column as isize, row as isize);
    for _ in 0..reach {
        x += dx;
        y += dy;
        match board.get_checked(x, y) {
            Some(cell) => marks.push(cell),
            None => break,
        }
    }
    marks
}

/// The marks along `axis` through (column, row) with `player`'s piece
/// assumed at the center
///
/// The board's own content at the center is ignored, so the same call yields
/// both the "for" pattern (the mover at the center) and the "against"
/// pattern (the opponent at the center).
pub fn pattern(board: &Board, column: usize, row: usize, axis: Axis, player: Player) -> Vec<Cell> {
    let (dx, dy) = axis.step();
    let mut pattern = walk(board, column, row, (-dx, -dy));
    pattern.reverse();
    pattern.push(player.cell());
    pattern.extend(walk(board, column, row, (dx, dy)));
    pattern
}

/// Scores one point if any `inarow`-wide window of the pattern holds at
/// least `needed` of `player`'s pieces and nothing but empty cells otherwise
pub fn window_point(pattern: &[Cell], player: Player, inarow: usize, needed: usize) -> i32 {
    if inarow == 0 || pattern.len() < inarow {
        return 0;
    }
    let cell = player.cell();
    let qualifies = pattern.windows(inarow).any(|window| {
        let marks = window.iter().filter(|&&c| c == cell).count();
        let zeros = window.iter().filter(|c| c.is_empty()).count();
        marks >= needed && marks + zeros == inarow
    });
    if qualifies {
        1
    } else {
        0
    }
}

/// Sums the window points of all four axes through (column, row) for
/// `player`'s piece at the center
pub fn axis_points(board: &Board, column: usize, row: usize, player: Player, needed: usize) -> i32 {
    let inarow = board.config().inarow;
    Axis::ALL
        .iter()
        .map(|&axis| window_point(&pattern(board, column, row, axis, player), player, inarow, needed))
        .sum()
}
