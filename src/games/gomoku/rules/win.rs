//! Win detection: `n_in_row` contiguous stones along a row, column or diagonal.

use super::super::{Board, Geometry, Player};
use derive_new::new;
use tracing::{debug, instrument, trace};

/// Direction of a ray, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Direction {
    /// Along the row, column increasing.
    Right,
    /// Along the column, row increasing.
    Down,
    /// Row and column increasing.
    DownRight,
    /// Row increasing, column decreasing.
    DownLeft,
}

impl Direction {
    /// Move indices of the ray of length `n` starting at `start`,
    /// or `None` if the ray would leave the grid.
    #[instrument(level = "trace")]
    pub fn ray(self, geometry: Geometry, n: usize, start: usize) -> Option<Vec<usize>> {
        let (width, height) = (geometry.width(), geometry.height());
        if n == 0 || !geometry.contains(start) || n > width.min(height) {
            return None;
        }

        let location = geometry.move_to_location(start);
        let (row, col) = (location.row, location.col);
        let fits_right = col <= width - n;
        let fits_down = row <= height - n;
        let fits_left = col >= n - 1;

        let stride = match self {
            Direction::Right if fits_right => 1,
            Direction::Down if fits_down => width,
            Direction::DownRight if fits_right && fits_down => width + 1,
            // Width is at least n here, so width - 1 >= n - 1 >= 0.
            Direction::DownLeft if fits_left && fits_down => width - 1,
            _ => return None,
        };

        Some((0..n).map(|step| start + step * stride).collect())
    }
}

/// A completed run of stones.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct WinningRun {
    /// Owner of every stone in the run.
    pub player: Player,
    /// Direction the run extends from its first cell.
    pub direction: Direction,
    /// Move indices of the run, starting cell first.
    pub cells: Vec<usize>,
}

/// Finds the first winning run.
///
/// Cells are scanned in ascending move index and directions in
/// [`Direction`] order, so the reported run is deterministic.
#[instrument(skip(board), fields(stones = board.move_count(), n_in_row = board.n_in_row()))]
pub fn find_winning_run(board: &Board) -> Option<WinningRun> {
    let n = board.n_in_row();

    // A winner has n stones and, with strict alternation, the opponent has
    // placed at least n - 1. Fewer stones than that cannot contain a win.
    if board.move_count() < 2 * n - 1 {
        trace!("Too few stones for a win");
        return None;
    }

    let geometry = board.geometry();
    for start in geometry.moves() {
        let Some(player) = board.owner_of(start) else {
            continue;
        };

        for direction in <Direction as strum::IntoEnumIterator>::iter() {
            let Some(cells) = direction.ray(geometry, n, start) else {
                continue;
            };
            // Unplayed cells are None and never equal Some(player).
            if cells.iter().all(|&cell| board.owner_of(cell) == Some(player)) {
                debug!(%player, %direction, start, "Winning run found");
                return Some(WinningRun::new(player, direction, cells));
            }
        }
    }

    None
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has `n_in_row` stones in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    find_winning_run(board).map(|run| run.player)
}
