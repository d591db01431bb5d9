//! The board state machine.
//!
//! Owns the mapping of placed stones to players, the set of legal moves,
//! whose turn it is and the most recent move. Every accepted move updates
//! all of these together; a rejected move leaves the board untouched.

use super::action::MoveError;
#[cfg(debug_assertions)]
use super::contracts::assert_invariants;
use super::geometry::Geometry;
use super::phases::GameStatus;
use super::view::BoardView;
use super::{features, rules, Location, Player};
use crate::config::{ConfigError, GameConfig};
use ndarray::Array3;
use std::collections::BTreeSet;
use tracing::{debug, instrument, warn};

/// Five-in-a-row board of configurable size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(super) geometry: Geometry,
    pub(super) n_in_row: usize,
    /// Owner of each cell, indexed by move.
    pub(super) cells: Vec<Option<Player>>,
    /// Occupied moves in play order.
    pub(super) history: Vec<usize>,
    /// Complement of `history` within the grid.
    pub(super) available: BTreeSet<usize>,
    pub(super) start_player: Player,
    pub(super) current_player: Player,
    pub(super) last_move: Option<usize>,
}

impl Board {
    /// Creates an empty board with Black to move.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a dimension is zero or `n_in_row` exceeds
    /// either dimension.
    #[instrument]
    pub fn new(width: usize, height: usize, n_in_row: usize) -> Result<Self, ConfigError> {
        Self::from_config(&GameConfig::new(width, height, n_in_row))
    }

    /// Creates an empty board from a configuration, its start player to move.
    #[instrument(skip(config))]
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let geometry = Geometry::new(*config.width(), *config.height());
        let mut board = Self {
            geometry,
            n_in_row: *config.n_in_row(),
            cells: Vec::new(),
            history: Vec::new(),
            available: BTreeSet::new(),
            start_player: *config.start_player(),
            current_player: *config.start_player(),
            last_move: None,
        };
        board.init_board(*config.start_player());
        Ok(board)
    }

    /// Clears every stone and hands the first move to `start_player`.
    #[instrument(skip(self), fields(width = self.width(), height = self.height()))]
    pub fn init_board(&mut self, start_player: Player) {
        let cell_count = self.geometry.cell_count();
        self.cells = vec![None; cell_count];
        self.history.clear();
        self.available = self.geometry.moves().collect();
        self.start_player = start_player;
        self.current_player = start_player;
        self.last_move = None;
        debug!(cell_count, %start_player, "Board initialised");
    }

    /// Places a stone for the current player.
    ///
    /// Callers are expected to check legality first; an unavailable or
    /// out-of-range move is still refused here without touching state.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, index: usize) -> Result<(), MoveError> {
        if !self.available.remove(&index) {
            warn!(index, "Rejected unavailable move");
            return Err(MoveError::IllegalMove(index));
        }

        self.cells[index] = Some(self.current_player);
        self.history.push(index);
        self.last_move = Some(index);
        self.current_player = self.current_player.opponent();

        #[cfg(debug_assertions)]
        assert_invariants(self);

        Ok(())
    }

    /// Moves that may still be played.
    pub fn legal_moves(&self) -> &BTreeSet<usize> {
        &self.available
    }

    /// Whether `index` may still be played.
    pub fn is_available(&self, index: usize) -> bool {
        self.available.contains(&index)
    }

    /// Player owning the stone at `index`, if any.
    pub fn owner_of(&self, index: usize) -> Option<Player> {
        self.cells.get(index).copied().flatten()
    }

    /// Occupied cells with their owners, in play order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, Player)> + '_ {
        self.history
            .iter()
            .filter_map(|&index| self.owner_of(index).map(|player| (index, player)))
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Number of stones on the board.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Player to move next.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Player who placed (or will place) the first stone.
    pub fn start_player(&self) -> Player {
        self.start_player
    }

    /// Most recent move, `None` before the first.
    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    /// Grid dimensions.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.geometry.width()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.geometry.height()
    }

    /// Stones in a row needed to win.
    pub fn n_in_row(&self) -> usize {
        self.n_in_row
    }

    /// See [`Geometry::move_to_location`].
    pub fn move_to_location(&self, index: usize) -> Location {
        self.geometry.move_to_location(index)
    }

    /// See [`Geometry::location_to_move`].
    pub fn location_to_move(&self, location: Location) -> Result<usize, MoveError> {
        self.geometry.location_to_move(location)
    }

    /// Terminal status: win, draw or still in progress.
    pub fn status(&self) -> GameStatus {
        rules::terminal_status(self)
    }

    /// Winner, if any player has `n_in_row` contiguous stones.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Feature planes for the search agent. See [`features::encode`].
    pub fn features(&self) -> Array3<f64> {
        features::encode(self)
    }

    /// Read-only view handed to participants.
    pub fn view(&self) -> BoardView<'_> {
        BoardView::new(self)
    }
}
