use std::time::{Duration, SystemTime};

use thiserror::Error;

use crate::board::{Board, BoardError, Coord, MoveList, Player};
use crate::grid_search::{depth_limited_search, minimax_with_pruning, LineEvaluator};
use crate::search::{NodeCounter, SearchError};

/// Core engine state and configuration
#[derive(Clone)]
pub struct EngineConfig {
    /// Plies to look ahead before scoring the frontier heuristically.
    /// `None` searches the game tree exhaustively.
    pub search_depth: Option<u32>,
    pub starting_position: Board,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: None,
            starting_position: Board::default(),
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnding {
    Win(Player),
    Draw,
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid move")]
    InvalidMove,
    #[error("The game is already over")]
    GameOver,
    #[error("Board error: {0}")]
    Board(#[from] BoardError),
    #[error("Search error: {0}")]
    Search(#[from] SearchError),
}

/// Search performance statistics
#[derive(Debug, Clone)]
pub struct SearchStats {
    pub score: f64,
    pub nodes_visited: u64,
    pub last_search_duration: Duration,
}

/// Manages a single game: tracks the board, validates moves, and picks the
/// engine's moves by search.
pub struct Engine {
    board: Board,
    move_history: Vec<Coord>,
    search_depth: Option<u32>,
    counter: NodeCounter,
    last_stats: Option<SearchStats>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            board: config.starting_position,
            move_history: Vec::new(),
            search_depth: config.search_depth,
            counter: NodeCounter::new(),
            last_stats: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.board.to_move()
    }

    pub fn legal_moves(&self) -> MoveList {
        self.board.legal_moves()
    }

    pub fn check_game_over(&self) -> Option<GameEnding> {
        match self.board.terminal_utility()? {
            0 => Some(GameEnding::Draw),
            utility if utility > 0 => Some(GameEnding::Win(Player::X)),
            _ => Some(GameEnding::Win(Player::O)),
        }
    }

    /// Plays `coord` for the side to move.
    pub fn make_move(&mut self, coord: Coord) -> Result<(), EngineError> {
        if self.check_game_over().is_some() {
            return Err(EngineError::GameOver);
        }
        if !self.legal_moves().contains(&coord) {
            return Err(EngineError::InvalidMove);
        }

        self.board = self.board.apply(coord)?;
        self.move_history.push(coord);
        Ok(())
    }

    /// Searches for the best move and plays it.
    pub fn make_engine_move(&mut self) -> Result<Coord, EngineError> {
        let coord = self.get_best_move()?;
        self.board = self.board.apply(coord)?;
        self.move_history.push(coord);
        Ok(coord)
    }

    pub fn get_best_move(&mut self) -> Result<Coord, EngineError> {
        let start_time = SystemTime::now();
        let outcome = match self.search_depth {
            None => minimax_with_pruning(&self.board, &mut self.counter, true)?,
            Some(depth) => depth_limited_search(
                &self.board,
                depth,
                &LineEvaluator,
                &mut self.counter,
                true,
            )?,
        };
        let duration = SystemTime::now()
            .duration_since(start_time)
            .unwrap_or_default();

        self.last_stats = Some(SearchStats {
            score: outcome.value,
            nodes_visited: self.counter.count(),
            last_search_duration: duration,
        });

        outcome.action.ok_or(EngineError::GameOver)
    }

    pub fn get_search_stats(&self) -> Option<&SearchStats> {
        self.last_stats.as_ref()
    }

    pub fn last_move(&self) -> Option<Coord> {
        self.move_history.last().copied()
    }

    pub fn move_history(&self) -> &[Coord] {
        &self.move_history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid_position;

    #[test]
    fn test_engine_finds_win_in_one() {
        let starting_position = grid_position! { 3,
            X X .
            O O .
            . . .
        };
        let mut engine = Engine::with_config(EngineConfig {
            search_depth: None,
            starting_position,
        });

        let coord = engine.make_engine_move().unwrap();
        assert_eq!(coord, Coord::new(0, 2));
        assert_eq!(engine.check_game_over(), Some(GameEnding::Win(Player::X)));

        let stats = engine.get_search_stats().unwrap();
        assert_eq!(stats.score, 1.0);
        assert!(stats.nodes_visited > 0);
    }

    #[test]
    fn test_engine_rejects_occupied_cell() {
        let mut engine = Engine::new();
        engine.make_move(Coord::new(1, 1)).unwrap();
        let result = engine.make_move(Coord::new(1, 1));
        assert!(matches!(result, Err(EngineError::InvalidMove)));
    }

    #[test]
    fn test_engine_refuses_moves_after_the_game_ends() {
        let starting_position = grid_position! { 3,
            X X X
            O O .
            . . .
        };
        let mut engine = Engine::with_config(EngineConfig {
            search_depth: None,
            starting_position,
        });

        assert_eq!(engine.check_game_over(), Some(GameEnding::Win(Player::X)));
        let result = engine.make_move(Coord::new(2, 2));
        assert!(matches!(result, Err(EngineError::GameOver)));
    }

    #[test]
    fn test_depth_limited_engine_finds_the_decisive_cell() {
        // (0, 2) both blocks the top row and completes the anti-diagonal.
        let starting_position = grid_position! { 3,
            O O .
            . X .
            X . .
        };
        let mut engine = Engine::with_config(EngineConfig {
            search_depth: Some(3),
            starting_position,
        });

        let coord = engine.make_engine_move().unwrap();
        assert_eq!(coord, Coord::new(0, 2));
        assert_eq!(engine.check_game_over(), Some(GameEnding::Win(Player::X)));
    }
}
