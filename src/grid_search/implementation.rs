//! Board-facing implementations of the search core's trait seams, plus the
//! board-typed search entry points.

use crate::board::{Board, BoardError, Coord, MoveList};
use crate::evaluate;
use crate::search::{
    self, ActionCollection, Evaluator, GameState, NoOpMoveOrderer, NodeCounter, SearchError,
    SearchOutcome,
};

use super::move_orderer::GridMoveOrderer;

impl GameState for Board {
    type Action = Coord;
    type ActionList = MoveList;
    type Error = BoardError;

    #[inline]
    fn is_maximizing_turn(&self) -> bool {
        self.to_move().maximize_score()
    }

    #[inline]
    fn legal_actions(&self) -> MoveList {
        self.legal_moves()
    }

    #[inline]
    fn apply(&self, action: &Coord) -> Result<Board, BoardError> {
        Board::apply(self, *action)
    }

    #[inline]
    fn terminal_utility(&self) -> Option<i8> {
        Board::terminal_utility(self)
    }
}

impl ActionCollection<Coord> for MoveList {}

/// The window-count positional evaluator (see [`evaluate::score`]).
#[derive(Clone, Copy, Default, Debug)]
pub struct LineEvaluator;

impl LineEvaluator {
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator<Board> for LineEvaluator {
    #[inline]
    fn evaluate(&self, state: &Board) -> f64 {
        evaluate::score(state)
    }
}

/// Exhaustive minimax over the full game tree. Correctness oracle for small
/// boards; intractable beyond 3×3.
pub fn minimax(
    board: &Board,
    counter: &mut NodeCounter,
) -> Result<SearchOutcome<Coord>, SearchError> {
    search::minimax(board, counter)
}

/// Exhaustive alpha-beta search: the same optimal value as [`minimax`] with
/// no more visited nodes. `use_ordering` selects [`GridMoveOrderer`]; when
/// false, moves are visited in the board's natural row-major order.
pub fn minimax_with_pruning(
    board: &Board,
    counter: &mut NodeCounter,
    use_ordering: bool,
) -> Result<SearchOutcome<Coord>, SearchError> {
    if use_ordering {
        search::minimax_with_pruning(board, counter, &GridMoveOrderer::default())
    } else {
        search::minimax_with_pruning(board, counter, &NoOpMoveOrderer)
    }
}

/// Alpha-beta search limited to `depth` plies below the root, scoring the
/// cutoff frontier with `evaluator`.
pub fn depth_limited_search<E: Evaluator<Board>>(
    board: &Board,
    depth: u32,
    evaluator: &E,
    counter: &mut NodeCounter,
    use_ordering: bool,
) -> Result<SearchOutcome<Coord>, SearchError> {
    if use_ordering {
        search::depth_limited_search(board, depth, evaluator, counter, &GridMoveOrderer::default())
    } else {
        search::depth_limited_search(board, depth, evaluator, counter, &NoOpMoveOrderer)
    }
}
