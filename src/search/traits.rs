//! Core traits for generic game-tree search.

use std::fmt::Debug;

/// Rules oracle for a two-player, zero-sum, perfect-information game.
///
/// States are immutable values: [`GameState::apply`] produces a successor
/// instead of mutating in place, so the search can explore sibling subtrees
/// without undo bookkeeping or aliasing hazards.
pub trait GameState: Clone {
    /// A legal move. Its natural `Ord` defines the deterministic tie-break
    /// and the oracle's "natural" exploration order.
    type Action: Clone + Ord + Debug;

    /// Collection type for legal-action lists.
    type ActionList: ActionCollection<Self::Action>;

    /// Error reported when an action cannot be applied.
    type Error: Debug;

    /// Returns true if the side to move is the maximizing player.
    fn is_maximizing_turn(&self) -> bool;

    /// Legal actions in natural ascending order; empty if none remain.
    fn legal_actions(&self) -> Self::ActionList;

    /// The successor state after the side to move plays `action`. Fails if
    /// the action is out of bounds or unavailable.
    fn apply(&self, action: &Self::Action) -> Result<Self, Self::Error>;

    /// `Some(1)` if the maximizer has won, `Some(-1)` if the minimizer has,
    /// `Some(0)` for a draw, `None` while the game is still in progress.
    fn terminal_utility(&self) -> Option<i8>;
}

/// Scores a non-terminal state. Higher scores favor the maximizing player.
pub trait Evaluator<S: GameState> {
    fn evaluate(&self, state: &S) -> f64;
}

/// Orders actions to improve alpha-beta pruning efficiency.
///
/// Implementations must be deterministic and side-effect free: ordering the
/// same actions on the same state twice must yield the identical result.
pub trait MoveOrderer<S: GameState> {
    /// Sorts actions in place, most promising first, without adding or
    /// dropping any.
    fn order_moves(&self, actions: &mut [S::Action], state: &S);
}

/// A no-op orderer: actions stay in the rules oracle's natural order.
#[derive(Clone, Copy, Default, Debug)]
pub struct NoOpMoveOrderer;

impl<S: GameState> MoveOrderer<S> for NoOpMoveOrderer {
    #[inline(always)]
    fn order_moves(&self, _actions: &mut [S::Action], _state: &S) {}
}

/// Abstraction over action collections (Vec, SmallVec, etc.)
pub trait ActionCollection<A>: AsRef<[A]> + AsMut<[A]> {
    #[inline]
    fn is_empty(&self) -> bool {
        self.as_ref().is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.as_ref().len()
    }
}

impl<A> ActionCollection<A> for Vec<A> {}
