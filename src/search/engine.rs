//! Game-tree search: exhaustive minimax, alpha-beta pruning, and
//! depth-limited alpha-beta with a heuristic cutoff.
//!
//! # Core algorithm
//!
//! All three entry points share one recursive evaluator, configured by a
//! pruning switch and an optional heuristic cutoff, so their tie-break and
//! instrumentation behavior cannot drift apart. A maximizing node takes the
//! maximum over its children's values, a minimizing node the minimum; a
//! terminal node returns its exact utility without recursing.
//!
//! The pruned variants carry an [alpha, beta] window downward. A maximizing
//! node whose running value reaches beta returns it immediately (beta
//! cutoff); a minimizing node returns once its value falls to alpha (alpha
//! cutoff). Cutoffs are fail-soft: the running value is returned, not the
//! bound. The top level narrows its own window using the best value found so
//! far, so later root siblings prune against it.
//!
//! # Determinism
//!
//! The top level only replaces its best action on a strictly better value,
//! so the first action in explored order achieving the optimum wins. With no
//! move ordering the explored order is the oracle's natural ascending order,
//! making the result the lexicographically smallest optimal action. Enabling
//! move ordering changes the explored order and may therefore return a
//! different member of the optimal set; the value is unaffected.
//!
//! # Instrumentation
//!
//! Every node entered ticks the [`NodeCounter`] exactly once, before its
//! terminal check; the counter is destructively reset at the start of each
//! top-level call.

use log::debug;
use thiserror::Error;

use super::instrumentation::NodeCounter;
use super::traits::{ActionCollection, Evaluator, GameState, MoveOrderer, NoOpMoveOrderer};

/// A top-level search result: the value of the position for the side to move
/// and the action achieving it (`None` when the input was already terminal).
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<A> {
    pub value: f64,
    pub action: Option<A>,
}

#[derive(Error, Debug)]
pub enum SearchError {
    /// The rules oracle rejected an action drawn from its own legal-action
    /// list. This is a contract violation between the search and its
    /// collaborator; it is never retried or masked.
    #[error("rules oracle rejected one of its own legal actions: {0}")]
    OracleContract(String),
}

/// Exhaustive minimax over the entire game tree, no pruning. Children are
/// explored in the oracle's natural order. Intended as a correctness oracle
/// for small games.
pub fn minimax<S: GameState>(
    state: &S,
    counter: &mut NodeCounter,
) -> Result<SearchOutcome<S::Action>, SearchError> {
    debug!("minimax: exhaustive search");
    Searcher {
        counter,
        orderer: &NoOpMoveOrderer,
        evaluator: None,
        prune: false,
    }
    .run(state, None)
}

/// Exhaustive alpha-beta search. Returns the same optimal value as
/// [`minimax`] on every input while visiting no more nodes; the chosen
/// action may differ from [`minimax`]'s only when several actions tie for
/// the optimal value and `orderer` changes the exploration order.
pub fn minimax_with_pruning<S, O>(
    state: &S,
    counter: &mut NodeCounter,
    orderer: &O,
) -> Result<SearchOutcome<S::Action>, SearchError>
where
    S: GameState,
    O: MoveOrderer<S>,
{
    debug!("minimax: alpha-beta pruning");
    Searcher {
        counter,
        orderer,
        evaluator: None,
        prune: true,
    }
    .run(state, None)
}

/// Alpha-beta search cut off `depth` plies below the root, scoring the
/// frontier with `evaluator`. Terminal states reached within the budget are
/// always resolved by exact utility, never the heuristic. A `depth` of zero
/// is a one-ply heuristic lookahead over the root's children.
pub fn depth_limited_search<S, E, O>(
    state: &S,
    depth: u32,
    evaluator: &E,
    counter: &mut NodeCounter,
    orderer: &O,
) -> Result<SearchOutcome<S::Action>, SearchError>
where
    S: GameState,
    E: Evaluator<S>,
    O: MoveOrderer<S>,
{
    debug!("minimax: alpha-beta pruning, depth limit {}", depth);
    Searcher {
        counter,
        orderer,
        evaluator: Some(evaluator),
        prune: true,
    }
    .run(state, Some(depth))
}

struct Searcher<'a, S: GameState, O: MoveOrderer<S>> {
    counter: &'a mut NodeCounter,
    orderer: &'a O,
    evaluator: Option<&'a dyn Evaluator<S>>,
    prune: bool,
}

impl<'a, S: GameState, O: MoveOrderer<S>> Searcher<'a, S, O> {
    fn run(mut self, state: &S, depth: Option<u32>) -> Result<SearchOutcome<S::Action>, SearchError> {
        self.counter.reset();
        self.counter.tick();

        if let Some(utility) = state.terminal_utility() {
            return Ok(SearchOutcome {
                value: f64::from(utility),
                action: None,
            });
        }

        let maximizing = state.is_maximizing_turn();
        let mut actions = state.legal_actions();
        self.orderer.order_moves(actions.as_mut(), state);

        let child_depth = depth.map(|d| d.saturating_sub(1));
        let mut alpha = f64::NEG_INFINITY;
        let mut beta = f64::INFINITY;
        let mut best_value = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_action = None;

        for action in actions.as_ref() {
            let child = apply_checked(state, action)?;
            let value = self.evaluate_node(&child, child_depth, alpha, beta)?;

            let improved = if maximizing {
                value > best_value
            } else {
                value < best_value
            };
            if improved || best_action.is_none() {
                best_value = value;
                best_action = Some(action.clone());
            }

            if self.prune {
                if maximizing {
                    alpha = alpha.max(best_value);
                } else {
                    beta = beta.min(best_value);
                }
            }
        }

        debug!(
            "search complete: value {}, nodes visited {}",
            best_value,
            self.counter.count()
        );
        Ok(SearchOutcome {
            value: best_value,
            action: best_action,
        })
    }

    fn evaluate_node(
        &mut self,
        state: &S,
        depth: Option<u32>,
        mut alpha: f64,
        mut beta: f64,
    ) -> Result<f64, SearchError> {
        self.counter.tick();

        if let Some(utility) = state.terminal_utility() {
            return Ok(f64::from(utility));
        }
        if let (Some(0), Some(evaluator)) = (depth, self.evaluator) {
            return Ok(evaluator.evaluate(state));
        }

        let maximizing = state.is_maximizing_turn();
        let mut actions = state.legal_actions();
        self.orderer.order_moves(actions.as_mut(), state);

        let child_depth = depth.map(|d| d.saturating_sub(1));
        let mut value = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for action in actions.as_ref() {
            let child = apply_checked(state, action)?;
            let child_value = self.evaluate_node(&child, child_depth, alpha, beta)?;

            if maximizing {
                value = value.max(child_value);
                if self.prune {
                    if value >= beta {
                        return Ok(value);
                    }
                    alpha = alpha.max(value);
                }
            } else {
                value = value.min(child_value);
                if self.prune {
                    if value <= alpha {
                        return Ok(value);
                    }
                    beta = beta.min(value);
                }
            }
        }

        Ok(value)
    }
}

fn apply_checked<S: GameState>(state: &S, action: &S::Action) -> Result<S, SearchError> {
    state
        .apply(action)
        .map_err(|error| SearchError::OracleContract(format!("{:?}", error)))
}
