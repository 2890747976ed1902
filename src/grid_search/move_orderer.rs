//! Tic-tac-toe move ordering for improved alpha-beta pruning.

use crate::board::{Board, Coord};
use crate::evaluate;
use crate::search::MoveOrderer;

/// Orders moves by a composite key: geometric band first (center, corners,
/// edges, interior), then a one-ply heuristic probe of the successor state
/// (better successor earlier), then the coordinate itself as the final
/// deterministic tie-break.
///
/// Ordering never changes which moves are legal, only the visit order, and
/// is referentially transparent: the same board yields the same order.
#[derive(Clone, Debug)]
pub struct GridMoveOrderer {
    heuristic_probe: bool,
}

impl GridMoveOrderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skips the heuristic probe; ordering degrades to geometric bands plus
    /// the lexicographic tie-break.
    pub fn without_probe() -> Self {
        Self {
            heuristic_probe: false,
        }
    }

    fn probe_score(&self, board: &Board, coord: Coord) -> f64 {
        if !self.heuristic_probe {
            return 0.0;
        }
        // A failed probe is masked with a neutral score rather than
        // propagated: only the successor construction is masked, never an
        // error raised elsewhere in the search.
        match board.apply(coord) {
            Ok(child) => evaluate::score(&child),
            Err(_) => 0.0,
        }
    }
}

impl Default for GridMoveOrderer {
    fn default() -> Self {
        Self {
            heuristic_probe: true,
        }
    }
}

impl MoveOrderer<Board> for GridMoveOrderer {
    fn order_moves(&self, actions: &mut [Coord], state: &Board) {
        let mut keyed: Vec<(u8, f64, Coord)> = actions
            .iter()
            .map(|&coord| {
                (
                    geometric_band(state, coord),
                    self.probe_score(state, coord),
                    coord,
                )
            })
            .collect();
        keyed.sort_by(|a, b| {
            a.0.cmp(&b.0)
                .then_with(|| b.1.total_cmp(&a.1))
                .then_with(|| a.2.cmp(&b.2))
        });
        for (slot, (_, _, coord)) in actions.iter_mut().zip(keyed) {
            *slot = coord;
        }
    }
}

/// Geometric priority band: center 0, corner 1, edge 2, interior 3.
fn geometric_band(board: &Board, coord: Coord) -> u8 {
    let last = board.size() - 1;
    let center = Coord::new(board.size() / 2, board.size() / 2);
    let on_row_edge = coord.row == 0 || coord.row == last;
    let on_col_edge = coord.col == 0 || coord.col == last;

    if coord == center {
        0
    } else if on_row_edge && on_col_edge {
        1
    } else if on_row_edge || on_col_edge {
        2
    } else {
        3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid_position;

    fn ordered(orderer: &GridMoveOrderer, board: &Board) -> Vec<Coord> {
        let mut moves = board.legal_moves().to_vec();
        orderer.order_moves(&mut moves, board);
        moves
    }

    #[test]
    fn test_empty_board_orders_center_corners_edges() {
        let board = Board::new(3, 3).unwrap();
        let moves = ordered(&GridMoveOrderer::default(), &board);

        assert_eq!(moves[0], Coord::new(1, 1));
        // All corner probes are symmetric on an empty board, so corners fall
        // back to lexicographic order.
        assert_eq!(
            &moves[1..5],
            &[
                Coord::new(0, 0),
                Coord::new(0, 2),
                Coord::new(2, 0),
                Coord::new(2, 2),
            ]
        );
        assert_eq!(
            &moves[5..],
            &[
                Coord::new(0, 1),
                Coord::new(1, 0),
                Coord::new(1, 2),
                Coord::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_probe_prefers_stronger_successors_within_a_band() {
        // X to move; completing the top row is the strongest corner probe.
        let board = grid_position! { 3,
            X X .
            . O .
            O . .
        };
        let moves = ordered(&GridMoveOrderer::default(), &board);
        let winning_corner = Coord::new(0, 2);
        let other_corner = Coord::new(2, 2);
        let win_index = moves.iter().position(|&c| c == winning_corner).unwrap();
        let other_index = moves.iter().position(|&c| c == other_corner).unwrap();
        assert!(win_index < other_index);
    }

    #[test]
    fn test_without_probe_is_geometric_plus_lexicographic() {
        let board = grid_position! { 3,
            X X .
            . O .
            O . .
        };
        let moves = ordered(&GridMoveOrderer::without_probe(), &board);
        // Corners in lexicographic order regardless of successor strength.
        assert_eq!(moves[0], Coord::new(0, 2));
        assert_eq!(moves[1], Coord::new(2, 2));
    }

    #[test]
    fn test_ordering_is_referentially_transparent() {
        let board = grid_position! { 3,
            X . .
            . O .
            . . .
        };
        let orderer = GridMoveOrderer::default();
        assert_eq!(ordered(&orderer, &board), ordered(&orderer, &board));
    }

    #[test]
    fn test_ordering_preserves_the_action_set() {
        let board = grid_position! { 3,
            X . O
            . X .
            . . O
        };
        let mut moves = board.legal_moves().to_vec();
        let mut expected = moves.clone();
        GridMoveOrderer::default().order_moves(&mut moves, &board);
        moves.sort();
        expected.sort();
        assert_eq!(moves, expected);
    }
}
