use super::*;
use crate::grid_position;

#[test]
fn test_new_board_is_empty_and_x_moves_first() {
    let board = Board::new(3, 3).unwrap();
    assert_eq!(board.to_move(), Player::X);
    assert_eq!(board.legal_moves().len(), 9);
    assert_eq!(board.terminal_utility(), None);
}

#[test]
fn test_invalid_dimensions_rejected() {
    assert_eq!(Board::new(0, 1), Err(BoardError::InvalidSize));
    assert_eq!(
        Board::new(3, 4),
        Err(BoardError::InvalidWinLength {
            win_length: 4,
            size: 3
        })
    );
    assert_eq!(
        Board::new(3, 0),
        Err(BoardError::InvalidWinLength {
            win_length: 0,
            size: 3
        })
    );
}

#[test]
fn test_turns_alternate() {
    let board = Board::new(3, 3).unwrap();
    let board = board.apply(Coord::new(0, 0)).unwrap();
    assert_eq!(board.to_move(), Player::O);
    let board = board.apply(Coord::new(0, 1)).unwrap();
    assert_eq!(board.to_move(), Player::X);
}

#[test]
fn test_apply_does_not_mutate_the_parent() {
    let board = Board::new(3, 3).unwrap();
    let child = board.apply(Coord::new(1, 1)).unwrap();
    assert_eq!(board.legal_moves().len(), 9);
    assert_eq!(child.legal_moves().len(), 8);
    assert_eq!(board.get(Coord::new(1, 1)), None);
}

#[test]
fn test_apply_rejects_occupied_and_out_of_bounds() {
    let board = Board::new(3, 3).unwrap();
    let board = board.apply(Coord::new(0, 0)).unwrap();
    assert_eq!(
        board.apply(Coord::new(0, 0)),
        Err(BoardError::CellOccupied { row: 0, col: 0 })
    );
    assert_eq!(
        board.apply(Coord::new(3, 0)),
        Err(BoardError::OutOfBounds {
            row: 3,
            col: 0,
            size: 3
        })
    );
}

#[test]
fn test_row_win() {
    let board = Board::new(3, 3).unwrap();
    let moves = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)];
    let final_board = moves.iter().fold(board, |b, &(r, c)| {
        b.apply(Coord::new(r, c)).unwrap()
    });
    assert_eq!(final_board.winner(), Some(Player::X));
    assert_eq!(final_board.terminal_utility(), Some(1));
}

#[test]
fn test_column_win_for_o() {
    let board = grid_position! { 3,
        X X O
        X . O
        . . O
    };
    assert_eq!(board.winner(), Some(Player::O));
    assert_eq!(board.terminal_utility(), Some(-1));
}

#[test]
fn test_diagonal_and_anti_diagonal_wins() {
    let diagonal = grid_position! { 3,
        X O .
        O X .
        . . X
    };
    assert_eq!(diagonal.winner(), Some(Player::X));

    let anti_diagonal = grid_position! { 3,
        X X O
        X O .
        O . .
    };
    assert_eq!(anti_diagonal.winner(), Some(Player::O));
}

#[test]
fn test_nine_move_draw_sequence() {
    let moves = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ];
    let board = moves.iter().fold(Board::new(3, 3).unwrap(), |b, &(r, c)| {
        b.apply(Coord::new(r, c)).unwrap()
    });
    assert!(board.is_full());
    assert_eq!(board.winner(), None);
    assert_eq!(board.terminal_utility(), Some(0));
}

#[test]
fn test_win_shorter_than_board_size() {
    // 4x4 board, 3-in-a-row, won in the middle of the main diagonal.
    let board = grid_position! { 3,
        X O . .
        . X O .
        . . X .
        . . . .
    };
    assert_eq!(board.size(), 4);
    assert_eq!(board.winner(), Some(Player::X));
    assert_eq!(board.terminal_utility(), Some(1));
}

#[test]
fn test_parse_round_trip() {
    let board = Board::parse("XO./.X./..O", 3).unwrap();
    assert_eq!(board.get(Coord::new(0, 0)), Some(Player::X));
    assert_eq!(board.get(Coord::new(0, 1)), Some(Player::O));
    assert_eq!(board.get(Coord::new(1, 1)), Some(Player::X));
    assert_eq!(board.to_move(), Player::X);
    assert_eq!(board.position_string(), "XO./.X./..O");
    assert_eq!(Board::parse(&board.position_string(), 3).unwrap(), board);
}

#[test]
fn test_parse_rejects_malformed_positions() {
    assert_eq!(Board::parse("", 3), Err(BoardError::EmptyPosition));
    assert_eq!(
        Board::parse("XO/.X./..O", 3),
        Err(BoardError::RaggedRow {
            row: 0,
            got: 2,
            expected: 3
        })
    );
    assert!(matches!(
        Board::parse("XQ./.X./..O", 3),
        Err(BoardError::InvalidCellCharacter { character: 'Q', .. })
    ));
    assert_eq!(
        Board::parse("XXX/.O./...", 3),
        Err(BoardError::InvalidMarkCounts {
            x_count: 3,
            o_count: 1
        })
    );
}

#[test]
fn test_legal_moves_are_row_major_sorted() {
    let board = grid_position! { 3,
        X . O
        . X .
        O . .
    };
    let moves = board.legal_moves();
    let mut sorted = moves.clone();
    sorted.sort();
    assert_eq!(moves, sorted);
    assert_eq!(moves[0], Coord::new(0, 1));
}
