//! Enumeration of the board's win lines.

use super::coord::Coord;

/// Every maximal row, column, diagonal, and anti-diagonal of a `size`×`size`
/// board, as coordinate sequences. Winner detection and the positional
/// heuristic both scan the same k-length windows of these lines.
pub fn all_lines(size: usize) -> Vec<Vec<Coord>> {
    let mut lines: Vec<Vec<Coord>> = Vec::new();

    for row in 0..size {
        lines.push((0..size).map(|col| Coord::new(row, col)).collect());
    }
    for col in 0..size {
        lines.push((0..size).map(|row| Coord::new(row, col)).collect());
    }

    // Diagonals (top-left to bottom-right).
    for col in 0..size {
        lines.push(walk(size, 0, col as isize, 1));
    }
    for row in 1..size {
        lines.push(walk(size, row as isize, 0, 1));
    }

    // Anti-diagonals (top-right to bottom-left).
    for col in 0..size {
        lines.push(walk(size, 0, col as isize, -1));
    }
    for row in 1..size {
        lines.push(walk(size, row as isize, size as isize - 1, -1));
    }

    lines
}

fn walk(size: usize, mut row: isize, mut col: isize, col_step: isize) -> Vec<Coord> {
    let bound = size as isize;
    let mut line = Vec::new();
    while (0..bound).contains(&row) && (0..bound).contains(&col) {
        line.push(Coord::new(row as usize, col as usize));
        row += 1;
        col += col_step;
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count_3x3() {
        // 3 rows, 3 cols, 5 diagonals, 5 anti-diagonals.
        assert_eq!(all_lines(3).len(), 16);
    }

    #[test]
    fn test_full_length_windows_3x3() {
        let windows: usize = all_lines(3).iter().map(|line| line.windows(3).count()).sum();
        // 3 rows + 3 cols + main diagonal + main anti-diagonal.
        assert_eq!(windows, 8);
    }

    #[test]
    fn test_main_anti_diagonal() {
        let lines = all_lines(3);
        let anti: Vec<Coord> = vec![Coord::new(0, 2), Coord::new(1, 1), Coord::new(2, 0)];
        assert!(lines.contains(&anti));
    }

    #[test]
    fn test_short_diagonals_present_on_4x4() {
        let lines = all_lines(4);
        let short: Vec<Coord> = vec![Coord::new(1, 3), Coord::new(2, 2), Coord::new(3, 1)];
        assert!(lines.contains(&short));
    }
}
