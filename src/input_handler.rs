use std::io;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::Coord;

static MOVE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)[ ,]+(\d+)$").unwrap());

#[derive(Error, Debug)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?} (expected `row col`, like `0 2`)")]
    InvalidInput { input: String },
}

/// Reads one move from stdin, written as `row col` (or `row,col`).
pub fn parse_move_input() -> Result<Coord, InputError> {
    let mut input = String::new();
    let raw = match io::stdin().read_line(&mut input) {
        Ok(_n) => input.trim(),
        Err(error) => {
            return Err(InputError::IOError {
                error: error.to_string(),
            })
        }
    };

    parse_coord(raw)
}

pub fn parse_coord(raw: &str) -> Result<Coord, InputError> {
    let caps = MOVE_RE.captures(raw).ok_or_else(|| InputError::InvalidInput {
        input: raw.to_string(),
    })?;

    let row = caps[1].parse().map_err(|_| InputError::InvalidInput {
        input: raw.to_string(),
    })?;
    let col = caps[2].parse().map_err(|_| InputError::InvalidInput {
        input: raw.to_string(),
    })?;

    Ok(Coord::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_space_and_comma_separated_coordinates() {
        assert_eq!(parse_coord("0 2").unwrap(), Coord::new(0, 2));
        assert_eq!(parse_coord("1,1").unwrap(), Coord::new(1, 1));
        assert_eq!(parse_coord("10 3").unwrap(), Coord::new(10, 3));
    }

    #[test]
    fn test_rejects_malformed_input() {
        for input in &["", "a b", "1", "1 2 3", "-1 0", "1.5 2"] {
            assert!(matches!(
                parse_coord(input),
                Err(InputError::InvalidInput { .. })
            ));
        }
    }
}
