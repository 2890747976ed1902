use std::time::SystemTime;

use crate::board::{Board, Coord};
use crate::grid_search::{depth_limited_search, minimax, minimax_with_pruning, LineEvaluator};
use crate::search::{NodeCounter, SearchError, SearchOutcome};

// Exhaustive minimax on anything larger than 3x3 is intractable.
const MAX_EXHAUSTIVE_SIZE: usize = 3;

/// Measures node counts and wall time for each search variant on `board`,
/// printing one line per variant.
pub fn run_search_benchmark(board: &Board, depth: Option<u32>) -> Result<(), SearchError> {
    let mut counter = NodeCounter::new();

    if board.size() <= MAX_EXHAUSTIVE_SIZE {
        let (outcome, duration) = timed(|| minimax(board, &mut counter))?;
        report("minimax", counter.count(), duration, &outcome);
    } else {
        println!("minimax: skipped ({0}x{0} board)", board.size());
    }

    let (outcome, duration) = timed(|| minimax_with_pruning(board, &mut counter, false))?;
    report("alpha-beta (no ordering)", counter.count(), duration, &outcome);

    let (outcome, duration) = timed(|| minimax_with_pruning(board, &mut counter, true))?;
    report("alpha-beta (ordered)", counter.count(), duration, &outcome);

    if let Some(depth) = depth {
        let (outcome, duration) =
            timed(|| depth_limited_search(board, depth, &LineEvaluator, &mut counter, true))?;
        let label = format!("depth-limited (depth {})", depth);
        report(&label, counter.count(), duration, &outcome);
    }

    Ok(())
}

fn timed<F>(search: F) -> Result<(SearchOutcome<Coord>, f64), SearchError>
where
    F: FnOnce() -> Result<SearchOutcome<Coord>, SearchError>,
{
    let starting_time = SystemTime::now();
    let outcome = search()?;
    let duration = SystemTime::now()
        .duration_since(starting_time)
        .unwrap_or_default();
    Ok((outcome, duration.as_secs_f64()))
}

fn report(label: &str, nodes: u64, seconds: f64, outcome: &SearchOutcome<Coord>) {
    let action = outcome
        .action
        .map_or("-".to_string(), |coord| coord.to_string());
    let nodes_per_second = nodes as f64 / seconds.max(f64::EPSILON);
    println!(
        "{}: nodes {}, time {:.4}s ({:.0} nodes/s), value {}, action {}",
        label, nodes, seconds, nodes_per_second, outcome.value, action
    );
}
