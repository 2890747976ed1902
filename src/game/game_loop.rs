use crate::board::Player;
use crate::game::engine::{Engine, EngineConfig, GameEnding};
use crate::input_handler::parse_move_input;

/// Runs a human-vs-engine game on the console until the game ends.
pub fn play_computer(config: EngineConfig, human_mark: Player) {
    let engine = &mut Engine::with_config(config);

    println!("{}", engine.board());

    loop {
        if let Some(ending) = engine.check_game_over() {
            match ending {
                GameEnding::Win(player) => println!("{} wins!", player),
                GameEnding::Draw => println!("draw!"),
            }
            break;
        }

        if engine.to_move() == human_mark {
            println!("Your move as `row col`:");
            let coord = match parse_move_input() {
                Ok(coord) => coord,
                Err(msg) => {
                    println!("{}", msg);
                    continue;
                }
            };
            if let Err(error) = engine.make_move(coord) {
                println!("error: {}", error);
                continue;
            }
        } else {
            match engine.make_engine_move() {
                Ok(coord) => {
                    let stats = engine.get_search_stats().unwrap();
                    println!(
                        "Engine ({}) plays {} (score {}, nodes {}, took {:?})",
                        human_mark.opposite(),
                        coord,
                        stats.score,
                        stats.nodes_visited,
                        stats.last_search_duration
                    );
                }
                Err(error) => {
                    println!("error: {}", error);
                    break;
                }
            }
        }

        println!("{}", engine.board());
    }
}
