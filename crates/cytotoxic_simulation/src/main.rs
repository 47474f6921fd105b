//! Headless симуляция Cytotoxic Cataclysm
//!
//! Гоняет world loop без окна/рендера/звука. Необязательный аргумент:
//! путь к JSON с GameConfig.

use cytotoxic_simulation::{log_error, GameConfig, Simulation};

const SEED: u64 = 42;
const FRAME_COUNT: usize = 1000;
const FRAME_MS: f32 = 16.6;
/// Каждые N кадров: случайный эффект (в игре это попадание в cyst)
const EFFECT_EVERY_FRAMES: usize = 120;

fn main() {
    let config = match std::env::args().nth(1) {
        Some(path) => match GameConfig::from_json_file(&path) {
            Ok(config) => config,
            Err(err) => {
                log_error(&format!("{}", err));
                eprintln!("Config error: {}", err);
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    println!("Starting Cytotoxic headless simulation (seed: {})", SEED);
    let mut simulation = Simulation::with_config(SEED, config);

    for frame in 0..FRAME_COUNT {
        if frame % EFFECT_EVERY_FRAMES == 0 {
            let outcome = simulation.apply_random_effect();
            println!("Frame {}: {:?}", frame, outcome);
        }

        let elapsed_ms = FRAME_MS * simulation.game_speed();
        simulation.step(elapsed_ms);
        simulation.handle_collisions();

        let cues = simulation.drain_sound_cues();
        if !cues.is_empty() {
            println!("Frame {}: sounds {:?}", frame, cues);
        }

        if frame % 100 == 0 {
            let entity_count = simulation.world().entities().len();
            println!("Frame {}: {} entities", frame, entity_count);
        }
    }

    println!("Simulation complete!");
}
