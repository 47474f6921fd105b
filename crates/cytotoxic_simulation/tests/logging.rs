//! Logger integration test
//!
//! Отдельный test binary: global logger один на процесс, здесь его
//! подменяет MemoryLogger (create_headless_app уже не перезапишет).

use cytotoxic_simulation::logger::{set_log_level, set_logger, LogLevel, MemoryLogger};
use cytotoxic_simulation::{start_entity_death, Simulation};

#[test]
fn test_restart_logs_entity_census() {
    let logger = MemoryLogger::default();
    set_logger(Box::new(logger.clone()));
    set_log_level(LogLevel::Debug);

    let mut simulation = Simulation::new(42);
    let player = simulation.player().expect("player must exist");

    let lines = logger.lines();
    assert!(lines.iter().any(|line| line.contains("Entity census (before restart)")));
    assert!(lines.iter().any(|line| line.contains("Entity census (after cleanup)")));
    assert!(lines
        .iter()
        .any(|line| line.starts_with("[INFO]") && line.contains("Simulation ready (seed: 42)")));

    // Restart по death timer тоже оставляет census
    let before = logger.lines().len();
    start_entity_death(simulation.world_mut(), player);
    simulation.step(3001.0);

    let new_lines = &logger.lines()[before..];
    assert!(new_lines.iter().any(|line| line.contains("Death timer expired")));
    assert!(new_lines
        .iter()
        .any(|line| line.starts_with("[INFO]") && line.contains("Restarting")));
    assert!(new_lines
        .iter()
        .any(|line| line.contains("Entity census (before restart)")));
}
