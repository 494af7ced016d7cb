// life_engine.rs - Outcome classification over whole runs

use conway::{LifeConfig, LifeEngine, LifeOutcome, LifeState, LifeStep};
use grid::NodeColor;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn engine_with(cells: &[(i32, i32)]) -> LifeEngine {
    init_logging();
    let mut engine = LifeEngine::new(LifeConfig::default()).unwrap();
    for &(x, y) in cells {
        assert!(engine.grid_mut().add_node(x, y, NodeColor::Plain));
    }
    engine.start().unwrap();
    engine
}

#[test]
fn blinker_is_reported_oscillating() {
    let mut engine = engine_with(&[(25, 24), (25, 25), (25, 26)]);

    assert_eq!(engine.step(), LifeStep::Advanced { generation: 1, population: 3 });
    assert_eq!(
        engine.step(),
        LifeStep::Finished(LifeOutcome::Oscillating { generation: 2 })
    );
    assert_eq!(engine.state(), LifeState::Oscillating);
    assert!(engine.state().is_terminal());
}

#[test]
fn blinker_runs_on_without_oscillation_detection() {
    let mut engine = engine_with(&[(25, 24), (25, 25), (25, 26)]);
    engine.set_detect_oscillations(false);

    for generation in 1..=6 {
        assert_eq!(engine.step(), LifeStep::Advanced { generation, population: 3 });
    }
    assert_eq!(engine.state(), LifeState::Running);
}

#[test]
fn block_is_reported_stabilized() {
    let mut engine = engine_with(&[(10, 10), (10, 11), (11, 10), (11, 11)]);

    let step = engine.step();
    assert_eq!(step, LifeStep::Finished(LifeOutcome::Stabilized { generation: 1 }));
    assert_eq!(engine.state(), LifeState::Stabilized);
    // Nothing was advanced
    assert_eq!(engine.stats().generation, 0);
    assert_eq!(engine.grid().len(), 4);
}

#[test]
fn lone_cell_goes_extinct() {
    let mut engine = engine_with(&[(20, 20)]);

    assert_eq!(engine.step(), LifeStep::Finished(LifeOutcome::Extinct { generation: 1 }));
    assert_eq!(engine.state(), LifeState::Extinct);
}

#[test]
fn first_step_never_reports_oscillation() {
    // Two isolated cells die; no state one step back exists yet
    let mut engine = engine_with(&[(5, 5), (30, 30)]);

    assert_eq!(engine.step(), LifeStep::Finished(LifeOutcome::Extinct { generation: 1 }));
}

#[test]
fn outcome_messages() {
    assert_eq!(
        LifeOutcome::Stabilized { generation: 4 }.to_string(),
        "Simulation stabilized at generation: 4"
    );
    assert_eq!(
        LifeOutcome::Extinct { generation: 1 }.to_string(),
        "Simulation ended with total elimination at generation: 1"
    );
}

#[test]
fn lone_border_cell_goes_extinct() {
    let mut engine = engine_with(&[(0, 20)]);
    assert_eq!(engine.step(), LifeStep::Finished(LifeOutcome::Extinct { generation: 1 }));
    assert_eq!(engine.state(), LifeState::Extinct);
}

#[test]
fn border_line_does_not_survive() {
    let mut engine = engine_with(&[(0, 19), (0, 20), (0, 21)]);

    assert_eq!(engine.step(), LifeStep::Advanced { generation: 1, population: 1 });
    assert!(engine.grid().contains(1, 20));
    assert!(!engine.grid().contains(0, 20));
    assert_eq!(engine.step(), LifeStep::Finished(LifeOutcome::Extinct { generation: 2 }));
}

#[test]
fn reset_to_previous_state_restores_starting_grid() {
    let cells = [(24, 25), (24, 26), (25, 24), (25, 25), (26, 25)];
    let mut engine = engine_with(&cells);

    for _ in 0..10 {
        engine.step();
    }
    assert_eq!(engine.stats().generation, 10);

    assert!(engine.reset_to_previous_state());
    assert_eq!(engine.state(), LifeState::NotStarted);
    assert_eq!(engine.stats().generation, 0);
    assert_eq!(engine.stats().population, 5);
    for (x, y) in cells {
        assert!(engine.grid().contains(x, y));
    }
    assert_eq!(engine.grid().len(), 5);
}

#[test]
fn reset_clears_grid_and_stats() {
    let mut engine = engine_with(&[(25, 24), (25, 25), (25, 26)]);
    engine.step();

    engine.reset();

    assert_eq!(engine.state(), LifeState::NotStarted);
    assert!(engine.grid().is_empty());
    assert_eq!(engine.stats().generation, 0);
    assert!(!engine.reset_to_previous_state());
}

#[test]
fn snapshot_reflects_last_completed_step() {
    let mut engine = engine_with(&[(25, 24), (25, 25), (25, 26)]);
    engine.step();

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.state, LifeState::Running);
    assert_eq!(snapshot.dimension, 50);
    assert_eq!(snapshot.stats.generation, 1);
    let points: Vec<(i32, i32)> = snapshot.nodes.iter().map(|n| (n.x, n.y)).collect();
    assert_eq!(points, vec![(24, 25), (25, 25), (26, 25)]);
}
