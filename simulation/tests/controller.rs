// controller.rs - Background step loop driven through SimulationController

use conway::{LifeConfig, LifeEngine, LifeOutcome, find_pattern};
use grid::Point;
use pathfinder::{PathConfig, PathEngine, PathOutcome};
use simulation::{
    ControllerError, LifeController, PathController, Phase, SimulationEvent,
};
use std::time::Duration;
use tokio::sync::broadcast::{Receiver, error::RecvError};
use tokio::time::Instant;

fn life_engine(cells: &[(i32, i32)]) -> LifeEngine {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut engine = LifeEngine::new(LifeConfig::default()).unwrap();
    for &(x, y) in cells {
        engine.grid_mut().toggle_node(x, y);
    }
    engine
}

fn glider_engine() -> LifeEngine {
    let mut engine = life_engine(&[]);
    engine.load_state(&find_pattern("glider").unwrap().to_state());
    engine
}

async fn next_event<S: Clone, O: Clone>(events: &mut Receiver<SimulationEvent<S, O>>) -> SimulationEvent<S, O> {
    loop {
        match events.recv().await {
            Ok(event) => return event,
            Err(RecvError::Lagged(_)) => continue,
            Err(RecvError::Closed) => panic!("controller dropped its event channel"),
        }
    }
}

async fn next_step<S: Clone, O: Clone>(events: &mut Receiver<SimulationEvent<S, O>>) -> S {
    loop {
        if let SimulationEvent::Stepped(snapshot) = next_event(events).await {
            return snapshot;
        }
    }
}

#[tokio::test(start_paused = true)]
async fn block_run_ends_with_stabilized_event() {
    let mut controller = LifeController::new(life_engine(&[(10, 10), (10, 11), (11, 10), (11, 11)]));
    let mut events = controller.subscribe();

    controller.start().await.unwrap();
    assert_eq!(
        next_event(&mut events).await,
        SimulationEvent::Finished(LifeOutcome::Stabilized { generation: 1 })
    );

    controller.join().await;
    assert_eq!(controller.state(), Phase::Finished);
    assert!(!controller.is_active());

    // A finished run may be started again
    controller.start().await.unwrap();
    assert!(next_event(&mut events).await.is_finished());
}

#[tokio::test(start_paused = true)]
async fn empty_grid_is_rejected() {
    let mut controller = LifeController::new(life_engine(&[]));

    let err = controller.start().await.unwrap_err();
    assert!(matches!(err, ControllerError::Configuration(_)));
    assert_eq!(err.to_string(), "cannot start simulation: place at least one node");
    assert_eq!(controller.state(), Phase::NotStarted);
    assert!(!controller.is_active());
}

#[tokio::test(start_paused = true)]
async fn pause_resume_and_reset() {
    let mut controller = LifeController::new(glider_engine());
    let mut events = controller.subscribe();

    controller.start().await.unwrap();
    next_step(&mut events).await;
    next_step(&mut events).await;

    controller.pause().await.unwrap();
    assert_eq!(controller.state(), Phase::Paused);
    assert!(!controller.is_active());
    let paused_at = controller.snapshot().stats.generation;
    assert!(paused_at >= 2);
    assert!(matches!(controller.pause().await, Err(ControllerError::NotRunning)));

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(controller.snapshot().stats.generation, paused_at);

    let mut events = controller.subscribe();
    controller.resume().await.unwrap();
    assert_eq!(next_event(&mut events).await, SimulationEvent::Resumed);
    assert_eq!(next_step(&mut events).await.stats.generation, paused_at + 1);

    controller.reset().await;
    assert_eq!(controller.state(), Phase::NotStarted);
    assert!(controller.snapshot().nodes.is_empty());
    assert!(matches!(controller.resume().await, Err(ControllerError::NotPaused)));
    assert!(!controller.is_active());
}

#[tokio::test(start_paused = true)]
async fn second_start_is_rejected() {
    let mut controller = LifeController::new(glider_engine());

    controller.start().await.unwrap();
    assert!(matches!(controller.start().await, Err(ControllerError::AlreadyActive)));

    controller.pause().await.unwrap();
    assert!(matches!(controller.start().await, Err(ControllerError::AlreadyActive)));

    controller.reset().await;
    assert_eq!(controller.state(), Phase::NotStarted);
}

#[tokio::test(start_paused = true)]
async fn speed_change_applies_on_next_sleep() {
    let mut controller = LifeController::new(glider_engine());
    let mut events = controller.subscribe();

    controller.start().await.unwrap();
    next_step(&mut events).await;
    assert_eq!(controller.with_engine(|engine| engine.set_iterations_per_second(1)), 1);

    next_step(&mut events).await;
    let before = Instant::now();
    next_step(&mut events).await;
    assert!(before.elapsed() >= Duration::from_secs(1));

    controller.reset().await;
}

#[tokio::test(start_paused = true)]
async fn path_run_publishes_every_expansion() {
    let config = PathConfig { show_steps: false, ..PathConfig::default() };
    let mut controller = PathController::new(PathEngine::new(config).unwrap());
    let mut events = controller.subscribe();

    controller.start().await.unwrap();

    let mut stepped = 0;
    let outcome = loop {
        match next_event(&mut events).await {
            SimulationEvent::Stepped(_) => stepped += 1,
            SimulationEvent::Finished(outcome) => break outcome,
            other => panic!("unexpected event {other:?}"),
        }
    };
    controller.join().await;

    let PathOutcome::Found { path, expansions, .. } = outcome else {
        panic!("expected a path");
    };
    assert_eq!(path.len(), 49);
    assert_eq!(path.first(), Some(&Point::new(0, 0)));
    assert_eq!(path.last(), Some(&Point::new(24, 24)));
    assert_eq!(stepped, expansions - 1);
    assert_eq!(controller.state(), Phase::Finished);
    assert_eq!(controller.snapshot().path.len(), 49);
}

#[tokio::test(start_paused = true)]
async fn path_without_start_is_rejected() {
    let mut engine = PathEngine::new(PathConfig::default()).unwrap();
    engine.remove_node(0, 0);
    let mut controller = PathController::new(engine);

    let err = controller.start().await.unwrap_err();
    assert_eq!(err.to_string(), "cannot start simulation: start node not set");

    controller.with_engine(|engine| engine.place_start(3, 3));
    controller.start().await.unwrap();
    controller.join().await;
    assert_eq!(controller.state(), Phase::Finished);
}
