// controller.rs - Runs an engine's step loop on a background task

use crate::engines::{Phase, Simulation, Step};
use crate::error::{ControllerError, Result};
use crate::event::SimulationEvent;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, broadcast};
use tokio::task::JoinHandle;

const EVENT_CAPACITY: usize = 256;

pub type EngineEvent<S> = SimulationEvent<<S as Simulation>::Snapshot, <S as Simulation>::Outcome>;

struct Worker {
    handle : JoinHandle<()>,
    wake   : Arc<Notify>,   // Cuts the inter-step sleep short
}

/// Owns one engine and at most one loop task driving it.
///
/// Every step runs under the engine lock, so `snapshot` and `with_engine`
/// only ever observe whole steps. Pause and reset flip the engine state
/// under the same lock, wake the loop and wait for it to exit.
pub struct SimulationController<S: Simulation> {
    engine : Arc<Mutex<S>>,
    events : broadcast::Sender<EngineEvent<S>>,
    worker : Option<Worker>,
}

impl<S: Simulation> SimulationController<S> {
    pub fn new(engine: S) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self { engine: Arc::new(Mutex::new(engine)), events, worker: None }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent<S>> {
        self.events.subscribe()
    }

    /// Runs `edit` between steps.
    pub fn with_engine<R>(&self, edit: impl FnOnce(&mut S) -> R) -> R {
        edit(&mut self.engine.lock())
    }

    pub fn snapshot(&self) -> S::Snapshot {
        self.engine.lock().snapshot()
    }

    pub fn state(&self) -> Phase {
        self.engine.lock().phase()
    }

    /// True while a loop task exists that has not yet exited.
    pub fn is_active(&self) -> bool {
        self.worker.as_ref().is_some_and(|worker| !worker.handle.is_finished())
    }

    pub async fn start(&mut self) -> Result<()> {
        if self.worker.as_ref().is_some_and(|worker| worker.handle.is_finished()) {
            self.join().await;
        }
        if self.worker.is_some() {
            return Err(ControllerError::AlreadyActive);
        }

        {
            let mut engine = self.engine.lock();
            if matches!(engine.phase(), Phase::Running | Phase::Paused) {
                return Err(ControllerError::AlreadyActive);
            }
            engine.begin().map_err(ControllerError::Configuration)?;
        }

        self.spawn_worker();
        Ok(())
    }

    /// Returns once the in-flight step has completed and the loop has exited.
    pub async fn pause(&mut self) -> Result<()> {
        if !self.engine.lock().pause() {
            return Err(ControllerError::NotRunning);
        }

        self.stop_worker().await;
        log::info!("simulation paused");
        let _ = self.events.send(SimulationEvent::Paused);
        Ok(())
    }

    pub async fn resume(&mut self) -> Result<()> {
        if !self.engine.lock().resume() {
            return Err(ControllerError::NotPaused);
        }

        log::info!("simulation resumed");
        let _ = self.events.send(SimulationEvent::Resumed);
        self.spawn_worker();
        Ok(())
    }

    /// Stops any loop and returns the engine to its not-started state.
    pub async fn reset(&mut self) {
        self.engine.lock().reset();
        self.stop_worker().await;
        let _ = self.events.send(SimulationEvent::Reset);
    }

    /// Waits for the loop to exit on its own. Re-raises a panic from the loop.
    pub async fn join(&mut self) {
        if let Some(worker) = self.worker.take() {
            await_worker(worker.handle).await;
        }
    }

    fn spawn_worker(&mut self) {
        let wake = Arc::new(Notify::new());
        let handle = tokio::spawn(run_loop(
            Arc::clone(&self.engine),
            self.events.clone(),
            Arc::clone(&wake),
        ));
        self.worker = Some(Worker { handle, wake });
    }

    async fn stop_worker(&mut self) {
        if let Some(worker) = self.worker.take() {
            worker.wake.notify_one();
            await_worker(worker.handle).await;
        }
    }
}

impl<S: Simulation> Drop for SimulationController<S> {
    fn drop(&mut self) {
        if let Some(worker) = self.worker.take() {
            worker.handle.abort();
        }
    }
}

async fn await_worker(handle: JoinHandle<()>) {
    if let Err(err) = handle.await {
        if err.is_panic() {
            std::panic::resume_unwind(err.into_panic());
        }
    }
}

/// Steps while the engine stays running. The state check at the top of each
/// iteration is the only cancellation point.
async fn run_loop<S: Simulation>(
    engine: Arc<Mutex<S>>,
    events: broadcast::Sender<EngineEvent<S>>,
    wake: Arc<Notify>,
) {
    loop {
        let (event, delay) = {
            let mut engine = engine.lock();
            if engine.phase() != Phase::Running {
                break;
            }
            match engine.advance() {
                Step::Continue => (SimulationEvent::Stepped(engine.snapshot()), engine.step_delay()),
                Step::Finished(outcome) => (SimulationEvent::Finished(outcome), Duration::ZERO),
            }
        };

        let finished = event.is_finished();
        let _ = events.send(event);
        if finished {
            break;
        }

        if delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                _ = wake.notified() => {}
            }
        }
    }

    log::debug!("simulation loop exited");
}
