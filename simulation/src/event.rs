// event.rs - Notifications published by a running controller

/// Sent on the controller's broadcast channel. `Stepped` follows every
/// completed step; `Finished` is the last event of a run.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationEvent<Snapshot, Outcome> {
    Stepped(Snapshot),
    Finished(Outcome),
    Paused,
    Resumed,
    Reset,
}

impl<Snapshot, Outcome> SimulationEvent<Snapshot, Outcome> {
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }
}
