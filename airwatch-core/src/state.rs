//! Sensor measurement state machine
//!
//! ```text
//! Idle ──start──▶ Measuring ──ready──▶ Ready
//!                   ▲                    │
//!                   └───────read─────────┘
//!
//! any ──ready──▶ Ready
//! any ──stop───▶ Idle
//! ```
//!
//! Periodic mode keeps producing data on the device after a read, so a
//! successful read returns to `Measuring`, not `Idle`.
//!
//! A positive ready check counts from any state: the device may already be
//! in periodic mode (warm reset, start command lost on the bus) without the
//! driver having seen an acknowledged start.

/// Driver-side view of the sensor's measurement mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorState {
    /// Periodic measurement not started (power-on state)
    #[default]
    Idle,
    /// Periodic measurement running, no unread data known
    Measuring,
    /// A ready check reported a measurement waiting to be read
    Ready,
}

/// Inputs to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorEvent {
    /// Start command acknowledged
    Started,
    /// Ready check completed with the given result
    ReadyChecked(bool),
    /// Measurement read and decoded
    MeasurementRead,
    /// Stop command acknowledged
    Stopped,
}

impl SensorState {
    /// Whether a measurement read is valid now
    pub fn can_read(&self) -> bool {
        matches!(self, SensorState::Ready)
    }

    /// Whether periodic measurement is running
    pub fn is_measuring(&self) -> bool {
        !matches!(self, SensorState::Idle)
    }

    /// Process an event and return the next state
    ///
    /// Events that make no sense in the current state leave it unchanged.
    pub fn transition(self, event: SensorEvent) -> Self {
        use SensorEvent::*;
        use SensorState::*;

        match (self, event) {
            (_, Stopped) => Idle,
            // Restarting a running sensor keeps any pending ready flag
            (Idle, Started) => Measuring,
            (_, ReadyChecked(true)) => Ready,
            (Ready, ReadyChecked(false)) => Ready,
            (Ready, MeasurementRead) => Measuring,
            (state, _) => state,
        }
    }
}
