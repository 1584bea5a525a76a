//! The door controller: state tracker and command surface.
//!
//! This module ties the sensor reader, relay actuator, and operation timer
//! together behind the five operations an accessory adapter calls:
//! construction, `request_target`, `current_position`, `current_target`, and
//! `obstruction`.

use crate::{
    actuator::RelayActuator, policy::CompletionPolicy, sensors::LimitSensors,
    timer::OperationTimer,
};
use portal_core::{DoorConfig, DoorPosition, Result, TargetState};
use portal_hardware::{DigitalInput, DigitalOutput};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Mutable controller state, guarded by a single lock.
///
/// Invariant: `position` at a limit (`Open` or `Closed`) implies the
/// operation timer is not pending. Every write site below preserves it.
#[derive(Debug)]
struct TrackedState {
    position: DoorPosition,
    target: TargetState,
    /// No sensor backs this flag; it stays at its default. The accessor
    /// contract is preserved so an adapter can still report it.
    obstruction: bool,
    timer: OperationTimer,
}

/// Garage door motion controller.
///
/// An owned instance per physical door: it holds its hardware handles and
/// timer exclusively, so multiple independent doors are just multiple
/// controllers. All state mutation, whether from the command path, a status
/// query, or the timer completion task, goes through one `tokio::sync::Mutex`.
///
/// The relay pulse blocks its caller for the pulse width and runs outside
/// that lock; `request_target` therefore must not be awaited from a context
/// whose blocking would stall time-sensitive work.
///
/// # Examples
///
/// ```
/// use portal_controller::DoorController;
/// use portal_core::{DoorConfig, DoorPosition, TargetState};
/// use portal_hardware::mock::{MockInput, MockRelay};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> portal_core::Result<()> {
///     let (relay, _relay_handle) = MockRelay::new("door relay");
///     let (open_input, _open) = MockInput::new("open limit");
///     let (closed_input, _closed) = MockInput::new("closed limit");
///
///     // Neither sensor active at boot: documented default is Closed
///     let controller =
///         DoorController::new(DoorConfig::default(), relay, open_input, closed_input).await?;
///     assert_eq!(controller.current_position().await?, DoorPosition::Closed);
///     assert_eq!(controller.current_target().await, TargetState::Closed);
///     assert!(!controller.obstruction().await);
///
///     Ok(())
/// }
/// ```
pub struct DoorController<R, I> {
    state: Arc<Mutex<TrackedState>>,
    sensors: Arc<LimitSensors<I>>,
    actuator: Mutex<RelayActuator<R>>,
    config: DoorConfig,
    policy: CompletionPolicy,
}

impl<R, I> DoorController<R, I>
where
    R: DigitalOutput,
    I: DigitalInput + 'static,
{
    /// Create a controller with the default (optimistic) completion policy.
    ///
    /// Performs one sensor read to seed the initial state. A confirmed limit
    /// position seeds both `position` and `target` consistently; if neither
    /// sensor is active at boot, the controller defaults to
    /// `Closed`/`target = Closed` rather than leaving the state undefined.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial sensor read fails. Configuration
    /// validity is established by [`DoorConfig`] construction, so a
    /// controller that exists is fully initialized.
    pub async fn new(config: DoorConfig, relay: R, open_input: I, closed_input: I) -> Result<Self> {
        Self::with_policy(
            config,
            CompletionPolicy::default(),
            relay,
            open_input,
            closed_input,
        )
        .await
    }

    /// Create a controller with an explicit completion policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial sensor read fails.
    pub async fn with_policy(
        config: DoorConfig,
        policy: CompletionPolicy,
        relay: R,
        open_input: I,
        closed_input: I,
    ) -> Result<Self> {
        let sensors = Arc::new(LimitSensors::new(open_input, closed_input));

        let (position, target) = match sensors.read_position().await? {
            Some(confirmed) => (DoorPosition::from(confirmed), confirmed.as_target()),
            // Boot default when the door is between limits: report Closed
            None => (DoorPosition::Closed, TargetState::Closed),
        };

        info!(
            relay = %config.relay_pin(),
            open_sensor = %config.open_sensor_pin(),
            closed_sensor = %config.closed_sensor_pin(),
            %position,
            "Door controller initialized"
        );

        Ok(Self {
            state: Arc::new(Mutex::new(TrackedState {
                position,
                target,
                obstruction: false,
                timer: OperationTimer::new(),
            })),
            sensors,
            actuator: Mutex::new(RelayActuator::new(relay)),
            config,
            policy,
        })
    }

    /// Command the door toward a target state.
    ///
    /// Requesting the already-current target is a logged no-op: no pulse, no
    /// timer rearm. Otherwise the target and in-transit position are
    /// recorded, the relay is pulsed (blocking this caller for the pulse
    /// width), and the operation timer is (re)started for the travel
    /// duration.
    ///
    /// A second, opposite command while an operation is still running pulses
    /// the relay again, re-targets, and resets the timer. The physical
    /// opener may interpret that second press as "stop" or "reverse"; this
    /// controller does not disambiguate.
    ///
    /// # Errors
    ///
    /// Returns an error if a relay write fails. The target and in-transit
    /// position are already recorded at that point; the next
    /// [`current_position`](Self::current_position) heals from sensor truth.
    pub async fn request_target(&self, target: TargetState) -> Result<()> {
        {
            let mut state = self.state.lock().await;
            if state.target == target {
                debug!(%target, "Already at target state");
                return Ok(());
            }

            state.target = target;
            state.position = target.transit_position();
            // A pending completion belongs to the superseded command; it must
            // not fire while the relay pulse below is in flight.
            state.timer.cancel();
            info!(%target, position = %state.position, "Target state requested");
        }

        // Blocks for the pulse width; runs outside the state lock so timer
        // expiries and status queries are never stalled behind it.
        self.actuator.lock().await.pulse().await?;

        let mut state = self.state.lock().await;
        let epoch = state.timer.rearm();
        let task = tokio::spawn(resolve_completion(
            Arc::clone(&self.state),
            Arc::clone(&self.sensors),
            self.policy,
            self.config.travel_duration(),
            epoch,
        ));
        state.timer.attach(task);
        Ok(())
    }

    /// Get the current door position, corrected against sensor truth.
    ///
    /// Re-reads the limit switches before answering: a confirmed position
    /// that disagrees with the tracked value replaces it and cancels any
    /// pending timer completion. Position queries are therefore self-healing
    /// even when the timer-based inference drifted.
    ///
    /// # Errors
    ///
    /// Returns an error if a sensor read fails.
    pub async fn current_position(&self) -> Result<DoorPosition> {
        let confirmed = self.sensors.read_position().await?;

        let mut state = self.state.lock().await;
        if let Some(confirmed) = confirmed {
            let confirmed = DoorPosition::from(confirmed);
            if state.position != confirmed {
                debug!(
                    tracked = %state.position,
                    %confirmed,
                    "Correcting tracked position from sensors"
                );
                state.position = confirmed;
                // At a limit, no completion may stay pending
                state.timer.cancel();
            }
        }
        Ok(state.position)
    }

    /// Get the last commanded target state. No side effects.
    pub async fn current_target(&self) -> TargetState {
        self.state.lock().await.target
    }

    /// Get the obstruction flag.
    ///
    /// Always `false` in this design: no sensor backs the flag. The accessor
    /// exists so an adapter can report the characteristic.
    pub async fn obstruction(&self) -> bool {
        self.state.lock().await.obstruction
    }

    /// The configuration this controller was built with.
    pub fn config(&self) -> &DoorConfig {
        &self.config
    }

    /// The completion policy in effect.
    pub fn policy(&self) -> CompletionPolicy {
        self.policy
    }
}

/// Timer completion task: sleep out the travel duration, then resolve the
/// final position per the completion policy.
///
/// The epoch check under the state lock makes this apply at most once per
/// arm; a task superseded by a later command or a sensor correction returns
/// without touching state.
async fn resolve_completion<I: DigitalInput + 'static>(
    state: Arc<Mutex<TrackedState>>,
    sensors: Arc<LimitSensors<I>>,
    policy: CompletionPolicy,
    travel: Duration,
    epoch: u64,
) {
    tokio::time::sleep(travel).await;

    let confirmed = match policy {
        CompletionPolicy::Optimistic => None,
        CompletionPolicy::SensorConfirmed { grace } => {
            let mut read = match sensors.read_position().await {
                Ok(read) => read,
                Err(error) => {
                    warn!(%error, "Sensor read failed at completion");
                    None
                }
            };
            if read.is_none() {
                tokio::time::sleep(grace).await;
                read = match sensors.read_position().await {
                    Ok(read) => read,
                    Err(error) => {
                        warn!(%error, "Sensor read failed after grace period");
                        None
                    }
                };
            }
            Some(read)
        }
    };

    let mut state = state.lock().await;
    if !state.timer.try_complete(epoch) {
        // Superseded by a later command or a sensor correction
        return;
    }

    state.position = match confirmed {
        // Optimistic: the commanded operation is assumed to have succeeded
        None => state.target.final_position(),
        // Sensor truth wins, even against the target
        Some(Some(confirmed)) => DoorPosition::from(confirmed),
        // Strict policy, no limit reached within the grace period
        Some(None) => DoorPosition::Stopped,
    };
    info!(position = %state.position, "Operation completed");
}
