//! Periodic recompute of the treatment windows.
//!
//! A [`WindowMonitor`] owns at most one running refresh task. Changing the
//! inputs cancels that task and starts a new one; stopping or dropping the
//! monitor cancels it, so no timer outlives the view that asked for it.

use std::sync::Arc;

use jiff::Timestamp;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info, warn};

use crate::config::WindowConfig;
use crate::error::WindowError;
use crate::incident::WindowInputs;
use crate::window::{TreatmentWindows, UrgencyTier, compute_windows};

/// Source of the current time.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> Timestamp;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Latest computation result, as published to subscribers.
pub type WindowUpdate = Result<TreatmentWindows, WindowError>;

pub struct WindowMonitor {
    config: WindowConfig,
    clock: Arc<dyn Clock>,
    sender: Arc<watch::Sender<Option<WindowUpdate>>>,
    inputs: Option<WindowInputs>,
    task: Option<JoinHandle<()>>,
}

impl WindowMonitor {
    pub fn new(config: WindowConfig, clock: Arc<dyn Clock>) -> Result<Self, WindowError> {
        config.validate()?;
        let (sender, _) = watch::channel(None);
        Ok(Self {
            config,
            clock,
            sender: Arc::new(sender),
            inputs: None,
            task: None,
        })
    }

    pub fn with_system_clock(config: WindowConfig) -> Result<Self, WindowError> {
        Self::new(config, Arc::new(SystemClock))
    }

    /// Receive every recompute. The value is `None` until the first one.
    pub fn subscribe(&self) -> watch::Receiver<Option<WindowUpdate>> {
        self.sender.subscribe()
    }

    pub fn latest(&self) -> Option<WindowUpdate> {
        self.sender.borrow().clone()
    }

    pub fn inputs(&self) -> Option<&WindowInputs> {
        self.inputs.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Start tracking `inputs`, replacing any previous refresh task.
    ///
    /// Setting the same inputs again while a task is running is a no-op.
    /// Fails without touching the current task when called outside a Tokio
    /// runtime.
    pub fn set_inputs(&mut self, inputs: WindowInputs) -> Result<(), WindowError> {
        if self.inputs.as_ref() == Some(&inputs) && self.is_running() {
            return Ok(());
        }
        let runtime = Handle::try_current().map_err(|e| WindowError::NoRuntime(e.to_string()))?;
        self.stop();

        debug!(
            incident_date = %inputs.incident_date,
            incident_time = %inputs.incident_time,
            "starting treatment window refresh"
        );
        let task = runtime.spawn(refresh_loop(
            inputs.clone(),
            self.config.clone(),
            Arc::clone(&self.clock),
            Arc::clone(&self.sender),
        ));
        self.inputs = Some(inputs);
        self.task = Some(task);
        Ok(())
    }

    /// Cancel the refresh task, if any. The last published value is kept.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("treatment window refresh stopped");
        }
    }
}

impl Drop for WindowMonitor {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn refresh_loop(
    inputs: WindowInputs,
    config: WindowConfig,
    clock: Arc<dyn Clock>,
    sender: Arc<watch::Sender<Option<WindowUpdate>>>,
) {
    // A malformed incident time cannot fix itself; report it once and stop.
    let incident = match inputs.incident(&config) {
        Ok(incident) => incident,
        Err(e) => {
            warn!(error = %e, "cannot track treatment windows");
            sender.send_replace(Some(Err(e)));
            return;
        }
    };

    let mut ticker = interval(config.refresh_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last_tier: Option<UrgencyTier> = None;

    loop {
        ticker.tick().await;
        let update = compute_windows(
            incident,
            clock.now(),
            inputs.pep_administered,
            inputs.ec_administered,
            &config,
        );

        match &update {
            Ok(windows) => {
                if last_tier != Some(windows.pep_urgency) {
                    info!(
                        tier = ?windows.pep_urgency,
                        hours_elapsed = windows.hours_elapsed,
                        pep_administered = inputs.pep_administered,
                        "PEP urgency tier changed"
                    );
                    last_tier = Some(windows.pep_urgency);
                }
                debug!(hours_elapsed = windows.hours_elapsed, "treatment windows recomputed");
            }
            Err(e) => warn!(error = %e, "treatment window recompute failed"),
        }

        sender.send_replace(Some(update));
    }
}
