//! State shared between the control front end and the line loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use anyhow::{anyhow, Context};

use factoryvis_core::commands::LineCommand;
use factoryvis_core::state::ProductionSnapshot;

use crate::game_loop::{spawn_line_loop, LoopOptions};

/// Messages for the line loop thread.
#[derive(Debug, Clone, PartialEq)]
pub enum LoopCommand {
    /// Forward an operator command to the production line.
    Line(LineCommand),
    /// Stop the loop thread.
    Shutdown,
}

/// Handle to a running line loop.
///
/// The sender sits behind a `Mutex` so the state can be shared across
/// threads (`mpsc::Sender` is `Send` but not `Sync`).
pub struct AppState {
    command_tx: Mutex<Option<mpsc::Sender<LoopCommand>>>,
    /// Snapshot from the most recent tick. Written by the loop thread.
    pub latest_snapshot: Arc<Mutex<Option<ProductionSnapshot>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the loop thread. Fails if one is already running.
    pub fn start(&self, options: LoopOptions) -> anyhow::Result<JoinHandle<()>> {
        let mut slot = self
            .command_tx
            .lock()
            .map_err(|_| anyhow!("command channel lock poisoned"))?;
        if slot.is_some() {
            anyhow::bail!("line loop already running");
        }

        let (tx, handle) = spawn_line_loop(options, Arc::clone(&self.latest_snapshot))
            .context("failed to spawn line loop thread")?;
        *slot = Some(tx);
        Ok(handle)
    }

    pub fn is_running(&self) -> bool {
        self.command_tx.lock().map(|tx| tx.is_some()).unwrap_or(false)
    }

    /// Send a message to the loop. Returns `false` if no loop is listening.
    pub fn send(&self, command: LoopCommand) -> bool {
        let Ok(slot) = self.command_tx.lock() else {
            return false;
        };
        slot.as_ref().is_some_and(|tx| tx.send(command).is_ok())
    }

    pub fn snapshot(&self) -> Option<ProductionSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|snap| snap.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(!state.is_running());
        assert!(state.snapshot().is_none());
        assert!(!state.send(LoopCommand::Shutdown));
    }
}
