use std::sync::{Arc, Mutex, MutexGuard};

use sign_popup_core::{PortError, WindowPort};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowCommand {
    Close,
    GoBack,
}

/// Records window requests from the page. The shell drains them with
/// [`WindowAdapter::take_commands`] and applies them to the real viewport.
#[derive(Debug, Clone, Default)]
pub struct WindowAdapter {
    inner: Arc<Mutex<WindowState>>,
}

// Only counts are kept once the shell drains `queued`.
#[derive(Debug, Default)]
struct WindowState {
    queued: Vec<WindowCommand>,
    closes: usize,
    backs: usize,
}

impl WindowAdapter {
    pub fn take_commands(&self) -> Result<Vec<WindowCommand>, PortError> {
        Ok(std::mem::take(&mut self.lock()?.queued))
    }

    pub fn close_count(&self) -> Result<usize, PortError> {
        Ok(self.lock()?.closes)
    }

    pub fn back_count(&self) -> Result<usize, PortError> {
        Ok(self.lock()?.backs)
    }

    fn push(&self, command: WindowCommand) -> Result<(), PortError> {
        let mut g = self.lock()?;
        match command {
            WindowCommand::Close => g.closes += 1,
            WindowCommand::GoBack => g.backs += 1,
        }
        g.queued.push(command);
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, WindowState>, PortError> {
        self.inner
            .lock()
            .map_err(|e| PortError::Transport(format!("window lock poisoned: {e}")))
    }
}

impl WindowPort for WindowAdapter {
    fn close(&self) -> Result<(), PortError> {
        self.push(WindowCommand::Close)
    }

    fn go_back(&self) -> Result<(), PortError> {
        self.push(WindowCommand::GoBack)
    }
}
