use sign_popup_core::{ClockPort, PortError};

/// Wall clock. `web_time` resolves to `std::time` off the web, so one code
/// path serves native and wasm builds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClockAdapter;

impl ClockPort for SystemClockAdapter {
    fn now_ms(&self) -> Result<u64, PortError> {
        let elapsed = web_time::SystemTime::now()
            .duration_since(web_time::UNIX_EPOCH)
            .map_err(|e| PortError::Transport(format!("system clock before unix epoch: {e}")))?;
        u64::try_from(elapsed.as_millis())
            .map_err(|e| PortError::Transport(format!("timestamp overflow: {e}")))
    }
}
