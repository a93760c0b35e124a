use crate::core::config::LineageConfig;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared on/off switch for processing-log recording.
///
/// Clones share the same flag, so one switch built at startup can be handed
/// to every recorder of a pipeline run and toggled in one place.
#[derive(Debug, Clone)]
pub struct RecordingSwitch {
    enabled: Arc<AtomicBool>,
}

impl RecordingSwitch {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(enabled)),
        }
    }

    pub fn enabled() -> Self {
        Self::new(true)
    }

    pub fn disabled() -> Self {
        Self::new(false)
    }

    pub fn from_config(config: &LineageConfig) -> Self {
        Self::new(config.recording.enabled)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    pub fn set(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    /// Turn recording off until the returned guard is dropped, then restore
    /// whatever value was in effect before. Restoration also happens when the
    /// scope is left through `?` or a panic.
    #[must_use = "recording is restored as soon as the guard is dropped"]
    pub fn suspend(&self) -> SuspendGuard {
        let previous = self.enabled.swap(false, Ordering::SeqCst);
        tracing::trace!(previous, "processing log recording suspended");
        SuspendGuard {
            switch: self.clone(),
            previous,
        }
    }

    /// Run `f` with recording suspended.
    pub fn without_recording<T>(&self, f: impl FnOnce() -> T) -> T {
        let _guard = self.suspend();
        f()
    }
}

impl Default for RecordingSwitch {
    fn default() -> Self {
        Self::disabled()
    }
}

pub struct SuspendGuard {
    switch: RecordingSwitch,
    previous: bool,
}

impl Drop for SuspendGuard {
    fn drop(&mut self) {
        self.switch.set(self.previous);
        tracing::trace!(restored = self.previous, "processing log recording restored");
    }
}
