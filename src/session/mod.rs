//! Seek session state management
//!
//! Contains the `SeekSession` struct that carries the selected seek offset
//! across interaction cycles, plus the phase type shared with the UI.

use crate::transcript::{parse_timestamp, RowError, Transcript};

/// Where the session is in the activate/consume cycle.
///
/// `SeekRequested` means a row activation stored a new offset that the
/// video side has not consumed yet; consuming it returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeekPhase {
    #[default]
    Idle,
    SeekRequested,
}

/// Session-scoped seek state.
///
/// One value per running UI, owned by the app and passed where needed.
/// The offset starts at zero, changes only through [`activate_row`], and
/// survives failed activations so the video side always has a usable
/// position.
///
/// [`activate_row`]: SeekSession::activate_row
#[derive(Debug, Default)]
pub struct SeekSession {
    /// Current seek offset in seconds. Never negative.
    seek_seconds: f64,
    /// Current phase of the activate/consume cycle.
    phase: SeekPhase,
    /// Diagnostics accumulated since the last drain.
    diagnostics: Vec<RowError>,
}

impl SeekSession {
    /// Create a session with the offset at zero and nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate a transcript row, updating the stored offset.
    ///
    /// A complete row with a parseable timestamp stores its offset and
    /// requests a seek. A timestamp that fails to parse stores the zero
    /// fallback and still requests the seek, with a diagnostic. A row with
    /// a missing field, or an index past the end, changes nothing beyond
    /// recording one diagnostic.
    pub fn activate_row(&mut self, transcript: &Transcript, index: usize) {
        let Some(row) = transcript.get(index) else {
            let error = RowError::OutOfRange {
                index,
                len: transcript.len(),
            };
            tracing::warn!(index, "activation ignored: {}", error);
            self.diagnostics.push(error);
            return;
        };

        if let Some(error) = transcript.missing_field_error(index, row) {
            tracing::warn!(index, "activation ignored: {}", error);
            self.diagnostics.push(error);
            return;
        }

        // Both fields are present past the guard above
        let start_time = row.start_time.as_deref().unwrap_or("");
        match parse_timestamp(start_time) {
            Ok(seconds) => {
                self.seek_seconds = seconds.max(0.0);
                tracing::debug!(index, seconds = self.seek_seconds, "seek requested");
            }
            Err(error) => {
                // Legacy behavior kept on purpose: a bad timestamp still
                // activates, seeking to the start of the video.
                tracing::warn!(index, "falling back to 0s: {}", error);
                self.diagnostics.push(error);
                self.seek_seconds = 0.0;
            }
        }
        self.phase = SeekPhase::SeekRequested;
    }

    /// The currently stored seek offset in seconds.
    pub fn seek_seconds(&self) -> f64 {
        self.seek_seconds
    }

    /// Current phase.
    pub fn phase(&self) -> SeekPhase {
        self.phase
    }

    /// Whether a seek request is waiting to be consumed.
    pub fn has_pending_request(&self) -> bool {
        self.phase == SeekPhase::SeekRequested
    }

    /// Consume a pending seek request, returning its offset.
    ///
    /// Returns `None` when nothing is pending. The stored offset is kept
    /// either way, so a later replay can reuse it.
    pub fn take_request(&mut self) -> Option<f64> {
        match self.phase {
            SeekPhase::SeekRequested => {
                self.phase = SeekPhase::Idle;
                Some(self.seek_seconds)
            }
            SeekPhase::Idle => None,
        }
    }

    /// Drain diagnostics accumulated since the last call.
    pub fn drain_diagnostics(&mut self) -> Vec<RowError> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Whether any diagnostics are waiting to be drained.
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}
