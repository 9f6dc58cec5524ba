//! Submit-reading flow: validate → classify → haptic → history.

use std::sync::Mutex;

use tracing::info;

use super::{HistoryResult, ReadingHistory};
use crate::config::EngineConfig;
use crate::engine::{validate_ph_input, DiagnosticEngine};
use crate::models::{HapticPattern, ReadingHistoryEntry};
use crate::store::KeyValueStore;

/// Fire-and-forget vibration feedback provided by the host.
pub trait HapticSink: Send + Sync {
    fn notify(&self, pattern: HapticPattern);
}

/// Sink that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHaptics;

impl HapticSink for NoopHaptics {
    fn notify(&self, _pattern: HapticPattern) {}
}

/// Sink that remembers what it was asked to play (for tests and previews).
#[derive(Debug, Default)]
pub struct RecordingHaptics {
    played: Mutex<Vec<HapticPattern>>,
}

impl RecordingHaptics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Patterns played so far, oldest first.
    pub fn played(&self) -> Vec<HapticPattern> {
        self.played
            .lock()
            .map(|p| p.to_vec())
            .unwrap_or_default()
    }
}

impl HapticSink for RecordingHaptics {
    fn notify(&self, pattern: HapticPattern) {
        if let Ok(mut played) = self.played.lock() {
            played.push(pattern);
        }
    }
}

/// Coordinates a submitted reading with its side effects.
pub struct ReadingService<'a, S: KeyValueStore> {
    engine: DiagnosticEngine<'a>,
    history: ReadingHistory<S>,
    haptics: Box<dyn HapticSink + 'a>,
}

impl<S: KeyValueStore> ReadingService<'static, S> {
    /// Service over the built-in knowledge base with no haptics.
    pub fn new(store: S, config: &EngineConfig) -> Self {
        Self::with_engine(DiagnosticEngine::default(), store, config, Box::new(NoopHaptics))
    }
}

impl<'a, S: KeyValueStore> ReadingService<'a, S> {
    pub fn with_engine(
        engine: DiagnosticEngine<'a>,
        store: S,
        config: &EngineConfig,
        haptics: Box<dyn HapticSink + 'a>,
    ) -> Self {
        Self {
            engine,
            history: ReadingHistory::new(store, config),
            haptics,
        }
    }

    /// Validate raw input, classify it, notify the haptic sink and record it.
    ///
    /// Rejected input has no side effects.
    pub fn submit(
        &self,
        raw_input: &str,
        chicken_id: Option<String>,
    ) -> HistoryResult<ReadingHistoryEntry> {
        let ph = validate_ph_input(raw_input)?;
        let feedback = self.engine.classify(ph);

        self.haptics.notify(HapticPattern::from(feedback.severity));

        let entry = ReadingHistoryEntry::new(feedback, chicken_id);
        self.history.record(entry.clone())?;

        info!(
            ph,
            status = %entry.feedback.status,
            candidates = entry.feedback.diseases.len(),
            "recorded pH reading"
        );
        Ok(entry)
    }

    /// Readings, newest first.
    pub fn recent(&self) -> HistoryResult<Vec<ReadingHistoryEntry>> {
        self.history.load()
    }

    pub fn clear_history(&self) -> HistoryResult<()> {
        self.history.clear()
    }

    pub fn engine(&self) -> &DiagnosticEngine<'a> {
        &self.engine
    }

    pub fn history(&self) -> &ReadingHistory<S> {
        &self.history
    }
}
