#![forbid(unsafe_code)]

//! Diagnostic log and telemetry hooks for the page inspector.
//!
//! Every state change of an [`Inspector`](crate::Inspector) can be recorded
//! as a [`DiagnosticEntry`] and exported as JSONL. Entries carry a monotonic
//! sequence number, a timestamp in microseconds since the log was created
//! (or `seq × 1000` in deterministic mode), and an FNV-1a checksum of their
//! payload so recorded sessions can be compared byte for byte.

use boxlens_core::{Mode, Rect, VisualOptions};
use serde::Serialize;
use web_time::Instant;

/// Diagnostic event types for JSONL logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// `setMode` switched (or re-entered) a mode.
    ModeChanged,
    /// `updateSettings` refreshed the active mode.
    SettingsUpdated,
    /// `updateSettings` arrived while disabled; nothing was drawn.
    SettingsIgnored,
    /// Hover highlight moved to a new element.
    HoverChanged,
    /// Pointer left; highlight cleared.
    HoverCleared,
    /// Outline scan finished.
    OutlineScanned,
    /// Overlay nodes were torn down.
    OverlaysRemoved,
    /// An inbound message failed to decode.
    MessageRejected,
}

impl DiagnosticEventKind {
    /// Get the JSONL event type string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ModeChanged => "mode_changed",
            Self::SettingsUpdated => "settings_updated",
            Self::SettingsIgnored => "settings_ignored",
            Self::HoverChanged => "hover_changed",
            Self::HoverCleared => "hover_cleared",
            Self::OutlineScanned => "outline_scanned",
            Self::OverlaysRemoved => "overlays_removed",
            Self::MessageRejected => "message_rejected",
        }
    }
}

/// Serializable rect for log payloads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoggedRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl From<Rect> for LoggedRect {
    fn from(r: Rect) -> Self {
        Self {
            x: r.x,
            y: r.y,
            w: r.width,
            h: r.height,
        }
    }
}

/// JSONL diagnostic log entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticEntry {
    /// Monotonic sequence number (assigned by the log).
    pub seq: u64,
    /// Timestamp in microseconds (assigned by the log).
    #[serde(rename = "ts_us")]
    pub timestamp_us: u64,
    /// Event kind.
    pub kind: DiagnosticEventKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(rename = "prev_mode", skip_serializing_if = "Option::is_none")]
    pub previous_mode: Option<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<VisualOptions>,
    /// Target depth (hover).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
    /// Target page rect (hover).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rect: Option<LoggedRect>,
    /// Label text shown (hover).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Node count (scan results, removals).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Free-form context, e.g. a decode error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Checksum for determinism verification.
    #[serde(serialize_with = "hex_checksum")]
    pub checksum: u64,
}

fn hex_checksum<S: serde::Serializer>(value: &u64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format!("{value:016x}"))
}

impl DiagnosticEntry {
    /// Create a new entry. Sequence and timestamp are filled in on record.
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            seq: 0,
            timestamp_us: 0,
            kind,
            mode: None,
            previous_mode: None,
            options: None,
            depth: None,
            rect: None,
            label: None,
            count: None,
            context: None,
            checksum: 0,
        }
    }

    /// Set the current mode.
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Set the previous mode.
    #[must_use]
    pub fn with_previous_mode(mut self, mode: Mode) -> Self {
        self.previous_mode = Some(mode);
        self
    }

    /// Set the options in effect.
    #[must_use]
    pub fn with_options(mut self, options: VisualOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Set hover target details.
    #[must_use]
    pub fn with_target(mut self, depth: u32, rect: Rect) -> Self {
        self.depth = Some(depth);
        self.rect = Some(rect.into());
        self
    }

    /// Set label text.
    #[must_use]
    pub fn with_label(mut self, label: Option<String>) -> Self {
        self.label = label;
        self
    }

    /// Set node count.
    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Set context string.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Compute FNV-1a hash of the payload fields (excluding seq/timestamp).
    fn compute_checksum(&self) -> u64 {
        let mut hash: u64 = 0xcbf29ce484222325;
        let payload = format!(
            "{:?}{:?}{:?}{:?}{:?}{:?}{:?}{:?}{:?}",
            self.kind,
            self.mode,
            self.previous_mode,
            self.options,
            self.depth,
            self.rect
                .map(|r| format!("{},{},{},{}", r.x, r.y, r.w, r.h))
                .unwrap_or_default(),
            self.label.as_deref().unwrap_or(""),
            self.count.unwrap_or(0),
            self.context.as_deref().unwrap_or("")
        );
        for &b in payload.as_bytes() {
            hash ^= b as u64;
            hash = hash.wrapping_mul(0x100000001b3);
        }
        hash
    }

    /// Format as JSONL string.
    pub fn to_jsonl(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(
                "{{\"seq\":{},\"kind\":\"{}\"}}",
                self.seq,
                self.kind.as_str()
            )
        })
    }
}

/// Diagnostic log collector.
#[derive(Debug)]
pub struct DiagnosticLog {
    entries: Vec<DiagnosticEntry>,
    max_entries: usize,
    next_seq: u64,
    deterministic: bool,
    start: Instant,
}

impl Default for DiagnosticLog {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticLog {
    /// Create a new diagnostic log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            max_entries: 5000,
            next_seq: 0,
            deterministic: false,
            start: Instant::now(),
        }
    }

    /// Use `seq × 1000` as the timestamp so logs are reproducible.
    #[must_use]
    pub fn deterministic(mut self) -> Self {
        self.deterministic = true;
        self
    }

    /// Set maximum entries to keep.
    #[must_use]
    pub fn with_max_entries(mut self, max: usize) -> Self {
        self.max_entries = max;
        self
    }

    /// Stamp and record an entry. Returns the stored entry.
    pub fn record(&mut self, mut entry: DiagnosticEntry) -> &DiagnosticEntry {
        entry.seq = self.next_seq;
        self.next_seq += 1;
        entry.timestamp_us = if self.deterministic {
            entry.seq.saturating_mul(1_000)
        } else {
            self.start.elapsed().as_micros() as u64
        };
        entry.checksum = entry.compute_checksum();

        if self.max_entries > 0 && self.entries.len() >= self.max_entries {
            self.entries.remove(0);
        }
        self.entries.push(entry);
        // Just pushed.
        &self.entries[self.entries.len() - 1]
    }

    /// Get all entries.
    pub fn entries(&self) -> &[DiagnosticEntry] {
        &self.entries
    }

    /// Get entries of a specific kind.
    pub fn entries_of_kind(&self, kind: DiagnosticEventKind) -> Vec<&DiagnosticEntry> {
        self.entries.iter().filter(|e| e.kind == kind).collect()
    }

    /// Clear all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Export all entries as JSONL string.
    pub fn to_jsonl(&self) -> String {
        self.entries
            .iter()
            .map(DiagnosticEntry::to_jsonl)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Callback type for telemetry hooks.
pub type TelemetryCallback = Box<dyn Fn(&DiagnosticEntry)>;

/// Telemetry hooks for observing inspector events.
#[derive(Default)]
pub struct TelemetryHooks {
    on_mode_change: Option<TelemetryCallback>,
    on_scan: Option<TelemetryCallback>,
    on_reject: Option<TelemetryCallback>,
    on_any_event: Option<TelemetryCallback>,
}

impl std::fmt::Debug for TelemetryHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelemetryHooks")
            .field("on_mode_change", &self.on_mode_change.is_some())
            .field("on_scan", &self.on_scan.is_some())
            .field("on_reject", &self.on_reject.is_some())
            .field("on_any_event", &self.on_any_event.is_some())
            .finish()
    }
}

impl TelemetryHooks {
    /// Create new empty hooks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set mode change callback.
    #[must_use]
    pub fn on_mode_change(mut self, f: impl Fn(&DiagnosticEntry) + 'static) -> Self {
        self.on_mode_change = Some(Box::new(f));
        self
    }

    /// Set outline scan callback.
    #[must_use]
    pub fn on_scan(mut self, f: impl Fn(&DiagnosticEntry) + 'static) -> Self {
        self.on_scan = Some(Box::new(f));
        self
    }

    /// Set rejected-message callback.
    #[must_use]
    pub fn on_reject(mut self, f: impl Fn(&DiagnosticEntry) + 'static) -> Self {
        self.on_reject = Some(Box::new(f));
        self
    }

    /// Set catch-all callback.
    #[must_use]
    pub fn on_any(mut self, f: impl Fn(&DiagnosticEntry) + 'static) -> Self {
        self.on_any_event = Some(Box::new(f));
        self
    }

    /// Dispatch an entry to relevant hooks.
    pub(crate) fn dispatch(&self, entry: &DiagnosticEntry) {
        if let Some(ref cb) = self.on_any_event {
            cb(entry);
        }

        let specific = match entry.kind {
            DiagnosticEventKind::ModeChanged => &self.on_mode_change,
            DiagnosticEventKind::OutlineScanned => &self.on_scan,
            DiagnosticEventKind::MessageRejected => &self.on_reject,
            _ => return,
        };
        if let Some(cb) = specific {
            cb(entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn log_assigns_sequence_and_checksum() {
        let mut log = DiagnosticLog::new().deterministic();
        log.record(DiagnosticEntry::new(DiagnosticEventKind::ModeChanged).with_mode(Mode::Hover));
        log.record(DiagnosticEntry::new(DiagnosticEventKind::HoverCleared));
        let entries = log.entries();
        assert_eq!(entries[0].seq, 0);
        assert_eq!(entries[1].seq, 1);
        assert_eq!(entries[1].timestamp_us, 1_000);
        assert_ne!(entries[0].checksum, 0);
        assert_ne!(entries[0].checksum, entries[1].checksum);
    }

    #[test]
    fn checksum_ignores_sequence() {
        let mut a = DiagnosticLog::new().deterministic();
        let mut b = DiagnosticLog::new().deterministic();
        b.record(DiagnosticEntry::new(DiagnosticEventKind::HoverCleared));
        let entry = DiagnosticEntry::new(DiagnosticEventKind::OutlineScanned).with_count(4);
        let ca = a.record(entry.clone()).checksum;
        let cb = b.record(entry).checksum;
        assert_eq!(ca, cb);
    }

    #[test]
    fn max_entries_drops_oldest() {
        let mut log = DiagnosticLog::new().with_max_entries(2);
        for count in 0..3 {
            log.record(DiagnosticEntry::new(DiagnosticEventKind::OutlineScanned).with_count(count));
        }
        let counts: Vec<_> = log.entries().iter().map(|e| e.count).collect();
        assert_eq!(counts, vec![Some(1), Some(2)]);
    }

    #[test]
    fn jsonl_fields() {
        let mut log = DiagnosticLog::new().deterministic();
        log.record(
            DiagnosticEntry::new(DiagnosticEventKind::ModeChanged)
                .with_previous_mode(Mode::Disabled)
                .with_mode(Mode::Outline)
                .with_options(VisualOptions::default()),
        );
        let line = log.to_jsonl();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["kind"], "mode_changed");
        assert_eq!(value["mode"], "outline");
        assert_eq!(value["prev_mode"], "disabled");
        assert_eq!(value["options"]["maxDepth"], 10);
        assert_eq!(value["ts_us"], 0);
        assert_eq!(value["checksum"].as_str().unwrap().len(), 16);
        assert!(value.get("depth").is_none());
    }

    #[test]
    fn entries_of_kind_filters() {
        let mut log = DiagnosticLog::new();
        log.record(DiagnosticEntry::new(DiagnosticEventKind::HoverCleared));
        log.record(DiagnosticEntry::new(DiagnosticEventKind::ModeChanged));
        log.record(DiagnosticEntry::new(DiagnosticEventKind::HoverCleared));
        assert_eq!(log.entries_of_kind(DiagnosticEventKind::HoverCleared).len(), 2);
        log.clear();
        assert!(log.entries().is_empty());
    }

    #[test]
    fn hooks_dispatch_specific_and_any() {
        let any = Rc::new(Cell::new(0));
        let scans = Rc::new(Cell::new(0));
        let hooks = {
            let any = Rc::clone(&any);
            let scans = Rc::clone(&scans);
            TelemetryHooks::new()
                .on_any(move |_| any.set(any.get() + 1))
                .on_scan(move |_| scans.set(scans.get() + 1))
        };
        hooks.dispatch(&DiagnosticEntry::new(DiagnosticEventKind::OutlineScanned));
        hooks.dispatch(&DiagnosticEntry::new(DiagnosticEventKind::HoverCleared));
        assert_eq!(any.get(), 2);
        assert_eq!(scans.get(), 1);
    }

    #[test]
    fn kind_names() {
        assert_eq!(DiagnosticEventKind::SettingsIgnored.as_str(), "settings_ignored");
        assert_eq!(
            serde_json::to_value(DiagnosticEventKind::MessageRejected).unwrap(),
            "message_rejected"
        );
    }
}
