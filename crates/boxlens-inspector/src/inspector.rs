#![forbid(unsafe_code)]

//! The per-page inspector: mode state machine plus overlay ownership.
//!
//! # Invariants
//!
//! 1. At most one mode's overlay nodes are attached at any time.
//! 2. Every node the inspector creates is tracked until it is removed;
//!    [`Inspector::exit_mode`] removes all of them and is idempotent.
//! 3. `updateSettings` never changes the mode and never draws while disabled.
//! 4. Pointer callbacks outside hover mode are ignored.

use boxlens_core::{
    Command, InspectorConfig, MessageError, Mode, PageHost, VisualOptions, debug, info, warn,
};

#[cfg(feature = "tracing")]
use tracing::debug_span;

use crate::diagnostics::{DiagnosticEntry, DiagnosticEventKind, DiagnosticLog, TelemetryHooks};
use crate::hover::{HoverFrame, HoverOverlay};
use crate::outline;

/// Page inspector bound to one page host.
pub struct Inspector<H: PageHost> {
    host: H,
    config: InspectorConfig,
    mode: Mode,
    options: VisualOptions,
    hover: Option<HoverOverlay<H::Node>>,
    outline_boxes: Vec<H::Node>,
    diagnostic_log: Option<DiagnosticLog>,
    telemetry_hooks: Option<TelemetryHooks>,
}

impl<H: PageHost> std::fmt::Debug for Inspector<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inspector")
            .field("mode", &self.mode)
            .field("options", &self.options)
            .field("hover", &self.hover)
            .field("outline_boxes", &self.outline_boxes.len())
            .finish_non_exhaustive()
    }
}

impl<H: PageHost> Inspector<H> {
    /// Create a disabled inspector with default configuration.
    pub fn new(host: H) -> Self {
        Self::with_config(host, InspectorConfig::default())
    }

    /// Create a disabled inspector.
    pub fn with_config(host: H, config: InspectorConfig) -> Self {
        Self {
            host,
            options: config.initial_options,
            config,
            mode: Mode::Disabled,
            hover: None,
            outline_boxes: Vec::new(),
            diagnostic_log: None,
            telemetry_hooks: None,
        }
    }

    /// Record diagnostics into an in-memory log.
    #[must_use]
    pub fn with_diagnostics(mut self, log: DiagnosticLog) -> Self {
        self.diagnostic_log = Some(log);
        self
    }

    /// Attach telemetry hooks.
    #[must_use]
    pub fn with_telemetry_hooks(mut self, hooks: TelemetryHooks) -> Self {
        self.telemetry_hooks = Some(hooks);
        self
    }

    /// Current mode.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Options applied to renders.
    #[inline]
    pub fn options(&self) -> VisualOptions {
        self.options
    }

    /// Configuration.
    #[inline]
    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    /// The page host.
    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable page host access, e.g. to scroll a test page.
    #[inline]
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Give back the host. Overlays are left as they are.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Hover overlay nodes, if hover mode built them.
    pub fn hover_overlay(&self) -> Option<&HoverOverlay<H::Node>> {
        self.hover.as_ref()
    }

    /// Outline boxes in creation order.
    pub fn outline_boxes(&self) -> &[H::Node] {
        &self.outline_boxes
    }

    /// Get the diagnostic log (if enabled).
    #[must_use = "use the diagnostic log (if enabled)"]
    pub fn diagnostic_log(&self) -> Option<&DiagnosticLog> {
        self.diagnostic_log.as_ref()
    }

    /// Get mutable diagnostic log (if enabled).
    #[must_use = "use the diagnostic log (if enabled)"]
    pub fn diagnostic_log_mut(&mut self) -> Option<&mut DiagnosticLog> {
        self.diagnostic_log.as_mut()
    }

    /// Check if `node` is an overlay node this inspector created.
    ///
    /// Outline labels are children of their box and never enumerated on
    /// their own while boxes exist, so only top-level nodes are checked.
    pub fn is_own_node(&self, node: &H::Node) -> bool {
        self.hover.as_ref().is_some_and(|h| h.owns(node)) || self.outline_boxes.contains(node)
    }

    // ------------------------------------------------------------------
    // Messages
    // ------------------------------------------------------------------

    /// Dispatch a decoded panel command.
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::SetMode { mode, options } => {
                self.options = options;
                self.set_mode(mode);
            }
            Command::UpdateSettings { options } => self.update_settings(options),
        }
    }

    /// Decode and dispatch a JSON panel message.
    ///
    /// Malformed messages leave all state untouched.
    pub fn handle_json(&mut self, json: &str) -> Result<(), MessageError> {
        match Command::from_json_str(json) {
            Ok(command) => {
                self.handle(command);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "rejected panel message");
                if self.diagnostics_active() {
                    self.record_diagnostic(
                        DiagnosticEntry::new(DiagnosticEventKind::MessageRejected)
                            .with_mode(self.mode)
                            .with_context(err.to_string()),
                    );
                }
                Err(err)
            }
        }
    }

    // ------------------------------------------------------------------
    // Mode state machine
    // ------------------------------------------------------------------

    /// Tear everything down, then enter `mode` with the current options.
    pub fn set_mode(&mut self, mode: Mode) {
        let prev = self.mode;
        self.exit_mode();
        self.mode = mode;
        self.enter_mode();

        info!(from = prev.as_str(), to = mode.as_str(), "inspector mode set");
        if self.diagnostics_active() {
            self.record_diagnostic(
                DiagnosticEntry::new(DiagnosticEventKind::ModeChanged)
                    .with_previous_mode(prev)
                    .with_mode(mode)
                    .with_options(self.options),
            );
        }
    }

    /// Store new options and redraw the active mode.
    ///
    /// While disabled the options are stored but nothing is drawn.
    pub fn update_settings(&mut self, options: VisualOptions) {
        self.options = options;
        if !self.mode.is_active() {
            debug!("settings stored while disabled");
            if self.diagnostics_active() {
                self.record_diagnostic(
                    DiagnosticEntry::new(DiagnosticEventKind::SettingsIgnored)
                        .with_options(options),
                );
            }
            return;
        }
        self.refresh();
        if self.diagnostics_active() {
            self.record_diagnostic(
                DiagnosticEntry::new(DiagnosticEventKind::SettingsUpdated)
                    .with_mode(self.mode)
                    .with_options(options),
            );
        }
    }

    /// Rebuild the current mode's visuals from scratch.
    pub fn refresh(&mut self) {
        self.exit_mode();
        self.enter_mode();
    }

    /// Remove every overlay node and detach pointer listeners.
    ///
    /// Safe to call in any mode, any number of times. The recorded mode is
    /// not changed.
    pub fn exit_mode(&mut self) {
        self.host.set_pointer_tracking(false);

        let mut removed = 0;
        if let Some(overlay) = self.hover.take() {
            removed += overlay.remove(&mut self.host);
        }
        removed += outline::remove_all(&mut self.host, &mut self.outline_boxes);

        if removed > 0 {
            debug!(removed, "overlays removed");
            if self.diagnostics_active() {
                self.record_diagnostic(
                    DiagnosticEntry::new(DiagnosticEventKind::OverlaysRemoved)
                        .with_mode(self.mode)
                        .with_count(removed),
                );
            }
        }
    }

    fn enter_mode(&mut self) {
        match self.mode {
            Mode::Disabled => {}
            Mode::Hover => self.enter_hover(),
            Mode::Outline => self.enter_outline(),
        }
    }

    fn enter_hover(&mut self) {
        if self.hover.is_none() {
            self.hover = HoverOverlay::create(&mut self.host, &self.config);
        }
        if self.hover.is_none() {
            warn!("hover overlay could not be created");
            return;
        }
        self.host.set_pointer_tracking(true);
    }

    fn enter_outline(&mut self) {
        #[cfg(feature = "tracing")]
        let _span = debug_span!("outline_scan", max_depth = self.options.max_depth).entered();

        let planned = {
            let hover = self.hover.as_ref();
            let boxes = &self.outline_boxes;
            outline::plan(&self.host, &self.options, &self.config, |node| {
                hover.is_some_and(|h| h.owns(node)) || boxes.contains(node)
            })
        };
        let created = outline::materialize(&mut self.host, &planned, &self.options, &self.config);
        debug!(
            planned = planned.len(),
            created = created.len(),
            "outline scan complete"
        );
        self.outline_boxes.extend(created);

        if self.diagnostics_active() {
            self.record_diagnostic(
                DiagnosticEntry::new(DiagnosticEventKind::OutlineScanned)
                    .with_options(self.options)
                    .with_count(self.outline_boxes.len()),
            );
        }
    }

    // ------------------------------------------------------------------
    // Pointer callbacks (hover mode)
    // ------------------------------------------------------------------

    /// Pointer entered `target`. Returns `true` if the highlight moved.
    pub fn pointer_enter(&mut self, target: &H::Node) -> bool {
        if self.mode != Mode::Hover || self.is_own_node(target) {
            return false;
        }
        let Some(overlay) = self.hover.as_ref() else {
            return false;
        };
        let Some(frame) = HoverFrame::measure(&self.host, target, &self.options, &self.config)
        else {
            return false;
        };

        overlay.show(&mut self.host, &frame, &self.options, &self.config);

        if self.diagnostics_active() {
            self.record_diagnostic(
                DiagnosticEntry::new(DiagnosticEventKind::HoverChanged)
                    .with_target(frame.depth, frame.page_rect)
                    .with_label(frame.label.map(|l| l.text)),
            );
        }
        true
    }

    /// Pointer left an element: clear the highlight, keep the nodes.
    pub fn pointer_leave(&mut self) {
        if self.mode != Mode::Hover {
            return;
        }
        let Some(overlay) = self.hover.as_ref() else {
            return;
        };
        overlay.clear(&mut self.host);

        if self.diagnostics_active() {
            self.record_diagnostic(DiagnosticEntry::new(DiagnosticEventKind::HoverCleared));
        }
    }

    // ------------------------------------------------------------------
    // Diagnostics
    // ------------------------------------------------------------------

    #[inline]
    fn diagnostics_active(&self) -> bool {
        self.diagnostic_log.is_some() || self.telemetry_hooks.is_some()
    }

    fn record_diagnostic(&mut self, entry: DiagnosticEntry) {
        match self.diagnostic_log.as_mut() {
            Some(log) => {
                let stored = log.record(entry);
                if let Some(ref hooks) = self.telemetry_hooks {
                    hooks.dispatch(stored);
                }
            }
            None => {
                if let Some(ref hooks) = self.telemetry_hooks {
                    hooks.dispatch(&entry);
                }
            }
        }
    }
}
