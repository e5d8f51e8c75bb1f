#![forbid(unsafe_code)]

//! Control panel state: the popup's mode buttons and option controls.
//!
//! The panel mirrors the page's mode but never owns it. Every mode button
//! click sends `setMode` with the current options; every option change sends
//! `updateSettings`, but only while a mode is active so a disabled page is
//! never woken up. Nothing outlives the panel.

use boxlens_core::{Command, Mode, PanelConfig, PanelTransport, VisualOptions, debug};

/// Control panel bound to an outbound transport.
#[derive(Debug)]
pub struct ControlPanel<T: PanelTransport> {
    transport: T,
    config: PanelConfig,
    mode: Mode,
    options: VisualOptions,
}

impl<T: PanelTransport> ControlPanel<T> {
    /// Create a panel showing the markup defaults. Nothing is sent yet.
    pub fn new(transport: T, config: PanelConfig) -> Self {
        Self {
            transport,
            options: config.defaults,
            config,
            mode: Mode::Disabled,
        }
    }

    /// Initialize a freshly opened panel by activating `disabled`.
    pub fn open(&mut self) {
        self.activate(Mode::Disabled);
    }

    /// Mode mirrored from the last button click.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current control values.
    #[inline]
    pub fn options(&self) -> VisualOptions {
        self.options
    }

    /// Check if the button for `mode` carries the active class.
    #[inline]
    pub fn is_button_active(&self, mode: Mode) -> bool {
        self.mode == mode
    }

    /// Text shown next to the depth slider.
    pub fn depth_display(&self) -> String {
        self.options.max_depth.to_string()
    }

    /// The transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutable transport access.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// A mode button was clicked.
    pub fn activate(&mut self, mode: Mode) {
        self.mode = mode;
        debug!(mode = mode.as_str(), "panel mode activated");
        self.transport.send_to_active_tab(Command::SetMode {
            mode,
            options: self.options,
        });
    }

    /// The "show dimensions" checkbox changed.
    pub fn set_show_dimensions(&mut self, checked: bool) {
        self.options.show_dimensions = checked;
        self.notify_settings();
    }

    /// The "show borders" checkbox changed.
    pub fn set_show_borders(&mut self, checked: bool) {
        self.options.show_borders = checked;
        self.notify_settings();
    }

    /// The depth slider moved.
    ///
    /// The value is held to `depth_min..=depth_max`, the `min`/`max` the
    /// popup's range input declares, so the panel never reports a depth the
    /// slider itself could not show. No other validation happens here.
    pub fn set_max_depth(&mut self, depth: u32) {
        self.options.max_depth = depth.clamp(self.config.depth_min, self.config.depth_max);
        self.notify_settings();
    }

    /// The depth slider moved, reporting its raw string value.
    ///
    /// Returns `false` (and changes nothing) if the value holds no integer.
    pub fn set_max_depth_input(&mut self, raw: &str) -> bool {
        let Some(value) = parse_int(raw) else {
            return false;
        };
        let clamped = value.clamp(
            i64::from(self.config.depth_min),
            i64::from(self.config.depth_max),
        );
        // In range of u32 after clamping.
        self.set_max_depth(clamped as u32);
        true
    }

    fn notify_settings(&mut self) {
        if !self.mode.is_active() {
            return;
        }
        self.transport.send_to_active_tab(Command::UpdateSettings {
            options: self.options,
        });
    }
}

/// Integer prefix parse: optional leading whitespace, optional sign, then
/// decimal digits; trailing junk is ignored.
pub fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
