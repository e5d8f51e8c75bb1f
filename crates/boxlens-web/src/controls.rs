#![forbid(unsafe_code)]

//! Popup markup contract: element ids and the active-button class.

use boxlens_core::{Mode, PanelConfig};

/// Hover mode button.
pub const HOVER_BUTTON: &str = "toggle-hover-mode";
/// Outline mode button.
pub const OUTLINE_BUTTON: &str = "toggle-outline-mode";
/// Disable button.
pub const DISABLE_BUTTON: &str = "disable-visualizer";
/// "Show dimensions" checkbox.
pub const SHOW_DIMENSIONS: &str = "show-dimensions";
/// "Show borders" checkbox.
pub const SHOW_BORDERS: &str = "show-borders";
/// Outline depth range input.
pub const DEPTH_SLIDER: &str = "outline-depth";
/// Depth read-out next to the slider.
pub const DEPTH_VALUE: &str = "depth-value";

/// Class marking the button of the current mode.
pub const ACTIVE_CLASS: &str = "active";

/// Mode buttons in markup order.
pub const MODE_BUTTONS: [(&str, Mode); 3] = [
    (HOVER_BUTTON, Mode::Hover),
    (OUTLINE_BUTTON, Mode::Outline),
    (DISABLE_BUTTON, Mode::Disabled),
];

/// Button id for `mode`.
pub fn button_id(mode: Mode) -> &'static str {
    match mode {
        Mode::Hover => HOVER_BUTTON,
        Mode::Outline => OUTLINE_BUTTON,
        Mode::Disabled => DISABLE_BUTTON,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mode_has_one_button() {
        for mode in Mode::ALL {
            let matching: Vec<_> = MODE_BUTTONS.iter().filter(|(_, m)| *m == mode).collect();
            assert_eq!(matching.len(), 1);
            assert_eq!(matching[0].0, button_id(mode));
        }
    }

    #[test]
    fn slider_markup_matches_panel_range() {
        let html = include_str!("../extension/popup/popup.html");
        let config = PanelConfig::default();
        let slider = html
            .lines()
            .find(|line| line.contains(&format!("id=\"{DEPTH_SLIDER}\"")))
            .unwrap();
        assert!(slider.contains(&format!("min=\"{}\"", config.depth_min)));
        assert!(slider.contains(&format!("max=\"{}\"", config.depth_max)));
        assert!(slider.contains(&format!("value=\"{}\"", config.defaults.max_depth)));
    }

    #[test]
    fn popup_markup_carries_every_control() {
        let html = include_str!("../extension/popup/popup.html");
        for id in [
            HOVER_BUTTON,
            OUTLINE_BUTTON,
            DISABLE_BUTTON,
            SHOW_DIMENSIONS,
            SHOW_BORDERS,
            DEPTH_SLIDER,
            DEPTH_VALUE,
        ] {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing #{id}");
        }
    }
}
