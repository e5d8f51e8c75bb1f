//! Panel → transport → page round trips, including the JSON wire form.

use boxlens_core::{Mode, PanelConfig, Rect};
use boxlens_harness::{MemoryPage, RecordingTransport};
use boxlens_inspector::{ControlPanel, Inspector};

fn deliver(panel: &mut ControlPanel<RecordingTransport>, inspector: &mut Inspector<MemoryPage>) {
    for command in panel.transport_mut().drain() {
        let json = command.to_json_string().unwrap();
        inspector.handle_json(&json).unwrap();
    }
}

fn page() -> MemoryPage {
    let mut page = MemoryPage::new();
    let body = page.body();
    let chain = page.add_chain(body, 5, Rect::new(0.0, 0.0, 300.0, 200.0));
    page.add(chain[4], "P", Rect::new(0.0, 0.0, 100.0, 30.0));
    page
}

#[test]
fn panel_session_mirrors_page_state() {
    let mut panel = ControlPanel::new(RecordingTransport::new(), PanelConfig::default());
    let mut inspector = Inspector::new(page());

    panel.open();
    deliver(&mut panel, &mut inspector);
    assert_eq!(inspector.mode(), Mode::Disabled);

    // Options changed while disabled never reach the page.
    panel.set_max_depth_input("3");
    assert!(panel.transport().sent().is_empty());
    assert_eq!(panel.depth_display(), "3");

    panel.activate(Mode::Outline);
    deliver(&mut panel, &mut inspector);
    assert_eq!(inspector.mode(), Mode::Outline);
    assert_eq!(inspector.options().max_depth, 3);
    // html, body, and the first two chain divs.
    assert_eq!(inspector.outline_boxes().len(), 4);

    panel.set_max_depth(20);
    deliver(&mut panel, &mut inspector);
    assert_eq!(inspector.outline_boxes().len(), 8);

    panel.activate(Mode::Hover);
    deliver(&mut panel, &mut inspector);
    assert_eq!(inspector.host().injected_top_level().len(), 2);

    panel.set_show_borders(false);
    deliver(&mut panel, &mut inspector);
    assert!(!inspector.options().show_borders);
    assert_eq!(inspector.mode(), Mode::Hover);

    panel.activate(Mode::Disabled);
    deliver(&mut panel, &mut inspector);
    assert!(inspector.host().injected_nodes().is_empty());
}

#[test]
fn reopened_panel_starts_disabled_with_defaults() {
    let mut first = ControlPanel::new(RecordingTransport::new(), PanelConfig::default());
    first.activate(Mode::Hover);
    first.set_show_dimensions(false);
    drop(first);

    let mut second = ControlPanel::new(RecordingTransport::new(), PanelConfig::default());
    second.open();
    assert_eq!(second.mode(), Mode::Disabled);
    assert!(second.options().show_dimensions);
}
