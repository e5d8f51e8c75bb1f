#![forbid(unsafe_code)]

use std::cell::RefCell;
use std::rc::Rc;

use boxlens_core::{Command, PanelConfig, PanelTransport, warn};
use boxlens_inspector::ControlPanel;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlInputElement};

use crate::controls::{
    ACTIVE_CLASS, DEPTH_SLIDER, DEPTH_VALUE, MODE_BUTTONS, SHOW_BORDERS, SHOW_DIMENSIONS,
};
use crate::error::WebError;
use crate::runtime;

/// Posts commands to the focused tab via `browser.tabs`.
#[derive(Debug, Default)]
struct TabsTransport;

impl PanelTransport for TabsTransport {
    fn send_to_active_tab(&mut self, command: Command) {
        let message = match command
            .to_json_string()
            .map(|json| js_sys::JSON::parse(&json))
        {
            Ok(Ok(message)) => message,
            Ok(Err(err)) => {
                warn!(error = %WebError::from(err), "command did not parse back");
                return;
            }
            Err(err) => {
                warn!(error = %err, "command failed to encode");
                return;
            }
        };
        let name = command.name();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = runtime::send_to_active_tab(message).await {
                warn!(command = name, error = %err, "delivery to active tab failed");
            }
        });
    }
}

type SharedPanel = Rc<RefCell<ControlPanel<TabsTransport>>>;

/// Popup entry point: binds the popup controls to a [`ControlPanel`].
///
/// Construction wires every control and activates `disabled`, which clears
/// whatever the previous popup session left on the page.
#[wasm_bindgen]
pub struct ControlPanelWeb {
    panel: SharedPanel,
    listeners: Vec<(Element, &'static str, Closure<dyn FnMut(Event)>)>,
}

#[wasm_bindgen]
impl ControlPanelWeb {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<ControlPanelWeb, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(WebError::MissingGlobal("document"))?;
        let panel = Rc::new(RefCell::new(ControlPanel::new(
            TabsTransport,
            PanelConfig::default(),
        )));
        let mut this = Self {
            panel,
            listeners: Vec::new(),
        };

        for (id, mode) in MODE_BUTTONS {
            this.bind(&document, id, "click", move |panel, document, _| {
                panel.activate(mode);
                render(panel, document);
            })?;
        }
        this.bind(&document, SHOW_DIMENSIONS, "change", |panel, _, input| {
            panel.set_show_dimensions(input.is_some_and(|i| i.checked()));
        })?;
        this.bind(&document, SHOW_BORDERS, "change", |panel, _, input| {
            panel.set_show_borders(input.is_some_and(|i| i.checked()));
        })?;
        this.bind(&document, DEPTH_SLIDER, "input", |panel, document, input| {
            if let Some(input) = input {
                panel.set_max_depth_input(&input.value());
            }
            render(panel, document);
        })?;

        {
            let mut panel = this.panel.borrow_mut();
            panel.open();
            render(&panel, &document);
        }
        Ok(this)
    }

    /// Mode currently marked active: `"disabled"`, `"hover"` or `"outline"`.
    pub fn mode(&self) -> String {
        self.panel.borrow().mode().as_str().to_owned()
    }

    /// Detach every control listener.
    pub fn destroy(&mut self) {
        for (element, kind, listener) in self.listeners.drain(..) {
            if let Err(err) =
                element.remove_event_listener_with_callback(kind, listener.as_ref().unchecked_ref())
            {
                warn!(kind, error = %WebError::from(err), "removing control listener failed");
            }
        }
    }
}

impl ControlPanelWeb {
    /// Attach `handler` to the `kind` event of `#id`.
    fn bind(
        &mut self,
        document: &Document,
        id: &'static str,
        kind: &'static str,
        handler: impl Fn(&mut ControlPanel<TabsTransport>, &Document, Option<HtmlInputElement>)
        + 'static,
    ) -> Result<(), WebError> {
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| WebError::MissingElement(id.to_owned()))?;
        let panel = Rc::clone(&self.panel);
        let owner = document.clone();
        let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let input = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok());
            if let Ok(mut panel) = panel.try_borrow_mut() {
                handler(&mut panel, &owner, input);
            }
        });
        element.add_event_listener_with_callback(kind, listener.as_ref().unchecked_ref())?;
        self.listeners.push((element, kind, listener));
        Ok(())
    }
}

/// Mirror panel state into the markup: active button and depth read-out.
fn render(panel: &ControlPanel<TabsTransport>, document: &Document) {
    for (id, mode) in MODE_BUTTONS {
        if let Some(button) = document.get_element_by_id(id)
            && let Err(err) = button
                .class_list()
                .toggle_with_force(ACTIVE_CLASS, panel.is_button_active(mode))
        {
            warn!(id, error = %WebError::from(err), "active class toggle failed");
        }
    }
    if let Some(read_out) = document.get_element_by_id(DEPTH_VALUE) {
        read_out.set_text_content(Some(&panel.depth_display()));
    }
}

