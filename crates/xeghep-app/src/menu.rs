// crates/xeghep-app/src/menu.rs
// Mobile menu toggle

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node};
use xeghep_core::Result;
use xeghep_core::menu::{MENU_CLOSE_DELAY_MS, MenuState};

use crate::dom;

const TOGGLE_ID: &str = "menuToggle";
const NAV_ID: &str = "mainNav";

struct Menu {
    state: Cell<MenuState>,
    toggle: HtmlElement,
    nav: HtmlElement,
    body: Option<HtmlElement>,
}

impl Menu {
    fn update(&self, f: impl FnOnce(&mut MenuState)) {
        let mut state = self.state.get();
        f(&mut state);
        self.state.set(state);
        self.render();
    }

    fn render(&self) {
        let state = self.state.get();
        dom::set_class(&self.toggle, "active", state.is_open());
        dom::set_class(&self.nav, "show", state.is_open());
        if let Some(body) = &self.body {
            dom::set_style(body, "overflow", state.body_overflow());
        }
    }

    fn close(&self) {
        self.update(|state| {
            state.close();
        });
    }
}

/// Wire `#menuToggle` to `#mainNav`; inactive unless both exist
pub fn init_menu_toggle(document: &Document) -> Result<()> {
    let menu = Rc::new(Menu {
        state: Cell::new(MenuState::default()),
        toggle: dom::by_id(document, TOGGLE_ID)?,
        nav: dom::by_id(document, NAV_ID)?,
        body: document.body(),
    });

    let m = Rc::clone(&menu);
    dom::listen(&menu.toggle, "click", move |event| {
        event.stop_propagation();
        m.update(|state| {
            state.toggle();
        });
    });

    // Tap outside the open menu closes it
    let m = Rc::clone(&menu);
    dom::listen(document, "click", move |event| {
        let target = event.target();
        let node = target.as_ref().and_then(|t| t.dyn_ref::<Node>());
        let inside_nav = m.nav.contains(node);
        let on_toggle = m.toggle.is_same_node(node);
        if m.state
            .get()
            .closes_on_document_click(dom::viewport_width(), inside_nav, on_toggle)
        {
            m.close();
        }
    });

    // Tapping a link closes the menu once navigation has started
    let m = Rc::clone(&menu);
    dom::listen(&menu.nav, "click", move |event| {
        let target = event.target();
        let is_link = target
            .as_ref()
            .and_then(|t| t.dyn_ref::<Element>())
            .is_some_and(|el| el.tag_name() == "A");
        if MenuState::closes_after_link_click(dom::viewport_width(), is_link) {
            let m = Rc::clone(&m);
            Timeout::new(MENU_CLOSE_DELAY_MS, move || m.close()).forget();
        }
    });

    if let Ok(window) = dom::window() {
        let m = Rc::clone(&menu);
        dom::listen(&window, "resize", move |_| {
            if MenuState::closes_on_resize(dom::viewport_width()) {
                m.close();
            }
        });
    }

    log::debug!("Menu toggle bound");
    Ok(())
}
