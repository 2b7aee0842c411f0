//! Page-level behaviors: navigation state, fades, the mobile menu, anchor
//! scrolling and the certificate opener.

use super::dom::{self, listen, listen_preventable, set_style};
use super::Outcome;
use crate::effects::anchor::{fragment_target, FRAGMENT_LINK_SELECTOR};
use crate::effects::certificate::{
    certificate_path, CERTIFICATE_BUTTON_SELECTOR, CERT_ATTRIBUTE, POPUP_BLOCKED_MESSAGE,
};
use crate::effects::menu::{
    MenuState, ICON_BAR_SELECTOR, MENU_TOGGLE_SELECTOR, NAV_PANEL_SELECTOR, OPEN_CLASS,
};
use crate::effects::nav::{active_flags, current_page_segment, ACTIVE_CLASS, NAV_LINK_SELECTOR};
use crate::effects::transition::{
    is_internal_href, FADE_IN_DELAY_MS, FADE_IN_TRANSITION, FADE_OUT_MS, FADE_OUT_TRANSITION,
    INTERNAL_LINK_SELECTOR,
};
use crate::telemetry::{log_event, LogLevel};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

pub fn init_navigation(document: &Document) -> Result<Outcome, JsValue> {
    let links = dom::query_all(document, NAV_LINK_SELECTOR)?;
    if links.is_empty() {
        return Ok(Outcome::Skipped("no_nav_links"));
    }

    let pathname = dom::window()?.location().pathname()?;
    let current_page = current_page_segment(&pathname);
    let hrefs: Vec<Option<String>> = links.iter().map(|link| link.get_attribute("href")).collect();
    let flags = active_flags(hrefs.iter().map(Option::as_deref), current_page);

    for (link, active) in links.iter().zip(flags) {
        link.class_list().toggle_with_force(ACTIVE_CLASS, active)?;
    }

    Ok(Outcome::Started)
}

pub fn init_page_transitions(document: &Document) -> Result<Outcome, JsValue> {
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("missing body"))?;

    set_style(&body, "opacity", "0");
    {
        let body = body.clone();
        Timeout::new(FADE_IN_DELAY_MS, move || {
            set_style(&body, "transition", FADE_IN_TRANSITION);
            set_style(&body, "opacity", "1");
        })
        .forget();
    }

    for link in dom::query_all(document, INTERNAL_LINK_SELECTOR)? {
        let body = body.clone();
        let source = link.clone();

        listen_preventable(&link, "click", move |event| {
            let Some(href) = source.get_attribute("href") else {
                return;
            };
            if !is_internal_href(&href) {
                return;
            }

            event.prevent_default();
            set_style(&body, "transition", FADE_OUT_TRANSITION);
            set_style(&body, "opacity", "0");

            // Earlier pending navigations are not cancelled.
            Timeout::new(FADE_OUT_MS, move || {
                if let Ok(window) = dom::window() {
                    let _ = window.location().set_href(&href);
                }
            })
            .forget();
        });
    }

    Ok(Outcome::Started)
}

struct MenuController {
    state: RefCell<MenuState>,
    panel: HtmlElement,
    bars: Vec<HtmlElement>,
}

impl MenuController {
    fn toggle(&self) {
        self.state.borrow_mut().toggle();
        self.render();
    }

    fn close(&self) {
        let changed = self.state.borrow_mut().close();
        if changed {
            self.render();
        }
    }

    fn render(&self) {
        let state = *self.state.borrow();
        let _ = self
            .panel
            .class_list()
            .toggle_with_force(OPEN_CLASS, state.is_open());

        for (bar, style) in self.bars.iter().zip(state.icon()) {
            set_style(bar, style.property, style.value);
        }
    }
}

pub fn init_mobile_menu(document: &Document) -> Result<Outcome, JsValue> {
    let (Some(toggle), Some(panel)) = (
        dom::query(document, MENU_TOGGLE_SELECTOR)?,
        dom::query(document, NAV_PANEL_SELECTOR)?,
    ) else {
        return Ok(Outcome::Skipped("missing_menu_elements"));
    };

    let controller = Rc::new(MenuController {
        state: RefCell::new(MenuState::from_class_present(
            panel.class_list().contains(OPEN_CLASS),
        )),
        bars: dom::query_all_in(&toggle, ICON_BAR_SELECTOR)?,
        panel: panel.clone(),
    });

    {
        let controller = Rc::clone(&controller);
        listen(&toggle, "click", move |_| controller.toggle());
    }

    for link in dom::query_all(document, NAV_LINK_SELECTOR)? {
        let controller = Rc::clone(&controller);
        listen(&link, "click", move |_| controller.close());
    }

    listen(document, "click", move |event| {
        let outside = controller.state.borrow().should_close_on_click(
            dom::event_within(event, &panel),
            dom::event_within(event, &toggle),
        );
        if outside {
            controller.close();
        }
    });

    Ok(Outcome::Started)
}

pub fn init_smooth_scroll(document: &Document) -> Result<Outcome, JsValue> {
    let anchors = dom::query_all(document, FRAGMENT_LINK_SELECTOR)?;
    if anchors.is_empty() {
        return Ok(Outcome::Skipped("no_fragment_links"));
    }

    for anchor in anchors {
        let source = anchor.clone();
        let document = document.clone();

        listen_preventable(&anchor, "click", move |event| {
            event.prevent_default();

            let href = source.get_attribute("href").unwrap_or_default();
            let Some(target) = fragment_target(&href).and_then(|id| document.get_element_by_id(id))
            else {
                return;
            };

            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        });
    }

    Ok(Outcome::Started)
}

pub fn init_certificates(document: &Document) -> Result<Outcome, JsValue> {
    let buttons = dom::query_all(document, CERTIFICATE_BUTTON_SELECTOR)?;
    if buttons.is_empty() {
        return Ok(Outcome::Skipped("no_certificate_buttons"));
    }

    for button in buttons {
        let source = button.clone();

        listen_preventable(&button, "click", move |event| {
            event.prevent_default();
            if let Some(cert_name) = source.get_attribute(CERT_ATTRIBUTE) {
                open_certificate(&cert_name);
            }
        });
    }

    Ok(Outcome::Started)
}

fn open_certificate(cert_name: &str) {
    let Ok(window) = dom::window() else {
        return;
    };
    let path = certificate_path(cert_name);

    match window.open_with_url_and_target(&path, "_blank") {
        Ok(Some(_)) => {
            log_event(
                LogLevel::Debug,
                "certificate_opened",
                serde_json::json!({ "path": path }),
            );
        }
        Ok(None) | Err(_) => {
            log_event(
                LogLevel::Warn,
                "popup_blocked",
                serde_json::json!({ "path": path }),
            );
            let _ = window.alert_with_message(POPUP_BLOCKED_MESSAGE);
        }
    }
}
