//! Mouse-driven card effects: tilt with shine, and proximity glow.

use super::dom::{self, listen, set_style};
use super::Outcome;
use crate::effects::glow::{GlowCards, GLOW_SELECTOR};
use crate::effects::tilt::{
    Tilt, NEUTRAL_TRANSFORM, RESET_TRANSITION, SHINE_BASE_STYLES, SHINE_CLASS, TILT_CARD_SELECTOR,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, EventTarget, HtmlElement, MouseEvent, ResizeObserver};

struct TiltCard {
    card: HtmlElement,
    shine: RefCell<Option<HtmlElement>>,
}

impl TiltCard {
    fn new(card: HtmlElement) -> Self {
        let existing = card
            .query_selector(&format!(".{SHINE_CLASS}"))
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());

        Self {
            card,
            shine: RefCell::new(existing),
        }
    }

    fn shine(&self, document: &Document) -> Result<HtmlElement, JsValue> {
        if let Some(shine) = self.shine.borrow().as_ref() {
            return Ok(shine.clone());
        }

        let shine: HtmlElement = document.create_element("div")?.dyn_into()?;
        shine.set_class_name(SHINE_CLASS);
        for (property, value) in SHINE_BASE_STYLES {
            set_style(&shine, property, value);
        }
        set_style(&self.card, "position", "relative");
        self.card.append_child(&shine)?;

        *self.shine.borrow_mut() = Some(shine.clone());
        Ok(shine)
    }

    fn on_move(&self, document: &Document, event: &MouseEvent) {
        let tilt = Tilt::from_pointer(
            dom::client_rect(&self.card),
            f64::from(event.client_x()),
            f64::from(event.client_y()),
        );
        set_style(&self.card, "transform", &tilt.transform());

        if let Ok(shine) = self.shine(document) {
            set_style(&shine, "background", &tilt.shine_background());
            set_style(&shine, "opacity", "1");
        }
    }

    fn on_leave(&self) {
        set_style(&self.card, "transform", NEUTRAL_TRANSFORM);
        set_style(&self.card, "transition", RESET_TRANSITION);

        if let Some(shine) = self.shine.borrow().as_ref() {
            set_style(shine, "opacity", "0");
        }
    }
}

pub fn init_tilt(document: &Document) -> Result<Outcome, JsValue> {
    let cards = dom::query_all(document, TILT_CARD_SELECTOR)?;
    if cards.is_empty() {
        return Ok(Outcome::Skipped("no_tilt_cards"));
    }

    for card in cards {
        let tilt_card = Rc::new(TiltCard::new(card.clone()));

        {
            let tilt_card = Rc::clone(&tilt_card);
            let document = document.clone();
            listen(&card, "mousemove", move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    tilt_card.on_move(&document, event);
                }
            });
        }

        listen(&card, "mouseleave", move |_| tilt_card.on_leave());
    }

    Ok(Outcome::Started)
}

pub fn init_glow(document: &Document) -> Result<Outcome, JsValue> {
    let cards = dom::query_all(document, GLOW_SELECTOR)?;
    if cards.is_empty() {
        return Ok(Outcome::Skipped("no_glow_cards"));
    }

    let window = dom::window()?;
    let layout = Rc::new(RefCell::new(GlowCards::measure(cards, |card| {
        dom::client_rect(card)
    })));

    // Boxes move on scroll, resize, late asset loads and at the end of
    // reveal/tilt transitions.
    let stale_on: [(&EventTarget, &'static str); 4] = [
        (&window, "scroll"),
        (&window, "resize"),
        (&window, "load"),
        (document, "transitionend"),
    ];
    for (target, event_type) in stale_on {
        let layout = Rc::clone(&layout);
        listen(target, event_type, move |_| layout.borrow_mut().mark_stale());
    }

    // Reflow inside the page, such as the typing line wrapping, resizes the body.
    if let Some(body) = document.body() {
        let layout = Rc::clone(&layout);
        let on_resize = Closure::<dyn FnMut()>::new(move || layout.borrow_mut().mark_stale());
        let observer = ResizeObserver::new(on_resize.as_ref().unchecked_ref())?;
        observer.observe(&body);
        on_resize.forget();
    }

    listen(document, "mousemove", move |event| {
        if let Some(event) = event.dyn_ref::<MouseEvent>() {
            let mut layout = layout.borrow_mut();
            let shadows = layout.shadows(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
                |card| dom::client_rect(card),
            );
            for (card, shadow) in shadows {
                set_style(card, "box-shadow", &shadow);
            }
        }
    });

    Ok(Outcome::Started)
}
