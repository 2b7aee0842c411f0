use super::dom::{self, listen, set_style};
use super::Outcome;
use crate::effects::parallax::{parallax_transform, PARALLAX_SELECTOR};
use crate::effects::reveal::{
    stagger_transition, RevealStyle, RevealTracker, OBSERVER_ROOT_MARGIN, OBSERVER_THRESHOLD,
    REVEAL_SELECTOR,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

fn apply_reveal_style(element: &HtmlElement, style: &RevealStyle) {
    set_style(element, "opacity", style.opacity);
    set_style(element, "transform", &style.transform);
}

struct RevealSet {
    elements: Vec<HtmlElement>,
    trackers: RefCell<Vec<RevealTracker>>,
}

impl RevealSet {
    fn position(&self, target: &Element) -> Option<usize> {
        self.elements
            .iter()
            .position(|element| AsRef::<Element>::as_ref(element) == target)
    }

    fn on_entry(&self, entry: &IntersectionObserverEntry, observer: &IntersectionObserver) {
        let target = entry.target();
        let Some(index) = self.position(&target) else {
            return;
        };

        let revealed = self.trackers.borrow_mut()[index].on_intersection(entry.is_intersecting());
        if let Some(style) = revealed {
            apply_reveal_style(&self.elements[index], &style);
            observer.unobserve(&target);
        }
    }
}

pub fn init_scroll_reveal(document: &Document) -> Result<Outcome, JsValue> {
    let elements = dom::query_all(document, REVEAL_SELECTOR)?;
    if elements.is_empty() {
        return Ok(Outcome::Skipped("no_reveal_elements"));
    }

    let (_, viewport_height) = dom::viewport_size(&dom::window()?);
    let trackers: Vec<RevealTracker> = elements
        .iter()
        .map(|element| RevealTracker::at_setup(dom::client_rect(element), viewport_height))
        .collect();

    for (index, (element, tracker)) in elements.iter().zip(&trackers).enumerate() {
        apply_reveal_style(element, &tracker.initial_style());
        set_style(element, "transition", &stagger_transition(index));
    }

    let reveal_set = Rc::new(RevealSet {
        elements,
        trackers: RefCell::new(trackers),
    });

    let callback = {
        let reveal_set = Rc::clone(&reveal_set);
        Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        reveal_set.on_entry(&entry, &observer);
                    }
                }
            },
        )
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(OBSERVER_THRESHOLD));
    options.set_root_margin(OBSERVER_ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for element in &reveal_set.elements {
        observer.observe(element);
    }

    Ok(Outcome::Started)
}

pub fn init_parallax(document: &Document) -> Result<Outcome, JsValue> {
    let elements = dom::query_all(document, PARALLAX_SELECTOR)?;
    if elements.is_empty() {
        return Ok(Outcome::Skipped("no_parallax_elements"));
    }

    let window = dom::window()?;
    let scroll_source = window.clone();

    // Unthrottled: every scroll event repositions every element.
    listen(&window, "scroll", move |_| {
        let transform = parallax_transform(dom::scroll_y(&scroll_source));
        for element in &elements {
            set_style(element, "transform", &transform);
        }
    });

    Ok(Outcome::Started)
}
