use super::dom;
use crate::config::EffectsConfig;
use crate::effects::typing::{TypingMachine, TYPING_SELECTOR};
use gloo_timers::future::TimeoutFuture;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

/// Stops a running typewriter loop after its current delay.
#[derive(Clone, Default)]
pub struct TypingHandle {
    stopped: Rc<Cell<bool>>,
}

impl TypingHandle {
    pub fn stop(&self) {
        self.stopped.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

/// Starts the typewriter on the first `.typing-text` element. `None` when the
/// page has no such element.
pub fn start_typing(
    document: &Document,
    config: &EffectsConfig,
) -> Result<Option<TypingHandle>, JsValue> {
    let Some(host) = dom::query(document, TYPING_SELECTOR)? else {
        return Ok(None);
    };
    let Some(mut machine) = TypingMachine::new(&config.typing_texts, config.typing_delays) else {
        return Ok(None);
    };

    let handle = TypingHandle::default();
    let loop_handle = handle.clone();

    spawn_local(async move {
        while !loop_handle.is_stopped() && host.is_connected() {
            let step = machine.step();
            host.set_text_content(Some(&step.visible));
            TimeoutFuture::new(step.delay_ms).await;
        }
    });

    Ok(Some(handle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::typing::TypingDelays;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    fn quick_config() -> EffectsConfig {
        EffectsConfig {
            typing_texts: vec!["abcdefghijklmnop".to_string()],
            typing_delays: TypingDelays {
                type_ms: 10,
                delete_ms: 10,
                pause_at_end_ms: 10,
                pause_at_empty_ms: 10,
            },
            ..EffectsConfig::default()
        }
    }

    fn typing_host(document: &Document) -> web_sys::Element {
        let host = document.create_element("span").expect("create host");
        host.set_class_name("typing-text");
        document
            .body()
            .expect("test page has a body")
            .append_child(&host)
            .expect("attach host");
        host
    }

    #[wasm_bindgen_test]
    async fn stop_freezes_the_rendered_text() {
        let document = dom::document().expect("document");
        let host = typing_host(&document);

        let handle = start_typing(&document, &quick_config())
            .expect("start typing")
            .expect("host is present");
        TimeoutFuture::new(45).await;
        let before_stop = host.text_content().unwrap_or_default();
        assert!(!before_stop.is_empty());

        handle.stop();
        TimeoutFuture::new(15).await;
        let after_stop = host.text_content().unwrap_or_default();
        TimeoutFuture::new(60).await;

        assert!(handle.is_stopped());
        assert_eq!(host.text_content().unwrap_or_default(), after_stop);
        host.remove();
    }

    #[wasm_bindgen_test]
    async fn detached_host_ends_the_loop() {
        let document = dom::document().expect("document");
        let host = typing_host(&document);

        let handle = start_typing(&document, &quick_config())
            .expect("start typing")
            .expect("host is present");
        TimeoutFuture::new(25).await;
        host.remove();
        TimeoutFuture::new(15).await;
        let detached = host.text_content().unwrap_or_default();
        TimeoutFuture::new(60).await;

        assert!(!handle.is_stopped());
        assert_eq!(host.text_content().unwrap_or_default(), detached);
    }
}
