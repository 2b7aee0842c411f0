//! Browser wiring. Each initializer looks up its elements once, attaches its
//! listeners, and reports whether it started.

mod dom;
mod page;
mod pointer;
mod rain;
mod scroll;
mod typing;

use crate::config::{BannerLine, EffectsConfig, CONFIG_ELEMENT_ID};
use crate::effects::typing::stops_on_pagehide;
use crate::telemetry::{log_event, set_log_level, LogLevel};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, PageTransitionEvent};

pub enum Outcome {
    Started,
    Skipped(&'static str),
}

fn load_config(document: &Document) -> EffectsConfig {
    let Some(source) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return EffectsConfig::default();
    };

    EffectsConfig::from_json(&source).unwrap_or_else(|error| {
        log_event(
            LogLevel::Warn,
            "config_invalid",
            serde_json::json!({ "error": error.to_string() }),
        );
        EffectsConfig::default()
    })
}

fn print_banner(lines: &[BannerLine]) {
    for line in lines {
        web_sys::console::log_2(
            &JsValue::from_str(&format!("%c{}", line.text)),
            &JsValue::from_str(&line.style),
        );
    }
}

fn report(feature: &str, result: Result<Outcome, JsValue>) -> bool {
    match result {
        Ok(Outcome::Started) => true,
        Ok(Outcome::Skipped(reason)) => {
            log_event(
                LogLevel::Debug,
                "feature_skipped",
                serde_json::json!({ "feature": feature, "reason": reason }),
            );
            false
        }
        Err(error) => {
            log_event(
                LogLevel::Warn,
                "feature_failed",
                serde_json::json!({
                    "feature": feature,
                    "error": error.as_string().unwrap_or_else(|| format!("{error:?}")),
                }),
            );
            false
        }
    }
}

fn init_typing(document: &Document, config: &EffectsConfig) -> Result<Outcome, JsValue> {
    let Some(handle) = typing::start_typing(document, config)? else {
        return Ok(Outcome::Skipped("no_typing_element"));
    };

    dom::listen(&dom::window()?, "pagehide", move |event| {
        let persisted = event
            .dyn_ref::<PageTransitionEvent>()
            .is_some_and(PageTransitionEvent::persisted);
        if stops_on_pagehide(persisted) {
            handle.stop();
        }
    });
    Ok(Outcome::Started)
}

pub fn run() {
    console_error_panic_hook::set_once();

    let document = match dom::document() {
        Ok(document) => document,
        Err(error) => {
            web_sys::console::error_1(&error);
            return;
        }
    };

    let config = load_config(&document);
    set_log_level(config.log_level);
    print_banner(&config.banner);

    // Parallax is attached before glow so glow re-measures after the shift.
    let outcomes = [
        ("navigation", page::init_navigation(&document)),
        ("page_transitions", page::init_page_transitions(&document)),
        ("tilt", pointer::init_tilt(&document)),
        ("typing", init_typing(&document, &config)),
        ("scroll_reveal", scroll::init_scroll_reveal(&document)),
        ("mobile_menu", page::init_mobile_menu(&document)),
        ("certificates", page::init_certificates(&document)),
        ("parallax", scroll::init_parallax(&document)),
        ("glow", pointer::init_glow(&document)),
        ("smooth_scroll", page::init_smooth_scroll(&document)),
        (
            "matrix_rain",
            if config.matrix_rain {
                rain::start_matrix_rain(&document)
            } else {
                Ok(Outcome::Skipped("disabled"))
            },
        ),
    ];

    let total = outcomes.len();
    let started = outcomes
        .into_iter()
        .map(|(feature, result)| report(feature, result))
        .filter(|started| *started)
        .count();
    log_event(
        LogLevel::Info,
        "effects_started",
        serde_json::json!({ "started": started, "total": total }),
    );
}
