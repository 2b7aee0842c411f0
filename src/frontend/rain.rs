use super::dom::{self, set_style};
use super::Outcome;
use crate::effects::rain::{
    RainField, RAIN_CANVAS_STYLES, RAIN_FADE_FILL, RAIN_FRAME_MS, RAIN_GLYPH_FILL,
};
use gloo_timers::callback::Interval;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

pub fn start_matrix_rain(document: &Document) -> Result<Outcome, JsValue> {
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("missing body"))?;
    let (width, height) = dom::viewport_size(&dom::window()?);

    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    for (property, value) in RAIN_CANVAS_STYLES {
        set_style(&canvas, property, value);
    }
    body.append_child(&canvas)?;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into()?;

    let mut field = RainField::new(width, height);
    let font = field.font();

    Interval::new(RAIN_FRAME_MS, move || {
        context.set_fill_style_str(RAIN_FADE_FILL);
        context.fill_rect(0.0, 0.0, width, height);
        context.set_fill_style_str(RAIN_GLYPH_FILL);
        context.set_font(&font);

        for glyph in field.step(js_sys::Math::random) {
            let _ = context.fill_text(glyph.ch.encode_utf8(&mut [0; 4]), glyph.x, glyph.y);
        }
    })
    .forget();

    Ok(Outcome::Started)
}
