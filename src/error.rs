use js_sys::Object;
use trigrid::TrigridError;
use wasm_bindgen::JsValue;

use crate::interop::{new_obj, set_kv};

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

fn data_obj(pairs: &[(&str, JsValue)]) -> Object {
    let d = new_obj();
    for (k, v) in pairs { set_kv(&d, k, v); }
    d
}

/// Error object for a core error, with its fields under `data`.
pub fn from_trigrid(e: &TrigridError) -> JsValue {
    let data = match e {
        TrigridError::InvalidMapSymbol { symbol, x, y } => Some(data_obj(&[
            ("symbol", JsValue::from_str(&symbol.to_string())),
            ("x", JsValue::from_f64(*x as f64)),
            ("y", JsValue::from_f64(*y as f64)),
        ])),
        TrigridError::RaggedMap { row, expected, found } => Some(data_obj(&[
            ("row", JsValue::from_f64(*row as f64)),
            ("expected", JsValue::from_f64(*expected as f64)),
            ("found", JsValue::from_f64(*found as f64)),
        ])),
        TrigridError::MapTooLarge { rows, cols } => Some(data_obj(&[
            ("rows", JsValue::from_f64(*rows as f64)),
            ("cols", JsValue::from_f64(*cols as f64)),
        ])),
        TrigridError::UnknownTarget { piece, region } => Some(data_obj(&[
            ("piece", JsValue::from_f64(*piece as f64)),
            ("region", region.map_or(JsValue::NULL, |r| JsValue::from_f64(r as f64))),
        ])),
        _ => None,
    };
    err(e.code(), e.to_string(), data.map(Into::into))
}

#[inline]
pub fn invalid_rows() -> JsValue {
    err("invalid_rows", "map must be an array of strings", None)
}

#[inline]
pub fn not_drawn() -> JsValue {
    err("not_drawn", "stage has not been drawn yet", None)
}
