use js_sys::{Array, Float64Array, Object, Reflect};
use wasm_bindgen::JsValue;

pub fn new_obj() -> Object { Object::new() }
pub fn set_kv(obj: &Object, k: &str, v: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(k), v);
}
pub fn arr_f64(slice: &[f64]) -> Float64Array {
    let arr = Float64Array::new_with_length(slice.len() as u32);
    arr.copy_from(slice); arr
}
/// Reads a JS array of strings; `None` if any entry is not a string.
pub fn string_rows(v: &JsValue) -> Option<Vec<String>> {
    if !Array::is_array(v) { return None; }
    Array::from(v).iter().map(|row| row.as_string()).collect()
}
