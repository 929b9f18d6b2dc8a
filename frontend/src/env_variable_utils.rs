use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::window;

// Reads a key from the `ENV_CONFIG` object the hosting page injects into `window`.
pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    let env_config = Reflect::get(&window, &JsValue::from_str("ENV_CONFIG")).ok()?;

    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - using built-in defaults");
        return None;
    }

    let value = Reflect::get(&env_config, &JsValue::from_str(key)).ok()?;

    if value.is_undefined() {
        log::debug!("Environment variable '{}' is undefined", key);
        return None;
    }

    // Numbers and booleans are accepted as well as strings
    value
        .as_string()
        .or_else(|| value.as_f64().map(|n| n.to_string()))
        .or_else(|| value.as_bool().map(|b| b.to_string()))
}
