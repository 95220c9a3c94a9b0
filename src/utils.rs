pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    //
    // For more details see
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

pub fn init_logging() {
    console_log::init_with_level(log::Level::Warn).unwrap_or(());
}

#[macro_export]
macro_rules! console_warn {
  ($($arg:tt)*) => (
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(&format!($($arg)*)))
  )
}

#[macro_export]
macro_rules! console_error {
  ($($arg:tt)*) => (
    web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(&format!($($arg)*)))
  )
}
