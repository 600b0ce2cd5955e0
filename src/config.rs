use serde::Deserialize;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Host element the page mounts into. Falls back to `<body>` when absent.
pub const MOUNT_ID: &str = "landing-root";

/// Global the host page may set to pass layout hints.
pub const OPTIONS_GLOBAL: &str = "__LANDING_OPTIONS";

pub const CONTACT_SECTION_ID: &str = "contact";

/// Where the primary call-to-action jumps to.
pub fn contact_href() -> String {
    format!("#{}", CONTACT_SECTION_ID)
}

/// Optional box size for the outer container. Values are CSS lengths and are
/// passed through as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RenderOptions {
    #[serde(default)]
    pub width: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
}

impl RenderOptions {
    pub fn container_style(&self) -> Option<String> {
        let mut style = String::new();
        if let Some(width) = &self.width {
            style.push_str(&format!("width: {};", width));
        }
        if let Some(height) = &self.height {
            style.push_str(&format!("height: {};", height));
        }
        if style.is_empty() {
            None
        } else {
            Some(style)
        }
    }
}

/// Reads `window.__LANDING_OPTIONS`. A missing global means defaults.
pub fn render_options() -> Result<RenderOptions, String> {
    let win = window().ok_or_else(|| "no window available".to_string())?;
    let raw = js_sys::Reflect::get(&win, &JsValue::from_str(OPTIONS_GLOBAL))
        .unwrap_or(JsValue::UNDEFINED);
    if raw.is_undefined() || raw.is_null() {
        return Ok(RenderOptions::default());
    }
    serde_wasm_bindgen::from_value::<RenderOptions>(raw)
        .map_err(|e| format!("Failed to parse {}: {:?}", OPTIONS_GLOBAL, e))
}
