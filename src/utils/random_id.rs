//! Random v4-style identifiers.
//!
//! Browsers only expose `crypto.randomUUID` in secure contexts, so the
//! template fallback covers plain-http dev servers and native builds.

const UUID_TEMPLATE: &str = "xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx";

pub fn random_uuid() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(id) = platform_uuid() {
            return id;
        }
    }

    fallback_uuid(random_unit)
}

/// Fills the template from `random`, which must yield values in `[0, 1)`.
pub fn fallback_uuid(mut random: impl FnMut() -> f64) -> String {
    UUID_TEMPLATE.chars()
        .map(|c| match c {
            'x' | 'y' => {
                let r = ((random() * 16.0) as u32) & 0xf;
                let v = if c == 'x' { r } else { (r & 0x3) | 0x8 };
                char::from_digit(v, 16).unwrap_or('0')
            }
            other => other,
        })
        .collect()
}

#[cfg(target_arch = "wasm32")]
fn platform_uuid() -> Option<String> {
    let crypto = web_sys::window()?.crypto().ok()?;
    let has_random_uuid = js_sys::Reflect::has(&crypto, &wasm_bindgen::JsValue::from_str("randomUUID"))
        .unwrap_or(false);
    if has_random_uuid {
        Some(crypto.random_uuid())
    } else {
        log::debug!("crypto.randomUUID unavailable, using fallback generator");
        None
    }
}

#[cfg(target_arch = "wasm32")]
fn random_unit() -> f64 {
    js_sys::Math::random()
}

#[cfg(not(target_arch = "wasm32"))]
fn random_unit() -> f64 {
    rand::random::<f64>()
}
