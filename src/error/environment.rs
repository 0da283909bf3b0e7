use std::fmt::{ Display, Formatter };

#[derive(Debug, Clone, PartialEq)]
pub enum EnvironmentError {
    Unavailable(String),
    Storage(String),
    MediaQuery(String),
    Platform(String),
}

impl Display for EnvironmentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvironmentError::Unavailable(what) => write!(f, "Unavailable: {}", what),
            EnvironmentError::Storage(msg) => write!(f, "Storage Error: {}", msg),
            EnvironmentError::MediaQuery(msg) => write!(f, "Media Query Error: {}", msg),
            EnvironmentError::Platform(msg) => write!(f, "Platform Error: {}", msg),
        }
    }
}

impl std::error::Error for EnvironmentError {}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for EnvironmentError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        EnvironmentError::Platform(format!("{:?}", value))
    }
}
