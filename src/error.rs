use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Embedded content not found: {0}")]
    ContentMissing(String),

    #[error("Couldn't parse embedded content: {0}")]
    ContentParse(#[from] serde_json::Error),

    #[error("Browser storage unavailable: {0}")]
    Storage(String),

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SiteError {
    pub fn storage(err: wasm_bindgen::JsValue) -> Self {
        Self::Storage(format!("{err:?}"))
    }

    pub fn dom(err: wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{err:?}"))
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
