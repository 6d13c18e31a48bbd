pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown stroke code {code:?} for character {glyph:?}")]
    UnknownStrokeCode { glyph: char, code: char },

    #[error("Invalid catalog: {message}")]
    InvalidCatalog { message: String },

    #[error("Invalid config: {message}")]
    InvalidConfig { message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
