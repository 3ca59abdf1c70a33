use thiserror::Error;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("template `{key}`: {reason}")]
    Template { key: &'static str, reason: String },

    #[error("malformed language pack `{code}`: {source}")]
    Malformed {
        code:   String,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type I18nResult<T> = Result<T, I18nError>;
