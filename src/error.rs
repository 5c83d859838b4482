use thiserror::Error;

/// Why a remote script never became usable.
///
/// `Clone` because one outcome is shared by every caller waiting on the same
/// library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("script `{id}` failed to load")]
    Failed { id: &'static str },

    #[error("script `{id}` was abandoned before it finished loading")]
    Abandoned { id: &'static str },

    #[error("could not insert script `{id}`: {reason}")]
    Dom { id: &'static str, reason: String },
}

/// Why the animated background could not be constructed.
#[derive(Debug, Error)]
pub enum EffectError {
    #[error("animation library unavailable: {0}")]
    Unavailable(String),

    #[error("could not serialize effect options: {0}")]
    Options(#[from] serde_json::Error),

    #[error("could not build effect options: {0}")]
    Js(String),
}
