use thiserror::Error;

/// Everything that can go wrong when building or driving an [`Economy`](crate::Economy).
///
/// Not being able to afford a purchase is *not* an error; those calls return
/// `Ok(false)`.
#[derive(Debug, Error)]
pub enum EconomyError {
    #[error("unit index {index} out of range (roster has {len} units)")]
    UnknownUnit { index: usize, len: usize },

    #[error("an economy needs at least one unit")]
    EmptyRoster,

    #[error("invalid definition for `{name}`: {reason}")]
    InvalidDefinition { name: String, reason: String },

    #[error("invalid session: {0}")]
    InvalidSession(String),

    #[error("malformed economy config: {0}")]
    Config(#[from] serde_json::Error),
}
