use alloc::string::String;

/// Errors raised while building a [`crate::Sequence`] or its options.
///
/// Configuration is validated once, at construction. Navigation itself never fails: a trigger
/// that resolves to no target is a silent no-op.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("unknown value `{value}` for option `{option}`")]
    UnknownValue { option: &'static str, value: String },

    #[error("invalid value `{value}` for option `{option}`: {reason}")]
    InvalidValue {
        option: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("a sequence needs at least one item")]
    EmptySequence,

    #[error("container extent must be greater than zero")]
    EmptyContainer,
}

impl ConfigError {
    pub(crate) fn unknown_value(option: &'static str, value: &str) -> Self {
        Self::UnknownValue {
            option,
            value: value.into(),
        }
    }
}
