use thiserror::Error;

/// Misconfiguration of a reveal primitive. These are caller contract
/// violations; the engine itself has no runtime failure states.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RevealError {
    #[error("visibility threshold {0} is outside 0.0..=1.0")]
    ThresholdOutOfRange(f64),
    #[error("count-up duration must be greater than zero")]
    ZeroDuration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            RevealError::ThresholdOutOfRange(1.5).to_string(),
            "visibility threshold 1.5 is outside 0.0..=1.0"
        );
        assert_eq!(
            RevealError::ZeroDuration.to_string(),
            "count-up duration must be greater than zero"
        );
    }
}
