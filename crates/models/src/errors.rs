use thiserror::Error;

/// Failures raised while checking a catalog row.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A field is outside its allowed range or shape; nothing was written.
    #[error("invalid service: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_names_the_problem() {
        let e = ModelError::Validation("price must be a non-negative number".into());
        assert_eq!(e.to_string(), "invalid service: price must be a non-negative number");
    }
}
