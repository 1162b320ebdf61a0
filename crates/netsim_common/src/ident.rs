//! Identifier rules for signal and gate names.
//!
//! An identifier is a non-empty run of ASCII letters, digits and underscores
//! that does not start with a digit.

/// Why a token was rejected as an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdentError {
    /// The token was empty.
    #[error("identifier is empty")]
    Empty,
    /// The token starts with a digit.
    #[error("identifier starts with a digit")]
    LeadingDigit,
    /// The token contains a character outside `[A-Za-z0-9_]`.
    #[error("identifier contains invalid character '{0}'")]
    InvalidChar(char),
}

/// Checks a token against the identifier grammar.
pub fn validate_identifier(token: &str) -> Result<(), IdentError> {
    let mut chars = token.chars();
    let first = chars.next().ok_or(IdentError::Empty)?;
    if first.is_ascii_digit() {
        return Err(IdentError::LeadingDigit);
    }
    for c in std::iter::once(first).chain(chars) {
        if !(c.is_ascii_alphanumeric() || c == '_') {
            return Err(IdentError::InvalidChar(c));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        for name in ["A", "carry_out", "_t0", "x9"] {
            assert_eq!(validate_identifier(name), Ok(()), "{name}");
        }
    }

    #[test]
    fn rejects_leading_digit() {
        assert_eq!(validate_identifier("1a"), Err(IdentError::LeadingDigit));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(validate_identifier(""), Err(IdentError::Empty));
    }

    #[test]
    fn rejects_punctuation() {
        assert_eq!(validate_identifier("a-b"), Err(IdentError::InvalidChar('-')));
        assert_eq!(validate_identifier("a("), Err(IdentError::InvalidChar('(')));
        assert_eq!(validate_identifier("a b"), Err(IdentError::InvalidChar(' ')));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            IdentError::InvalidChar('$').to_string(),
            "identifier contains invalid character '$'"
        );
    }
}
