use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonKind {
    Add,
    Minus,
    Multiply,
    Divide,
    Modulus,
    Equals,
    Clear,
    Delete,
    Period,
    Input,
}

impl ButtonKind {
    /// Maps a submitted form key to its button family. Digits and any other
    /// key append their values verbatim.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "add" => Self::Add,
            "minus" => Self::Minus,
            "multiply" => Self::Multiply,
            "divide" => Self::Divide,
            "modulus" => Self::Modulus,
            "equals" => Self::Equals,
            "c" => Self::Clear,
            "delete" => Self::Delete,
            "period" => Self::Period,
            _ => Self::Input,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Add => "add",
            Self::Minus => "minus",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Modulus => "modulus",
            Self::Equals => "equals",
            Self::Clear => "c",
            Self::Delete => "delete",
            Self::Period => "period",
            Self::Input => "input",
        }
    }

    #[must_use]
    pub const fn default_value(&self) -> Option<&'static str> {
        match self {
            Self::Add => Some("+"),
            Self::Minus => Some("-"),
            Self::Multiply => Some("*"),
            Self::Divide => Some("/"),
            Self::Period => Some("."),
            Self::Modulus | Self::Equals | Self::Clear | Self::Delete | Self::Input => None,
        }
    }

    #[must_use]
    pub const fn is_arithmetic(&self) -> bool {
        matches!(self, Self::Add | Self::Minus | Self::Multiply | Self::Divide)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_round_trips_known_keys() {
        for kind in [
            ButtonKind::Add,
            ButtonKind::Minus,
            ButtonKind::Multiply,
            ButtonKind::Divide,
            ButtonKind::Modulus,
            ButtonKind::Equals,
            ButtonKind::Clear,
            ButtonKind::Delete,
            ButtonKind::Period,
        ] {
            assert_eq!(ButtonKind::from_key(kind.as_str()), kind);
        }
    }

    #[test]
    fn test_unknown_keys_are_input() {
        assert_eq!(ButtonKind::from_key("7"), ButtonKind::Input);
        assert_eq!(ButtonKind::from_key("number"), ButtonKind::Input);
        assert_eq!(ButtonKind::from_key(""), ButtonKind::Input);
    }

    #[test]
    fn test_arithmetic_keys() {
        assert!(ButtonKind::Minus.is_arithmetic());
        assert!(!ButtonKind::Modulus.is_arithmetic());
        assert!(!ButtonKind::Period.is_arithmetic());
    }
}
