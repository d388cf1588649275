use crate::error::{CalcError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),

    Plus,
    Minus,
    Multiply,
    Divide,
    MultiplyNegative,

    LeftParen,
    RightParen,
}

impl Token {
    /// Validates a raw token string into the closed token set.
    ///
    /// Anything that is not an operator or a parenthesis must parse as a
    /// decimal number.
    pub fn classify(raw: &str) -> Result<Self> {
        let token = match raw {
            "+" => Self::Plus,
            "-" => Self::Minus,
            "*" => Self::Multiply,
            "/" => Self::Divide,
            "*-" => Self::MultiplyNegative,
            "(" => Self::LeftParen,
            ")" => Self::RightParen,
            _ => raw
                .parse::<f64>()
                .map(Self::Number)
                .map_err(|_| CalcError::InvalidNumber(raw.to_string()))?,
        };
        Ok(token)
    }

    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 1,
            Self::Multiply | Self::Divide => 2,
            Self::MultiplyNegative => 3,
            Self::Number(_) | Self::LeftParen | Self::RightParen => 0,
        }
    }

    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(
            self,
            Self::Plus | Self::Minus | Self::Multiply | Self::Divide | Self::MultiplyNegative
        )
    }
}

/// True for the four plain binary operators a button can produce.
#[must_use]
pub fn is_binary_operator(raw: &str) -> bool {
    matches!(raw, "+" | "-" | "*" | "/")
}

/// True for every token that separates two operands: binary operators, the
/// composite `*-` and parentheses. Negative numbers such as `-5` do not count.
#[must_use]
pub fn is_operator_token(raw: &str) -> bool {
    is_binary_operator(raw) || matches!(raw, "*-" | "(" | ")")
}
