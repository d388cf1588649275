use calc_core::ButtonKind;
use std::fmt;

/// One button press as submitted by a form: a key plus the literal values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Press {
    pub key: String,
    pub values: Vec<String>,
}

impl Press {
    pub fn new<S: Into<String>>(key: S, values: Vec<String>) -> Self {
        Self {
            key: key.into(),
            values,
        }
    }

    /// Parses a command-line press.
    ///
    /// Accepts `KEY=VALUE`, a button key such as `add` or `equals`, the
    /// symbols `+ - * / % = .`, `C` and `DEL`, and plain digits.
    pub fn parse(arg: &str) -> Self {
        let key = match arg {
            "+" => "add",
            "-" => "minus",
            "*" => "multiply",
            "/" => "divide",
            "%" => "modulus",
            "=" => "equals",
            "." => "period",
            "C" => "c",
            "DEL" | "del" => "delete",
            _ => {
                if let Some((key, value)) = arg.split_once('=') {
                    return Self::new(key, vec![value.to_string()]);
                }
                if ButtonKind::from_key(arg) == ButtonKind::Input {
                    return Self::new("number", vec![arg.to_string()]);
                }
                arg
            }
        };

        Self::new(key, Vec::new())
    }
}

impl fmt::Display for Press {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.values.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}={}", self.key, self.values.concat())
        }
    }
}
