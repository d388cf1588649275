use crate::token::is_operator_token;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultDisplayed {
    #[default]
    Unset,
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFlags {
    /// The sequence holds a computed result rather than typed input.
    pub result_displayed: ResultDisplayed,
    /// An operator was pressed right after a result, which becomes the first operand.
    pub pending_operator_after_result: bool,
    /// The sequence holds a `*` immediately followed by a sign.
    pub multiply_then_minus: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSequence(Vec<String>);

impl TokenSequence {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn single<S: Into<String>>(token: S) -> Self {
        Self(vec![token.into()])
    }

    pub fn push<S: Into<String>>(&mut self, token: S) {
        self.0.push(token.into());
    }

    pub fn pop(&mut self) -> Option<String> {
        self.0.pop()
    }

    pub fn truncate(&mut self, len: usize) {
        self.0.truncate(len);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&str> {
        self.0.get(idx).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    /// Concatenates the tokens into the text shown to the user.
    #[must_use]
    pub fn render(&self) -> String {
        self.0.concat()
    }

    #[must_use]
    pub fn last_operator_position(&self) -> Option<usize> {
        self.0.iter().rposition(|token| is_operator_token(token))
    }

    /// Tokens after the last operator, or the whole sequence if there is none.
    #[must_use]
    pub fn current_operand(&self) -> &[String] {
        match self.last_operator_position() {
            Some(pos) => &self.0[pos + 1..],
            None => &self.0,
        }
    }

    #[must_use]
    pub fn has_decimal_in_current_operand(&self) -> bool {
        self.current_operand().iter().any(|token| token.contains('.'))
    }

    #[must_use]
    pub fn has_negative_multiplicand(&self) -> bool {
        self.0.windows(2).any(|pair| pair[0] == "*" && pair[1] == "-")
    }

    /// True while the last operator is the `-` of a `*`,`-` pair.
    #[must_use]
    pub fn ends_with_negative_multiplicand(&self) -> bool {
        match self.last_operator_position() {
            Some(pos) if pos > 0 => self.0[pos] == "-" && self.0[pos - 1] == "*",
            _ => false,
        }
    }
}

impl<'a> FromIterator<&'a str> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    pub sequence: TokenSequence,
    pub flags: DisplayFlags,
}

impl CalculatorState {
    #[must_use]
    pub const fn new(sequence: TokenSequence, flags: DisplayFlags) -> Self {
        Self { sequence, flags }
    }

    #[must_use]
    pub fn render(&self) -> String {
        self.sequence.render()
    }
}
