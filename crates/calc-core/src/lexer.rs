pub struct Lexer {
    input: Vec<char>,
    pos: usize,
}

impl Lexer {
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            pos: 0,
        }
    }

    fn current(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.pos + 1).copied()
    }

    const fn advance(&mut self) {
        self.pos += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_operand(&mut self) -> String {
        let start = self.pos;
        while let Some(ch) = self.current() {
            if ch.is_whitespace() || is_operator_char(ch) {
                break;
            }
            self.advance();
        }
        self.input[start..self.pos].iter().collect()
    }

    fn next_token(&mut self) -> Option<String> {
        self.skip_whitespace();

        let ch = self.current()?;

        let token = match ch {
            '*' if self.peek() == Some('-') => {
                self.advance();
                self.advance();
                "*-".to_string()
            }
            _ if is_operator_char(ch) => {
                self.advance();
                ch.to_string()
            }
            _ => self.read_operand(),
        };

        Some(token)
    }

    pub fn tokenize(&mut self) -> Vec<String> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }
}

const fn is_operator_char(ch: char) -> bool {
    matches!(ch, '+' | '-' | '*' | '/' | '(' | ')')
}

/// Splits a raw expression into token strings.
///
/// Every operator and parenthesis becomes its own token, with `*-` matched
/// before `*` and `-`. Whatever lies between them is kept verbatim, so a
/// malformed operand survives here and is rejected by the evaluator.
#[must_use]
pub fn tokenize(raw: &str) -> Vec<String> {
    Lexer::new(raw).tokenize()
}

#[must_use]
pub fn tokenize_to_string(raw: &str) -> String {
    tokenize(raw).join(" ")
}
