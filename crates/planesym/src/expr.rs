//! Arithmetic evaluation of typed amounts such as `360/7` or `-(1/3)*90`.
//!
//! Grammar (whitespace ignored between tokens):
//!
//! ```text
//! expr  := term (('+' | '-') term)*
//! term  := unary (('*' | '/') unary)*
//! unary := ('+' | '-') unary | atom
//! atom  := number | "pi" | '(' expr ')'
//! ```
//!
//! Numbers are decimal with an optional exponent (`1.5e2`). Nothing else is
//! accepted: no identifiers besides `pi`, no function calls.

use std::f64::consts::PI;

use crate::error::ExprError;

/// Evaluate `src`. The result is always finite.
pub fn eval(src: &str) -> Result<f64, ExprError> {
    let mut p = Parser {
        src,
        bytes: src.as_bytes(),
        pos: 0,
    };
    p.skip_ws();
    if p.at_end() {
        return Err(ExprError::Empty);
    }
    let v = p.expr()?;
    p.skip_ws();
    if !p.at_end() {
        return Err(ExprError::Trailing(p.pos));
    }
    if !v.is_finite() {
        return Err(ExprError::NotFinite);
    }
    Ok(v)
}

struct Parser<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl Parser<'_> {
    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// Next non-whitespace byte, not consumed.
    fn next_token(&mut self) -> Option<u8> {
        self.skip_ws();
        self.peek()
    }

    fn unexpected(&self) -> ExprError {
        match self.src[self.pos..].chars().next() {
            Some(ch) => ExprError::UnexpectedChar { ch, pos: self.pos },
            None => ExprError::UnexpectedEnd,
        }
    }

    fn expr(&mut self) -> Result<f64, ExprError> {
        let mut acc = self.term()?;
        loop {
            match self.next_token() {
                Some(b'+') => {
                    self.pos += 1;
                    acc += self.term()?;
                }
                Some(b'-') => {
                    self.pos += 1;
                    acc -= self.term()?;
                }
                _ => return Ok(acc),
            }
        }
    }

    fn term(&mut self) -> Result<f64, ExprError> {
        let mut acc = self.unary()?;
        loop {
            match self.next_token() {
                Some(b'*') => {
                    self.pos += 1;
                    acc *= self.unary()?;
                }
                Some(b'/') => {
                    self.pos += 1;
                    let d = self.unary()?;
                    if d == 0.0 {
                        return Err(ExprError::DivisionByZero);
                    }
                    acc /= d;
                }
                _ => return Ok(acc),
            }
        }
    }

    fn unary(&mut self) -> Result<f64, ExprError> {
        match self.next_token() {
            Some(b'-') => {
                self.pos += 1;
                Ok(-self.unary()?)
            }
            Some(b'+') => {
                self.pos += 1;
                self.unary()
            }
            _ => self.atom(),
        }
    }

    fn atom(&mut self) -> Result<f64, ExprError> {
        match self.next_token() {
            None => Err(ExprError::UnexpectedEnd),
            Some(b'(') => {
                self.pos += 1;
                let v = self.expr()?;
                if self.next_token() != Some(b')') {
                    return Err(self.unexpected());
                }
                self.pos += 1;
                Ok(v)
            }
            Some(b) if b.is_ascii_digit() || b == b'.' => self.number(),
            Some(b) if b.is_ascii_alphabetic() => self.ident(),
            Some(_) => Err(self.unexpected()),
        }
    }

    fn number(&mut self) -> Result<f64, ExprError> {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_digit() || b == b'.') {
            self.pos += 1;
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            let save = self.pos;
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
                while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
                    self.pos += 1;
                }
            } else {
                // Not an exponent; leave `e` for the caller to reject.
                self.pos = save;
            }
        }
        let text = &self.src[start..self.pos];
        text.parse::<f64>()
            .map_err(|_| ExprError::BadNumber(text.to_string()))
    }

    fn ident(&mut self) -> Result<f64, ExprError> {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_alphanumeric() || b == b'_') {
            self.pos += 1;
        }
        match &self.src[start..self.pos] {
            "pi" | "PI" => Ok(PI),
            other => Err(ExprError::UnknownIdent(other.to_string())),
        }
    }
}
