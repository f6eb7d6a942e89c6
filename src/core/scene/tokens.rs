//=========================================================================
// Token Reader
//=========================================================================
//
// Whitespace-delimited, forward-only reader over configuration text.
//
// Field reads behave according to the `ParseMode`:
//
//   Lenient: missing field    → default value (0 / 0.0 / "")
//            unparsable field → token consumed, default value
//            channel > 255    → wrapped to 8 bits
//   Strict:  each of the above is a `SceneError`
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::str::FromStr;

//=== External Crates =====================================================

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::core::error::SceneError;

//=== ParseMode ===========================================================

/// How malformed configuration input is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Skip unknown directives and default missing or bad fields.
    #[default]
    Lenient,

    /// Reject anything the grammar does not describe.
    Strict,
}

//=== Token ===============================================================

/// A single whitespace-delimited word and the 1-based line it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub line: usize,
}

//=== TokenReader =========================================================

/// Forward-only token stream with typed field reads.
pub struct TokenReader<'a> {
    tokens: std::vec::IntoIter<Token<'a>>,
    mode: ParseMode,
    line: usize,
}

impl<'a> TokenReader<'a> {
    pub fn new(text: &'a str, mode: ParseMode) -> Self {
        let tokens: Vec<Token<'a>> = text
            .lines()
            .enumerate()
            .flat_map(|(index, line)| {
                line.split_whitespace().map(move |word| Token { text: word, line: index + 1 })
            })
            .collect();

        Self {
            tokens: tokens.into_iter(),
            mode,
            line: 0,
        }
    }

    /// Line of the most recently consumed token.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Consumes the next token, if any.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        let token = self.tokens.next()?;
        self.line = token.line;
        Some(token)
    }

    //--- Field Reads ------------------------------------------------------

    pub fn read_string(&mut self, field: &'static str) -> Result<String, SceneError> {
        Ok(self
            .next_field(field)?
            .map(|token| token.text.to_owned())
            .unwrap_or_default())
    }

    pub fn read_u32(&mut self, field: &'static str) -> Result<u32, SceneError> {
        self.read_number(field, "unsigned integer")
    }

    pub fn read_f32(&mut self, field: &'static str) -> Result<f32, SceneError> {
        self.read_number(field, "number")
    }

    /// Reads one 8-bit color channel.
    pub fn read_channel(&mut self, field: &'static str) -> Result<u8, SceneError> {
        let value = self.read_u32(field)?;
        if value > u32::from(u8::MAX) {
            if self.mode == ParseMode::Strict {
                return Err(SceneError::ColorOutOfRange { value, line: self.line, field });
            }
            warn!(
                target: "scene::parser",
                "line {}: color channel `{}` is {}, wrapping to {}",
                self.line,
                field,
                value,
                value as u8
            );
        }
        Ok(value as u8)
    }

    //--- Internal Helpers -------------------------------------------------

    fn next_field(&mut self, field: &'static str) -> Result<Option<Token<'a>>, SceneError> {
        match self.next_token() {
            Some(token) => Ok(Some(token)),
            None if self.mode == ParseMode::Strict => Err(SceneError::UnexpectedEnd { field }),
            None => {
                debug!(target: "scene::parser", "Config ended before `{}`, using default", field);
                Ok(None)
            }
        }
    }

    fn read_number<T>(&mut self, field: &'static str, expected: &'static str) -> Result<T, SceneError>
    where
        T: FromStr + Default,
    {
        let Some(token) = self.next_field(field)? else {
            return Ok(T::default());
        };

        match token.text.parse::<T>() {
            Ok(value) => Ok(value),
            Err(_) if self.mode == ParseMode::Strict => Err(SceneError::InvalidNumber {
                token: token.text.to_owned(),
                line: token.line,
                field,
                expected,
            }),
            Err(_) => {
                warn!(
                    target: "scene::parser",
                    "line {}: `{}` is not a valid {} for `{}`, using default",
                    token.line,
                    token.text,
                    expected,
                    field
                );
                Ok(T::default())
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_carry_line_numbers() {
        let mut reader = TokenReader::new("Window 800\n\n  600 Font", ParseMode::Lenient);

        assert_eq!(reader.next_token(), Some(Token { text: "Window", line: 1 }));
        assert_eq!(reader.next_token(), Some(Token { text: "800", line: 1 }));
        assert_eq!(reader.next_token(), Some(Token { text: "600", line: 3 }));
        assert_eq!(reader.line(), 3);
        assert_eq!(reader.next_token(), Some(Token { text: "Font", line: 3 }));
        assert_eq!(reader.next_token(), None);
    }

    #[test]
    fn typed_reads() {
        let mut reader = TokenReader::new("label 12 -3.5 7", ParseMode::Strict);

        assert_eq!(reader.read_string("label").unwrap(), "label");
        assert_eq!(reader.read_u32("size").unwrap(), 12);
        assert_eq!(reader.read_f32("x").unwrap(), -3.5);
        assert_eq!(reader.read_f32("y").unwrap(), 7.0);
    }

    #[test]
    fn lenient_defaults_missing_fields() {
        let mut reader = TokenReader::new("", ParseMode::Lenient);

        assert_eq!(reader.read_string("label").unwrap(), "");
        assert_eq!(reader.read_u32("size").unwrap(), 0);
        assert_eq!(reader.read_f32("x").unwrap(), 0.0);
    }

    #[test]
    fn lenient_consumes_and_defaults_bad_numbers() {
        let mut reader = TokenReader::new("abc 5", ParseMode::Lenient);

        assert_eq!(reader.read_f32("x").unwrap(), 0.0);
        assert_eq!(reader.read_f32("y").unwrap(), 5.0);
    }

    #[test]
    fn lenient_wraps_wide_channels() {
        let mut reader = TokenReader::new("300 255", ParseMode::Lenient);

        assert_eq!(reader.read_channel("r").unwrap(), 44);
        assert_eq!(reader.read_channel("g").unwrap(), 255);
    }

    #[test]
    fn strict_rejects_missing_field() {
        let mut reader = TokenReader::new("", ParseMode::Strict);

        let err = reader.read_f32("radius").unwrap_err();
        assert!(matches!(err, SceneError::UnexpectedEnd { field: "radius" }));
    }

    #[test]
    fn strict_rejects_bad_number() {
        let mut reader = TokenReader::new("\nten", ParseMode::Strict);

        match reader.read_u32("width") {
            Err(SceneError::InvalidNumber { token, line, field, .. }) => {
                assert_eq!(token, "ten");
                assert_eq!(line, 2);
                assert_eq!(field, "width");
            }
            other => panic!("Expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn strict_rejects_wide_channel() {
        let mut reader = TokenReader::new("256", ParseMode::Strict);

        let err = reader.read_channel("b").unwrap_err();
        assert!(matches!(err, SceneError::ColorOutOfRange { value: 256, field: "b", .. }));
    }

    #[test]
    fn default_mode_is_lenient() {
        assert_eq!(ParseMode::default(), ParseMode::Lenient);
    }
}
