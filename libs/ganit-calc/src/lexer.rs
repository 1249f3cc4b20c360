//! Tokenizer for keypad expressions
//!
//! Understands the display glyphs directly, so nothing is rewritten as text
//! before parsing:
//!
//! | Input            | Token                     |
//! |------------------|---------------------------|
//! | `×` `*`          | multiply                  |
//! | `÷` `/`          | divide                    |
//! | `%`              | percent (divide by 100)   |
//! | `Mod`            | modulo                    |
//! | `^` `**`         | power                     |
//! | `π`              | pi                        |
//! | `e` (standalone) | Euler's number            |
//! | `√` `sqrt`       | square root               |
//! | `sin cos tan log`| scientific functions      |

use crate::builtin_functions::Function;
use crate::error::{CalcError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Plus,
    /// Operator tokens keep their spelling so messages echo what was typed
    Minus(&'static str),
    Star(&'static str),
    Slash(&'static str),
    Percent,
    Modulo,
    Power(&'static str),
    LParen,
    RParen,
    Pi,
    Euler,
    Function(Function),
}

impl Token {
    /// Short human-readable spelling used in error messages
    pub fn describe(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Plus => "+".into(),
            Self::Minus(spelling) | Self::Star(spelling) | Self::Slash(spelling) => {
                (*spelling).into()
            },
            Self::Percent => "%".into(),
            Self::Modulo => "Mod".into(),
            Self::Power(spelling) => (*spelling).into(),
            Self::LParen => "(".into(),
            Self::RParen => ")".into(),
            Self::Pi => "π".into(),
            Self::Euler => "e".into(),
            Self::Function(f) => f.name().into(),
        }
    }
}

/// Words the tokenizer splits letter runs into, longest first
const KEYWORDS: [&str; 7] = ["sqrt", "sin", "cos", "tan", "log", "Mod", "e"];

/// Split `input` into tokens.
///
/// With `scientific` off, `sin`, `cos`, `tan` and `log` are rejected as
/// unknown functions.
pub fn tokenize(input: &str, scientific: bool) -> Result<Vec<Token>> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::with_capacity(chars.len());
    let mut pos = 0;

    while pos < chars.len() {
        let c = chars[pos];
        match c {
            c if c.is_whitespace() => {
                pos += 1;
            },
            '0'..='9' | '.' => {
                let (number, next) = read_number(&chars, pos)?;
                tokens.push(Token::Number(number));
                pos = next;
            },
            '+' => {
                tokens.push(Token::Plus);
                pos += 1;
            },
            '-' => {
                tokens.push(Token::Minus("-"));
                pos += 1;
            },
            '−' => {
                tokens.push(Token::Minus("−"));
                pos += 1;
            },
            '*' if chars.get(pos + 1) == Some(&'*') => {
                tokens.push(Token::Power("**"));
                pos += 2;
            },
            '*' => {
                tokens.push(Token::Star("*"));
                pos += 1;
            },
            '×' => {
                tokens.push(Token::Star("×"));
                pos += 1;
            },
            '/' => {
                tokens.push(Token::Slash("/"));
                pos += 1;
            },
            '÷' => {
                tokens.push(Token::Slash("÷"));
                pos += 1;
            },
            '%' => {
                tokens.push(Token::Percent);
                pos += 1;
            },
            '^' => {
                tokens.push(Token::Power("^"));
                pos += 1;
            },
            '(' => {
                tokens.push(Token::LParen);
                pos += 1;
            },
            ')' => {
                tokens.push(Token::RParen);
                pos += 1;
            },
            'π' => {
                tokens.push(Token::Pi);
                pos += 1;
            },
            '√' => {
                tokens.push(Token::Function(Function::Sqrt));
                pos += 1;
            },
            c if c.is_ascii_alphabetic() => {
                let start = pos;
                while pos < chars.len() && chars[pos].is_ascii_alphabetic() {
                    pos += 1;
                }
                let word: String = chars[start..pos].iter().collect();
                split_word(&word, start, scientific, &mut tokens)?;
            },
            other => {
                return Err(CalcError::syntax(format!(
                    "unexpected character '{}' at position {}",
                    other, pos
                )));
            },
        }
    }

    Ok(tokens)
}

/// Read a decimal literal starting at `start`; returns the value and the next
/// position. Exponent notation is not accepted since `e` is Euler's number.
fn read_number(chars: &[char], start: usize) -> Result<(f64, usize)> {
    let mut pos = start;
    let mut seen_dot = false;

    while pos < chars.len() {
        match chars[pos] {
            '0'..='9' => pos += 1,
            '.' if !seen_dot => {
                seen_dot = true;
                pos += 1;
            },
            '.' => {
                return Err(CalcError::syntax(format!(
                    "malformed number at position {}",
                    start
                )));
            },
            _ => break,
        }
    }

    let literal: String = chars[start..pos].iter().collect();
    literal
        .parse::<f64>()
        .map(|n| (n, pos))
        .map_err(|_| CalcError::syntax(format!("malformed number '{}'", literal)))
}

/// Break a run of letters into keywords. Letters are never substituted one
/// by one, so an `e` only becomes Euler's number when it stands as its own
/// keyword.
fn split_word(word: &str, offset: usize, scientific: bool, tokens: &mut Vec<Token>) -> Result<()> {
    let mut rest = word;

    while !rest.is_empty() {
        let keyword = KEYWORDS
            .iter()
            .find(|k| rest.starts_with(*k))
            .ok_or_else(|| {
                CalcError::syntax(format!(
                    "unknown identifier '{}' at position {}",
                    word, offset
                ))
            })?;

        let token = match *keyword {
            "Mod" => Token::Modulo,
            "e" => Token::Euler,
            name => match Function::from_name(name) {
                Some(f) if scientific || !f.is_scientific() => Token::Function(f),
                _ => {
                    return Err(CalcError::syntax(format!("unknown function '{}'", name)));
                },
            },
        };
        tokens.push(token);
        rest = &rest[keyword.len()..];
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_glyph_operators() {
        let tokens = tokenize("2×3÷4", true).unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number(2.0),
                Token::Star("×"),
                Token::Number(3.0),
                Token::Slash("÷"),
                Token::Number(4.0),
            ]
        );
    }

    #[test]
    fn test_double_star_is_power() {
        let tokens = tokenize("2**3", true).unwrap();
        assert_eq!(tokens[1], Token::Power("**"));
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_describe_echoes_typed_spelling() {
        let tokens = tokenize("6*2/3−1", true).unwrap();
        let spelled: Vec<String> = tokens.iter().map(Token::describe).collect();
        assert_eq!(spelled, vec!["6", "*", "2", "/", "3", "−", "1"]);
        assert_eq!(tokenize("2×3", true).unwrap()[1].describe(), "×");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(tokenize(".5", true).unwrap(), vec![Token::Number(0.5)]);
        assert_eq!(tokenize("5.", true).unwrap(), vec![Token::Number(5.0)]);
        assert_eq!(
            tokenize("1.2.3", true).unwrap_err().kind(),
            ErrorKind::Syntax
        );
        assert!(tokenize(".", true).is_err());
    }

    #[test]
    fn test_mod_next_to_euler() {
        let tokens = tokenize("eMod2", true).unwrap();
        assert_eq!(
            tokens,
            vec![Token::Euler, Token::Modulo, Token::Number(2.0)]
        );
    }

    #[test]
    fn test_identifier_with_e_is_not_split_into_euler() {
        // "exp" must not silently become "e" followed by garbage
        let err = tokenize("exp(1)", true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
    }

    #[test]
    fn test_sqrt_glyph() {
        let tokens = tokenize("√(9)", true).unwrap();
        assert_eq!(tokens[0], Token::Function(Function::Sqrt));
    }

    #[test]
    fn test_scientific_disabled() {
        assert!(tokenize("sin(0)", false).is_err());
        assert!(tokenize("sqrt(4)", false).is_ok());
    }

    #[test]
    fn test_unknown_character() {
        assert!(tokenize("2$3", true).is_err());
    }

    #[test]
    fn test_whitespace_ignored() {
        assert_eq!(tokenize(" 7 Mod 3 ", true).unwrap().len(), 3);
    }
}
