//! Recursive-descent parser producing an expression tree
//!
//! Precedence, lowest first:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('×' | '÷' | 'Mod') unary | '%' ('^' unary)?)*
//! unary   := ('+' | '-') unary | power
//! power   := primary ('^' unary)?
//! primary := number | 'π' | 'e' | '(' expr ')' | function '(' expr ')'
//! ```
//!
//! `%` sits at multiplicative precedence so `a×b%` reads as `(a×b)÷100`, and
//! the hundred takes a following exponent: `a%^b` is `a÷100^b`.

use crate::builtin_functions::{AngleUnit, Function};
use crate::error::{CalcError, Result};
use crate::lexer::Token;

/// Maximum parenthesis/unary nesting before the input is rejected
const MAX_DEPTH: usize = 256;

/// Longest accepted token stream. Operator chains build a tree as deep as
/// they are long, and evaluation recurses through it.
pub const MAX_TOKENS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Negate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
}

/// Parsed expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// Postfix `%`: the operand divided by 100
    Percent(Box<Expr>),
    Call {
        function: Function,
        arg: Box<Expr>,
    },
}

impl Expr {
    /// Evaluate the tree. Never fails; NaN and infinities propagate and are
    /// judged by the caller.
    pub fn eval(&self, angle: AngleUnit) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Unary { op, operand } => {
                let v = operand.eval(angle);
                match op {
                    UnaryOp::Plus => v,
                    UnaryOp::Negate => -v,
                }
            },
            Self::Binary { op, lhs, rhs } => {
                let a = lhs.eval(angle);
                let b = rhs.eval(angle);
                match op {
                    BinaryOp::Add => a + b,
                    BinaryOp::Subtract => a - b,
                    BinaryOp::Multiply => a * b,
                    BinaryOp::Divide => a / b,
                    // Remainder takes the sign of the dividend
                    BinaryOp::Modulo => a % b,
                    BinaryOp::Power => a.powf(b),
                }
            },
            Self::Percent(operand) => operand.eval(angle) / 100.0,
            Self::Call { function, arg } => function.apply(arg.eval(angle), angle),
        }
    }
}

/// Parse a complete token stream into a single expression
pub fn parse(tokens: &[Token]) -> Result<Expr> {
    if tokens.is_empty() {
        return Err(CalcError::syntax("empty expression"));
    }
    if tokens.len() > MAX_TOKENS {
        return Err(CalcError::syntax(format!(
            "expression too long ({} tokens, at most {})",
            tokens.len(),
            MAX_TOKENS
        )));
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let expr = parser.expr()?;

    match parser.peek() {
        None => Ok(expr),
        Some(Token::RParen) => Err(CalcError::syntax("unmatched ')'")),
        Some(token) => Err(CalcError::syntax(format!(
            "unexpected '{}' after complete expression",
            token.describe()
        ))),
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(CalcError::syntax("expression nested too deeply"));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn expr(&mut self) -> Result<Expr> {
        let mut lhs = self.term()?;

        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinaryOp::Add,
                Some(Token::Minus(_)) => BinaryOp::Subtract,
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.term()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
    }

    fn term(&mut self) -> Result<Expr> {
        let mut lhs = self.unary()?;

        loop {
            let op = match self.peek() {
                Some(Token::Star(_)) => BinaryOp::Multiply,
                Some(Token::Slash(_)) => BinaryOp::Divide,
                Some(Token::Modulo) => BinaryOp::Modulo,
                Some(Token::Percent) => {
                    self.pos += 1;
                    lhs = self.percent(lhs)?;
                    continue;
                },
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.unary()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
    }

    /// `%` already consumed. Plain `a%` is `a÷100`; `a%^b` is `a÷100^b`.
    fn percent(&mut self, operand: Expr) -> Result<Expr> {
        if !matches!(self.peek(), Some(Token::Power(_))) {
            return Ok(Expr::Percent(Box::new(operand)));
        }
        self.pos += 1;

        self.enter()?;
        let exponent = self.unary();
        self.leave();

        Ok(Expr::Binary {
            op: BinaryOp::Divide,
            lhs: Box::new(operand),
            rhs: Box::new(Expr::Binary {
                op: BinaryOp::Power,
                lhs: Box::new(Expr::Number(100.0)),
                rhs: Box::new(exponent?),
            }),
        })
    }

    fn unary(&mut self) -> Result<Expr> {
        let op = match self.peek() {
            Some(Token::Plus) => UnaryOp::Plus,
            Some(Token::Minus(_)) => UnaryOp::Negate,
            _ => return self.power(),
        };
        self.pos += 1;

        self.enter()?;
        let operand = self.unary();
        self.leave();

        Ok(Expr::Unary {
            op,
            operand: Box::new(operand?),
        })
    }

    fn power(&mut self) -> Result<Expr> {
        let base = self.primary()?;

        if !matches!(self.peek(), Some(Token::Power(_))) {
            return Ok(base);
        }
        self.pos += 1;

        // Exponent goes back through unary, which gives right associativity
        // and allows 2^-1
        self.enter()?;
        let exponent = self.unary();
        self.leave();

        Ok(Expr::Binary {
            op: BinaryOp::Power,
            lhs: Box::new(base),
            rhs: Box::new(exponent?),
        })
    }

    fn primary(&mut self) -> Result<Expr> {
        match self.advance() {
            Some(Token::Number(n)) => Ok(Expr::Number(n)),
            Some(Token::Pi) => Ok(Expr::Number(std::f64::consts::PI)),
            Some(Token::Euler) => Ok(Expr::Number(std::f64::consts::E)),
            Some(Token::LParen) => self.group(),
            Some(Token::Function(function)) => {
                if self.advance() != Some(Token::LParen) {
                    return Err(CalcError::syntax(format!(
                        "'{}' must be followed by '('",
                        function
                    )));
                }
                let arg = self.group()?;
                Ok(Expr::Call {
                    function,
                    arg: Box::new(arg),
                })
            },
            Some(token) => Err(CalcError::syntax(format!(
                "unexpected '{}'",
                token.describe()
            ))),
            None => Err(CalcError::syntax("unexpected end of expression")),
        }
    }

    /// Parse the inside of a parenthesised group; the `(` is already consumed
    fn group(&mut self) -> Result<Expr> {
        if self.peek() == Some(Token::RParen) {
            return Err(CalcError::syntax("empty parentheses"));
        }

        self.enter()?;
        let inner = self.expr();
        self.leave();
        let inner = inner?;

        match self.advance() {
            Some(Token::RParen) => Ok(inner),
            Some(token) => Err(CalcError::syntax(format!(
                "expected ')' but found '{}'",
                token.describe()
            ))),
            None => Err(CalcError::syntax("missing ')'")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn eval(input: &str) -> f64 {
        let tokens = tokenize(input, true).unwrap();
        parse(&tokens).unwrap().eval(AngleUnit::Radians)
    }

    fn parse_err(input: &str) -> CalcError {
        let tokens = tokenize(input, true).unwrap();
        parse(&tokens).unwrap_err()
    }

    #[test]
    fn test_operator_precedence() {
        // 2 + 3 × 4 = 2 + 12 = 14
        assert_eq!(eval("2+3×4"), 14.0);
        // (2 + 3) × 4 = 20
        assert_eq!(eval("(2+3)×4"), 20.0);
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(eval("10-4-3"), 3.0);
        assert_eq!(eval("64÷4÷2"), 8.0);
    }

    #[test]
    fn test_power_right_associative() {
        // 2^(3^2) = 512, not (2^3)^2 = 64
        assert_eq!(eval("2^3^2"), 512.0);
        assert_eq!(eval("2^-1"), 0.5);
    }

    #[test]
    fn test_unary_minus_below_power() {
        assert_eq!(eval("-2^2"), -4.0);
        assert_eq!(eval("(-2)^2"), 4.0);
        assert_eq!(eval("--3"), 3.0);
    }

    #[test]
    fn test_percent_is_divide_by_hundred() {
        assert_eq!(eval("50%"), 0.5);
        assert_eq!(eval("2^3%"), 0.08);
        assert_eq!(eval("-(5)%"), -0.05);
    }

    #[test]
    fn test_percent_takes_exponent_on_hundred() {
        // 10÷100^2
        assert_eq!(eval("10%^2"), 0.001);
        assert_eq!(eval("10%^2×2"), 0.002);
        assert_eq!(eval("5%^-1"), 500.0);
    }

    #[test]
    fn test_modulo() {
        assert_eq!(eval("7Mod3"), 1.0);
        assert_eq!(eval("-7Mod3"), -1.0);
        assert!(eval("5Mod0").is_nan());
    }

    #[test]
    fn test_nested_function_argument() {
        assert_eq!(eval("√(√(16))"), 2.0);
        assert_eq!(eval("√(9)+1"), 4.0);
    }

    #[test]
    fn test_syntax_errors() {
        assert!(matches!(parse_err("(5"), CalcError::Syntax(_)));
        assert!(matches!(parse_err("5)"), CalcError::Syntax(_)));
        assert!(matches!(parse_err("2+"), CalcError::Syntax(_)));
        assert!(matches!(parse_err("()"), CalcError::Syntax(_)));
        assert!(matches!(parse_err("√9"), CalcError::Syntax(_)));
        assert!(matches!(parse_err("50%2"), CalcError::Syntax(_)));
        assert!(matches!(parse_err("2(3)"), CalcError::Syntax(_)));
    }

    #[test]
    fn test_empty_token_stream() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn test_long_operator_chain_rejected() {
        let input = vec!["1"; 200_000].join("+");
        let err = parse_err(&input);
        assert!(matches!(err, CalcError::Syntax(ref msg) if msg.contains("too long")));

        let input = vec!["2"; 100_000].join("×");
        assert!(matches!(parse_err(&input), CalcError::Syntax(_)));
    }

    #[test]
    fn test_chain_within_limit_evaluates() {
        // 500 terms, 999 tokens
        let input = vec!["1"; 500].join("+");
        assert_eq!(eval(&input), 500.0);
    }

    #[test]
    fn test_deep_nesting_rejected() {
        let input = format!("{}1{}", "(".repeat(300), ")".repeat(300));
        let err = parse_err(&input);
        assert!(matches!(err, CalcError::Syntax(ref msg) if msg.contains("nested")));
    }
}
