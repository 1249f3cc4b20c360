//! ganit-calc - Expression evaluation engine for the Ganit calculator
//!
//! Turns keypad display strings into numbers. The input uses the glyphs shown
//! on the keypad (`×`, `÷`, `%`, `π`, `√(`, `Mod`, ...) and is parsed by an
//! explicit tokenizer and recursive-descent parser; nothing is ever executed
//! as code.
//!
//! # Example
//!
//! ```rust
//! use ganit_calc::{evaluate, ErrorKind};
//!
//! assert_eq!(evaluate("2+2").unwrap(), "4");
//! assert_eq!(evaluate("0.1+0.2").unwrap(), "0.3");
//! assert_eq!(evaluate("200+10%").unwrap(), "200.1");
//! assert_eq!(evaluate("1÷0").unwrap_err().kind(), ErrorKind::Math);
//! assert_eq!(evaluate("(5").unwrap_err().kind(), ErrorKind::Syntax);
//! ```
//!
//! # Operators
//!
//! | Glyph | Meaning | Precedence |
//! |-------|---------|------------|
//! | `+` `-` | add, subtract | lowest, left |
//! | `×` `÷` `Mod` | multiply, divide, remainder | left |
//! | `%` | postfix, divide by 100 | with `×` |
//! | unary `-` `+` | sign | |
//! | `^` | power | highest, right |

pub mod builtin_functions;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod parser;

// Re-exports for convenience
pub use builtin_functions::{AngleUnit, Function};
pub use error::{CalcError, ErrorKind, Result};
pub use evaluator::{evaluate, format_result, round_decimals, CalcEngine, EngineConfig};
pub use parser::Expr;
