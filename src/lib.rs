//! # Packrat - Parser Combinator Core
//!
//! The substrate a parser combinator library is built on: an immutable input
//! cursor, a success/failure result algebra, a parser value that threads both
//! through each step, and position tracking that turns a raw index into a
//! line/column diagnostic with a caret under the offending element.
//!
//! - **Immutable values**: every step returns a new `Parser`; nothing is modified in place
//! - **Failures are values**: errors live in the parser's result, never in a panic
//! - **Rich error reporting**: line numbers, surrounding lines and miette diagnostics
//! - **Generic input**: parse characters, bytes, or any type implementing `Atomic`
//!
//! ```rust
//! use packrat::Source;
//!
//! let source = Source::new("hello world");
//! let parser = source.parser().string("hello").char(' ').one_of("wW");
//! assert_eq!(parser.value(), Some(&'w'));
//!
//! let failed = source.parser().char('x');
//! assert_eq!(failed.exception().unwrap().message(), "Expected \"x\"");
//! ```

pub mod atomic;
pub mod diagnostic;
pub mod error;
pub mod matchers;
pub mod parser;
pub mod position;
pub mod predicate;
pub mod source;
pub mod state;

pub use atomic::{Atomic, Symbols};
pub use diagnostic::ParseDiagnostic;
pub use error::{Exception, ParseResult};
pub use parser::Parser;
pub use position::{DEFAULT_CONTEXT_DEPTH, Position};
pub use predicate::{Described, Equals, NoneOf, OneOf, Predicate, predicate};
pub use source::Source;
pub use state::State;
