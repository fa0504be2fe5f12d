//! Routes DSL parsing for routec.
//!
//! The input language is line-oriented: one rule per line mapping an HTTP
//! verb and a path pattern to a handler call, e.g.
//!
//! ```text
//! GET     /users/:id      controllers.users.show
//! POST    /users          controllers.users.create
//! GET     /assets/*file   controllers.assets.at
//! ```
//!
//! Parsing yields either the full rule list or every error found, each with
//! a 1-based line and column. Errors are data, never panics or faults.

mod parse;
mod report;
mod rule;

pub use parse::{RoutesFileParser, parse, parse_str};
pub use report::SyntaxError;
pub use rule::{HandlerCall, HttpVerb, PathPart, Rule};
