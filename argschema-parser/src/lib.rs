//! Schema-driven flag parsing: compile a schema such as `"x,y*,z#,w##"`, then collect typed flag
//! values from a command line.
#![no_std]

pub mod cursor;
pub mod marshaler;
pub mod parser;
pub mod schema;

pub use cursor::{Cursor, IntoCursor};
pub use marshaler::Kind;
pub use parser::{Error, ParsedArgs};
pub use schema::{Schema, Usage};
