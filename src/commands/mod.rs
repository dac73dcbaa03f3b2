//! Command handler layer.
//!
//! Matches the parsed CLI and wires service results to output.
//! Business logic stays in `services/*`.

pub mod runtime;

pub use runtime::handle_command;
