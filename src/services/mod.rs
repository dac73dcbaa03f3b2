//! Service layer: builds the metadata values and writes them out.
//!
//! ## Service map
//! - `device.rs` — static device descriptor.
//! - `session.rs` — session metadata mapping.
//! - `report.rs` — indexed path list plus session lookup.
//! - `output.rs` — JSON/text output helpers.

pub mod device;
pub mod output;
pub mod report;
pub mod session;
