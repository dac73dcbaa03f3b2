//! Data-only layer: metadata types and the literals they are built from.
//!
//! ## Files
//! - `models.rs` — device descriptor, session metadata, report/output structs.
//! - `constants.rs` — fixed keys, values and the path list.
//!
//! Nothing here touches stdout or the environment.

pub mod constants;
pub mod models;
