//! Row structs and storage DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) for patches
//!
//! Wire-level request shapes (URL fields, batch payloads) live in the API
//! crate; these DTOs carry storage fields only.

pub mod answer;
pub mod audience_type;
pub mod banner;
pub mod category;
pub mod column;
pub mod generation_log;
pub mod prompt;
pub mod quiz;
pub mod topic;
