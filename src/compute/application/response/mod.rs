//! Vendor payloads and their projection onto the domain model.
//!
//! Every required field is a plain (non-`Option`) field, so a payload
//! missing one fails to deserialize instead of producing a partial object.

pub mod plan_response;
pub mod server_response;
pub mod storage_response;
pub mod zone_response;
