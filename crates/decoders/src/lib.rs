//! # Decoders
//!
//! Built-in payload decoders for the LMT metric generations.
//!
//! Each decoder receives the record payload (the raw value with its version
//! field removed), checks that it is well-formed, and returns the decoded
//! fields. The values are not interpreted any further.
//!
//! | metric       | version | layout |
//! |--------------|---------|--------|
//! | `lmt_ost`    | 2       | oss header + 9-field target groups |
//! | `lmt_mdt`    | 1       | mds header + 5-field target groups |
//! | `lmt_router` | 1       | router name, cpu, mem, bytes |
//! | `lmt_mds`    | 2       | legacy mds + 4-field operation groups |
//! | `lmt_oss`    | 1       | legacy oss name, cpu, mem |
//! | `lmt_ost`    | 1       | legacy single-target ost |

mod cursor;
mod mdt;
mod mds;
mod oss;
mod ost;
mod router;

pub use cursor::FieldCursor;
pub use mdt::decode_mdt_v1;
pub use mds::decode_mds_v2;
pub use oss::decode_oss_v1;
pub use ost::{decode_ost_v1, decode_ost_v2};
pub use router::decode_router_v1;

use contracts::DecodeOutcome;

/// Decode function signature shared by the built-in decoders
pub type DecodeFn = fn(&str) -> DecodeOutcome;

/// Built-in `(name, version, decoder)` table
pub const BUILTIN: &[(&str, i64, DecodeFn)] = &[
    ("lmt_ost", 2, decode_ost_v2),
    ("lmt_mdt", 1, decode_mdt_v1),
    ("lmt_router", 1, decode_router_v1),
    ("lmt_mds", 2, decode_mds_v2),
    ("lmt_oss", 1, decode_oss_v1),
    ("lmt_ost", 1, decode_ost_v1),
];
