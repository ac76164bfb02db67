//! Field schema: how raw record keys map onto configured standard fields,
//! and how their values are displayed, compressed, enumerated and timed.

mod compress;
mod descriptor;
mod enums;
mod schema;
mod timestamp;
mod value;

#[cfg(test)]
mod tests;

pub use compress::PrefixCompressor;
pub use descriptor::FieldDescriptor;
pub use enums::{EnumDescriptor, EnumTable};
pub use schema::{FieldSchema, OthersStyle};
pub use timestamp::{TimeRule, TimestampError, Timezone};
pub use value::{AnyValue, Replacements};
