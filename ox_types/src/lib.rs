//! ox_types - Named type handlers for string conversion
//!
//! A [`Type`] converts between the text a user typed and a value, reporting
//! the outcome as a [`Conversion`] instead of failing. Types are looked up
//! by name through the process-wide [`TYPE_REGISTRY`], where parameterized
//! families register a factory instead of a fixed instance.

pub mod conversion;
pub mod error;
pub mod registry;
pub mod spec;
pub mod status;
pub mod types;

pub use conversion::{Conversion, PREDICTION_LIMIT, PREDICTION_TARGET};
pub use error::TypeError;
pub use registry::{
    deregister_type, get_type, register_factory, register_type, TypeEntry, TypeFactory,
    TypeRegistry, TYPE_REGISTRY,
};
pub use spec::TypeSpec;
pub use status::Status;
pub use types::{check_round_trip, unexpected_value, Type};
