pub mod parity;
pub mod personal;
pub mod registry;

pub use parity::Parity;
pub use personal::Personal;
pub use registry::{lookup, MethodEntry, Operation, METHODS};
