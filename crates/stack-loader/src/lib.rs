#![allow(
    clippy::cast_possible_truncation, // intentional: Thumb immediates are packed from u32 halves into u8/u16 fields
    clippy::missing_errors_doc // error variants are documented on `Error`
)]

pub mod abi;
pub mod chunk;
pub mod error;
pub mod forbidden;
pub mod loader;
pub mod push;
pub mod thumb;

/// Test harness module for writing unit and integration tests.
///
/// This module is only available when running tests or when the
/// `test-harness` feature is enabled.
#[cfg(any(test, feature = "test-harness"))]
pub mod test_harness;

pub use chunk::{Word, chunk, words};
pub use error::{Error, Result};
pub use forbidden::ForbiddenBytes;
pub use loader::{ImmediateLoader, MovwMovtLoader};
pub use push::{PushOptions, push_bytes, push_bytes_with_options};
pub use thumb::{Instruction, InstructionStream, Opcode};
