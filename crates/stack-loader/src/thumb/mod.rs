// Thumb encoding utilities use explicit 'as' casts for halfword packing.
#![allow(clippy::cast_possible_truncation)]

mod display;
mod instruction;
mod opcode;
mod stream;

pub use instruction::Instruction;
pub use opcode::Opcode;
pub use stream::InstructionStream;
