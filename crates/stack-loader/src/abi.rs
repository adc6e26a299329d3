//! Thumb target conventions (registers, word size, stack layout).
//!
//! Everything that ties the byte-string layout to the target lives here so the
//! chunker, the orchestrator and the test harness agree on one definition.

// ── Register Assignments ──

/// Register every word is loaded into before it is pushed (r7).
pub const LOAD_REG: u8 = 7;

/// Highest register the 16-bit `PUSH` encoding can name in its register list.
pub const MAX_PUSH_REG: u8 = 7;

/// Stack pointer register (sp).
/// Points to the current top of the stack (grows downwards).
pub const STACK_PTR_REG: u8 = 13;

/// Number of general purpose registers in the model register file (r0-r15).
pub const REG_COUNT: usize = 16;

// ── Stack Layout ──

/// Bytes moved by one push. Also the chunk width used for byte strings.
pub const WORD_SIZE: usize = 4;

/// Filler for the unused tail of the last word.
pub const PAD_BYTE: u8 = 0x00;

/// Byte appended when the caller asks for a terminated string.
pub const TERMINATOR: u8 = 0x00;

/// Bytes that break null-terminated or line-oriented transports.
pub const DEFAULT_FORBIDDEN: [u8; 2] = [0x00, b'\n'];

#[must_use]
pub const fn is_pushable(reg: u8) -> bool {
    reg <= MAX_PUSH_REG
}
