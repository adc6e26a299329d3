//! Pushing a byte string onto the descending stack.
//!
//! `push` stores at `sp - 4` after decrementing, so the word pushed last ends
//! up at the lowest address. Words are therefore pushed from the end of the
//! string towards the start: once every push has run, `sp` points at the first
//! byte of the string and the rest follows in forward order.

use crate::abi::{LOAD_REG, TERMINATOR, is_pushable};
use crate::chunk::words;
use crate::loader::ImmediateLoader;
use crate::thumb::{Instruction, InstructionStream};
use crate::{Error, ForbiddenBytes, Result};

/// Knobs for one push. Passed to the loader as well, so both agree on the
/// register and the forbidden bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushOptions {
    /// Append one zero byte before chunking.
    pub append_terminator: bool,
    /// Register each word is loaded into and pushed from (r0-r7).
    pub register: u8,
    /// Bytes the loader must keep out of its output.
    pub forbidden: ForbiddenBytes,
}

impl Default for PushOptions {
    fn default() -> Self {
        Self {
            append_terminator: true,
            register: LOAD_REG,
            forbidden: ForbiddenBytes::default(),
        }
    }
}

/// Push `bytes` with a terminator, through r7, avoiding `{0x00, 0x0a}`.
pub fn push_bytes<L>(bytes: &[u8], loader: &L) -> Result<InstructionStream>
where
    L: ImmediateLoader + ?Sized,
{
    push_bytes_with_options(bytes, &PushOptions::default(), loader)
}

pub fn push_bytes_with_options<L>(
    bytes: &[u8],
    options: &PushOptions,
    loader: &L,
) -> Result<InstructionStream>
where
    L: ImmediateLoader + ?Sized,
{
    if !is_pushable(options.register) {
        return Err(Error::InvalidRegister(options.register));
    }

    let mut data = bytes.to_vec();
    if options.append_terminator {
        data.push(TERMINATOR);
    }

    let mut stream = InstructionStream::default();
    if data.is_empty() {
        tracing::debug!("empty string, nothing to push");
        return Ok(stream);
    }

    let words = words(&data);
    tracing::debug!(
        len = bytes.len(),
        words = words.len(),
        terminator = options.append_terminator,
        reg = options.register,
        "pushing string"
    );

    for word in words.iter().rev() {
        let value = u32::from_le_bytes(*word);
        tracing::trace!(value, "push word");

        let code = loader.load_immediate(value, options)?;
        stream.push(Instruction::LoadImm {
            reg: options.register,
            value,
            code,
        });
        stream.push(Instruction::Push {
            reg: options.register,
        });
    }

    Ok(stream)
}
