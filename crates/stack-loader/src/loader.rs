//! Loading one 32-bit value into the push register.
//!
//! The orchestrator treats loaders as opaque: it hands over a value and the
//! active options and appends whatever bytes come back. Keeping those bytes
//! clear of `options.forbidden` is the loader's job.

use crate::push::PushOptions;
use crate::thumb::Instruction;
use crate::{Error, Result};

/// Produces machine code that leaves `value` in `options.register`.
///
/// Implementations must be deterministic and must only emit bytes outside
/// `options.forbidden`. A value the loader cannot express is an error, which
/// the orchestrator passes through untouched.
pub trait ImmediateLoader {
    fn load_immediate(&self, value: u32, options: &PushOptions) -> Result<Vec<u8>>;
}

impl<F> ImmediateLoader for F
where
    F: Fn(u32, &PushOptions) -> Result<Vec<u8>>,
{
    fn load_immediate(&self, value: u32, options: &PushOptions) -> Result<Vec<u8>> {
        self(value, options)
    }
}

/// Direct `movw`/`movt` loader.
///
/// Emits `movw reg, #lo16` and, when the upper half is non-zero,
/// `movt reg, #hi16`. It never searches for an alternative encoding: if the
/// direct one contains a forbidden byte the value is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovwMovtLoader;

impl MovwMovtLoader {
    /// Typed instructions for `value`, before any forbidden-byte check.
    #[must_use]
    pub fn instructions(reg: u8, value: u32) -> Vec<Instruction> {
        let low = (value & 0xFFFF) as u16;
        let high = (value >> 16) as u16;

        let mut instrs = vec![Instruction::Movw { reg, imm: low }];
        if high != 0 {
            instrs.push(Instruction::Movt { reg, imm: high });
        }
        instrs
    }
}

impl ImmediateLoader for MovwMovtLoader {
    fn load_immediate(&self, value: u32, options: &PushOptions) -> Result<Vec<u8>> {
        let reg = options.register;
        let code: Vec<u8> = Self::instructions(reg, value)
            .iter()
            .flat_map(Instruction::encode)
            .collect();

        if let Some((offset, byte)) = options.forbidden.find_in(&code) {
            tracing::debug!(
                value,
                reg,
                offset,
                byte,
                "direct movw/movt encoding hits a forbidden byte"
            );
            return Err(Error::ForbiddenImmediate { value, reg, byte });
        }

        Ok(code)
    }
}
