//! Test harness for stack-loader unit tests
//!
//! Provides a model Thumb machine that executes an `InstructionStream`
//! against a descending stack, plus fake loaders that let the orchestrator be
//! tested without a real immediate encoder.
//!
//! # Example
//!
//! ```rust
//! use stack_loader::test_harness::*;
//! use stack_loader::push_bytes;
//!
//! let stream = push_bytes(b"hi", &MarkerLoader).expect("push");
//! let machine = run(&stream);
//!
//! assert_eq!(machine.stack_bytes(), b"hi\0\0".to_vec());
//! ```

#![allow(
    clippy::must_use_candidate,
    clippy::manual_assert,
    clippy::missing_panics_doc
)]

use std::collections::BTreeMap;

use crate::abi::{PAD_BYTE, REG_COUNT, STACK_PTR_REG, TERMINATOR, WORD_SIZE};
use crate::push::PushOptions;
use crate::thumb::{Instruction, InstructionStream};
use crate::{Error, ImmediateLoader, Result};

/// Initial stack pointer of a fresh `StackModel`.
pub const STACK_TOP: u32 = 0x0010_0000;

/// Register file plus byte-addressed memory, enough to run pushed strings.
#[derive(Debug, Clone)]
pub struct StackModel {
    regs: [u32; REG_COUNT],
    memory: BTreeMap<u32, u8>,
}

impl Default for StackModel {
    fn default() -> Self {
        Self::new()
    }
}

impl StackModel {
    pub fn new() -> Self {
        let mut regs = [0; REG_COUNT];
        regs[STACK_PTR_REG as usize] = STACK_TOP;
        Self {
            regs,
            memory: BTreeMap::new(),
        }
    }

    pub fn sp(&self) -> u32 {
        self.regs[STACK_PTR_REG as usize]
    }

    pub fn register(&self, reg: u8) -> u32 {
        self.regs[reg as usize]
    }

    /// Execute one instruction.
    ///
    /// `LoadImm` is taken at its word: the register receives `value`
    /// regardless of what the opaque bytes would do on hardware.
    pub fn step(&mut self, instr: &Instruction) {
        match *instr {
            Instruction::LoadImm { reg, value, .. } => self.regs[reg as usize] = value,
            Instruction::Movw { reg, imm } => self.regs[reg as usize] = u32::from(imm),
            Instruction::Movt { reg, imm } => {
                let low = self.regs[reg as usize] & 0xFFFF;
                self.regs[reg as usize] = low | (u32::from(imm) << 16);
            }
            Instruction::Push { reg } => {
                let sp = self.sp().wrapping_sub(WORD_SIZE as u32);
                self.regs[STACK_PTR_REG as usize] = sp;
                for (i, byte) in self.regs[reg as usize].to_le_bytes().into_iter().enumerate() {
                    self.memory.insert(sp.wrapping_add(i as u32), byte);
                }
            }
        }
    }

    pub fn execute(&mut self, instructions: &[Instruction]) {
        for instr in instructions {
            self.step(instr);
        }
    }

    /// Memory from the current `sp` up to `STACK_TOP`, lowest address first.
    pub fn stack_bytes(&self) -> Vec<u8> {
        (self.sp()..STACK_TOP)
            .map(|addr| self.memory.get(&addr).copied().unwrap_or(0))
            .collect()
    }
}

/// Run `stream` on a fresh model and return the final state.
pub fn run(stream: &InstructionStream) -> StackModel {
    let mut machine = StackModel::new();
    machine.execute(stream.instructions());
    machine
}

/// Stack contents a correct push of `bytes` must leave behind: the string,
/// the optional terminator, then zero padding to a whole word.
pub fn expected_stack(bytes: &[u8], append_terminator: bool) -> Vec<u8> {
    let mut expected = bytes.to_vec();
    if append_terminator {
        expected.push(TERMINATOR);
    }
    let padded = expected.len().div_ceil(WORD_SIZE) * WORD_SIZE;
    expected.resize(padded, PAD_BYTE);
    expected
}

/// Loader that returns the little-endian value itself as its "code".
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerLoader;

impl ImmediateLoader for MarkerLoader {
    fn load_immediate(&self, value: u32, _options: &PushOptions) -> Result<Vec<u8>> {
        Ok(value.to_le_bytes().to_vec())
    }
}

/// Loader that behaves like `MarkerLoader` except for one value it refuses.
#[derive(Debug, Clone, Copy)]
pub struct FailingLoader {
    pub reject: u32,
}

impl ImmediateLoader for FailingLoader {
    fn load_immediate(&self, value: u32, options: &PushOptions) -> Result<Vec<u8>> {
        if value == self.reject {
            return Err(Error::Loader {
                value,
                reason: "rejected by test loader".to_string(),
            });
        }
        MarkerLoader.load_immediate(value, options)
    }
}

/// Assert that pushing `bytes` reconstructs it at the final `sp`.
pub fn assert_round_trip(bytes: &[u8], append_terminator: bool) {
    let options = PushOptions {
        append_terminator,
        ..PushOptions::default()
    };
    let stream = crate::push_bytes_with_options(bytes, &options, &MarkerLoader)
        .unwrap_or_else(|e| panic!("push of {bytes:02x?} failed: {e}"));
    let machine = run(&stream);

    let expected = expected_stack(bytes, append_terminator);
    assert_eq!(
        machine.stack_bytes(),
        expected,
        "stack mismatch for {bytes:02x?} (terminator={append_terminator})"
    );
    assert_eq!(
        machine.sp(),
        STACK_TOP - expected.len() as u32,
        "sp mismatch for {bytes:02x?}"
    );
}
