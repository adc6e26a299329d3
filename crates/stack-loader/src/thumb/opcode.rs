/// Fixed bits of the Thumb encodings this crate emits.
///
/// Each value is the first halfword with every operand field cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum Opcode {
    // PUSH <registers> (T1, 16-bit)
    Push = 0xB400,
    // MOVW Rd, #imm16 (T3, 32-bit)
    Movw = 0xF240,
    // MOVT Rd, #imm16 (T1, 32-bit)
    Movt = 0xF2C0,
}

impl Opcode {
    /// Encoded size in bytes.
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            Self::Push => 2,
            Self::Movw | Self::Movt => 4,
        }
    }

    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::Movw => "movw",
            Self::Movt => "movt",
        }
    }
}
