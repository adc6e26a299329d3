#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("cannot load {value:#010x} into r{reg}: encoding contains forbidden byte {byte:#04x}")]
    ForbiddenImmediate { value: u32, reg: u8, byte: u8 },

    #[error("immediate loader failed for {value:#010x}: {reason}")]
    Loader { value: u32, reason: String },

    #[error("Invalid chunk width {0}, must be at least 1")]
    InvalidWidth(usize),

    #[error("Register r{0} cannot be pushed, expected r0-r7")]
    InvalidRegister(u8),
}

pub type Result<T> = std::result::Result<T, Error>;
