use std::fmt;

use super::{Instruction, InstructionStream, Opcode};

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::LoadImm { reg, value, code } => {
                write!(f, "load r{reg}, #{value:#010x} ; {} bytes", code.len())
            }
            Instruction::Push { reg } => write!(f, "{} {{r{reg}}}", Opcode::Push.mnemonic()),
            Instruction::Movw { reg, imm } | Instruction::Movt { reg, imm } => {
                let op = self.opcode().map_or("?", Opcode::mnemonic);
                write!(f, "{op} r{reg}, #{imm:#06x}")
            }
        }
    }
}

/// One instruction per line, prefixed with its byte offset and encoding.
impl fmt::Display for InstructionStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut offset = 0usize;
        for instr in self.instructions() {
            let encoded = instr.encode();
            write!(f, "{offset:4x}:  ")?;
            for byte in &encoded {
                write!(f, "{byte:02x}")?;
            }
            writeln!(f, "  {instr}")?;
            offset += encoded.len();
        }
        Ok(())
    }
}
