use super::Opcode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// Bytes produced by an immediate loader that leave `value` in `reg`.
    /// The encoding is opaque; `value` is kept for listings and the harness.
    LoadImm {
        reg: u8,
        value: u32,
        code: Vec<u8>,
    },
    /// `sp -= 4; mem[sp] = reg`
    Push {
        reg: u8,
    },
    /// `reg = imm` (upper half cleared)
    Movw {
        reg: u8,
        imm: u16,
    },
    /// `reg[31:16] = imm` (lower half kept)
    Movt {
        reg: u8,
        imm: u16,
    },
}

impl Instruction {
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::LoadImm { code, .. } => code.clone(),
            Self::Push { reg } => encode_push(*reg),
            Self::Movw { reg, imm } => encode_mov_imm16(Opcode::Movw, *reg, *imm),
            Self::Movt { reg, imm } => encode_mov_imm16(Opcode::Movt, *reg, *imm),
        }
    }

    #[must_use]
    pub fn encoded_len(&self) -> usize {
        match self {
            Self::LoadImm { code, .. } => code.len(),
            _ => self.opcode().map_or(0, Opcode::size),
        }
    }

    /// Fixed opcode, or `None` for opaque loader output.
    #[must_use]
    pub const fn opcode(&self) -> Option<Opcode> {
        match self {
            Self::LoadImm { .. } => None,
            Self::Push { .. } => Some(Opcode::Push),
            Self::Movw { .. } => Some(Opcode::Movw),
            Self::Movt { .. } => Some(Opcode::Movt),
        }
    }

    /// Returns the register written by this instruction, if any.
    #[must_use]
    pub const fn dest_reg(&self) -> Option<u8> {
        match self {
            Self::LoadImm { reg, .. } | Self::Movw { reg, .. } | Self::Movt { reg, .. } => {
                Some(*reg)
            }
            Self::Push { .. } => None,
        }
    }
}

fn encode_push(reg: u8) -> Vec<u8> {
    // T1: [1011 010 M | register_list], one bit per low register
    let halfword = Opcode::Push as u16 | (1 << (reg & 0x07));
    halfword.to_le_bytes().to_vec()
}

fn encode_mov_imm16(opcode: Opcode, reg: u8, imm: u16) -> Vec<u8> {
    // [11110 i 10 x 100 imm4] [0 imm3 Rd imm8], imm16 = imm4:i:imm3:imm8
    let imm4 = (imm >> 12) & 0x0F;
    let i = (imm >> 11) & 0x01;
    let imm3 = (imm >> 8) & 0x07;
    let imm8 = imm & 0xFF;
    let first = opcode as u16 | (i << 10) | imm4;
    let second = (imm3 << 12) | (u16::from(reg & 0x0F) << 8) | imm8;
    let mut bytes = first.to_le_bytes().to_vec();
    bytes.extend_from_slice(&second.to_le_bytes());
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_encoding() {
        // push {r7} = 0xB480, stored little-endian
        assert_eq!(Instruction::Push { reg: 7 }.encode(), vec![0x80, 0xB4]);
        assert_eq!(Instruction::Push { reg: 0 }.encode(), vec![0x01, 0xB4]);
        assert_eq!(Instruction::Push { reg: 3 }.encode(), vec![0x08, 0xB4]);
    }

    #[test]
    fn test_push_r7_has_no_null_or_newline() {
        let encoded = Instruction::Push { reg: 7 }.encode();
        assert!(!encoded.contains(&0x00));
        assert!(!encoded.contains(&0x0A));
    }

    #[test]
    fn test_movw_encoding() {
        // movw r7, #0x4241: imm4=4 i=0 imm3=2 imm8=0x41 -> f244 2741
        let instr = Instruction::Movw {
            reg: 7,
            imm: 0x4241,
        };
        assert_eq!(instr.encode(), vec![0x44, 0xF2, 0x41, 0x27]);
    }

    #[test]
    fn test_movt_encoding_all_fields_set() {
        // movt r7, #0xffff: imm4=0xf i=1 imm3=7 imm8=0xff -> f6cf 77ff
        let instr = Instruction::Movt {
            reg: 7,
            imm: 0xFFFF,
        };
        assert_eq!(instr.encode(), vec![0xCF, 0xF6, 0xFF, 0x77]);
    }

    #[test]
    fn test_mov_imm16_field_roundtrip() {
        for (reg, imm) in [(0u8, 0u16), (7, 0x0800), (5, 0x1234), (7, 0xFFFF), (2, 0x8001)] {
            let encoded = Instruction::Movw { reg, imm }.encode();
            let first = u16::from_le_bytes([encoded[0], encoded[1]]);
            let second = u16::from_le_bytes([encoded[2], encoded[3]]);

            assert_eq!(first & 0xFBF0, Opcode::Movw as u16, "opcode bits for {imm:#06x}");
            let decoded_reg = ((second >> 8) & 0x0F) as u8;
            let decoded_imm = ((first & 0x0F) << 12)
                | (((first >> 10) & 0x01) << 11)
                | (((second >> 12) & 0x07) << 8)
                | (second & 0xFF);
            assert_eq!(decoded_reg, reg, "reg mismatch for imm={imm:#06x}");
            assert_eq!(decoded_imm, imm, "imm mismatch for reg={reg}");
        }
    }

    #[test]
    fn test_encoded_len_matches_encode() {
        let instrs = [
            Instruction::Push { reg: 7 },
            Instruction::Movw { reg: 7, imm: 1 },
            Instruction::Movt { reg: 7, imm: 1 },
            Instruction::LoadImm {
                reg: 7,
                value: 1,
                code: vec![1, 2, 3],
            },
        ];
        for instr in &instrs {
            assert_eq!(instr.encoded_len(), instr.encode().len(), "{instr:?}");
        }
    }

    #[test]
    fn test_dest_reg() {
        assert_eq!(Instruction::Push { reg: 7 }.dest_reg(), None);
        assert_eq!(Instruction::Movw { reg: 4, imm: 0 }.dest_reg(), Some(4));
        assert_eq!(
            Instruction::LoadImm {
                reg: 6,
                value: 0,
                code: Vec::new(),
            }
            .dest_reg(),
            Some(6)
        );
    }
}
