use super::Instruction;

/// Ordered instructions produced for one byte string.
///
/// Built append-only by the orchestrator and handed out read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstructionStream {
    instructions: Vec<Instruction>,
}

impl InstructionStream {
    #[must_use]
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    pub(crate) fn push(&mut self, instr: Instruction) {
        self.instructions.push(instr);
    }

    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Number of `push` instructions, i.e. words placed on the stack.
    #[must_use]
    pub fn push_count(&self) -> usize {
        self.instructions
            .iter()
            .filter(|i| matches!(i, Instruction::Push { .. }))
            .count()
    }

    /// Flat machine code: every instruction's encoding, back to back.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let size = self.instructions.iter().map(Instruction::encoded_len).sum();
        let mut code = Vec::with_capacity(size);
        for instr in &self.instructions {
            code.extend(instr.encode());
        }
        code
    }
}

impl IntoIterator for InstructionStream {
    type Item = Instruction;
    type IntoIter = std::vec::IntoIter<Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_concatenates_without_framing() {
        let stream = InstructionStream::new(vec![
            Instruction::LoadImm {
                reg: 7,
                value: 0x4443_4241,
                code: vec![0xAA, 0xBB],
            },
            Instruction::Push { reg: 7 },
        ]);
        assert_eq!(stream.encode(), vec![0xAA, 0xBB, 0x80, 0xB4]);
        assert_eq!(stream.push_count(), 1);
        assert_eq!(stream.len(), 2);
    }

    #[test]
    fn test_empty_stream_encodes_to_nothing() {
        let stream = InstructionStream::default();
        assert!(stream.is_empty());
        assert!(stream.encode().is_empty());
        assert_eq!(stream.push_count(), 0);
    }
}
