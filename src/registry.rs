//! Byte-indexed instruction metadata table.
//!
//! The table is built at compile time from [`Instruction::info`]; every unassigned byte
//! holds [`InstructionInfo::UNKNOWN`]. Lookups never fail, so callers scanning arbitrary
//! bytes (disassemblers, stack analysers) need no error path.

use crate::info::InstructionInfo;
use crate::opcodes::Instruction;

static GLOBAL: InstructionRegistry = InstructionRegistry::new();

#[derive(Debug, Clone)]
pub struct InstructionRegistry {
    table: [InstructionInfo; 256],
}

impl InstructionRegistry {
    pub const fn new() -> Self {
        let mut table = [InstructionInfo::UNKNOWN; 256];
        let mut byte = 0usize;
        while byte < 256 {
            if let Some(inst) = Instruction::from_u8(byte as u8) {
                table[byte] = inst.info();
            }
            byte += 1;
        }
        Self { table }
    }

    /// Shared process-wide registry. Read-only, safe to use from any thread.
    pub fn global() -> &'static InstructionRegistry {
        &GLOBAL
    }

    /// Metadata for `opcode`, or [`InstructionInfo::UNKNOWN`] if nothing is assigned there.
    #[inline]
    pub fn lookup(&self, opcode: impl Into<u8>) -> InstructionInfo {
        self.table[opcode.into() as usize]
    }

    /// Assigned opcodes with their metadata, ascending by byte.
    pub fn iter(&self) -> impl Iterator<Item = (Instruction, InstructionInfo)> + '_ {
        Instruction::ALL.iter().map(move |&inst| (inst, self.lookup(inst)))
    }
}

impl Default for InstructionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Looks `opcode` up in the global registry.
pub fn lookup(opcode: impl Into<u8>) -> InstructionInfo {
    GLOBAL.lookup(opcode)
}

pub fn instruction_info(inst: Instruction) -> InstructionInfo {
    GLOBAL.lookup(inst)
}
