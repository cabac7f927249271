pub mod opcodes;
pub mod info;
pub mod registry;
pub mod disasm;
pub mod analysis;

pub use info::{InstructionInfo, Tier};
pub use opcodes::{Instruction, InstructionError};
pub use registry::{instruction_info, lookup, InstructionRegistry};
