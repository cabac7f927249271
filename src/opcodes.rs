use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstructionError {
    #[error("unknown opcode 0x{0:02x}")]
    UnknownOpcode(u8),
    #[error("unknown mnemonic {0:?}")]
    UnknownMnemonic(String),
}

/// Declares the opcode enum together with its byte decoder and the ordered list of
/// every assigned opcode. Entries must be written in ascending byte order.
macro_rules! instructions {
    ($($name:ident = $byte:literal,)*) => {
        /// A single opcode of the interpreter's instruction set.
        ///
        /// The discriminant is the byte value found in bytecode. Variant names are the
        /// canonical mnemonics.
        #[repr(u8)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        pub enum Instruction {
            $($name = $byte,)*
        }

        impl Instruction {
            /// Every assigned opcode, ascending by byte value.
            pub const ALL: &'static [Instruction] = &[$(Instruction::$name,)*];

            /// Decodes a raw byte. Returns `None` for bytes with no assigned opcode.
            pub const fn from_u8(byte: u8) -> Option<Instruction> {
                match byte {
                    $($byte => Some(Instruction::$name),)*
                    _ => None,
                }
            }
        }
    };
}

instructions! {
    // 0x00 range - arithmetic
    STOP = 0x00,
    ADD = 0x01,
    MUL = 0x02,
    SUB = 0x03,
    DIV = 0x04,
    SDIV = 0x05,
    MOD = 0x06,
    SMOD = 0x07,
    ADDMOD = 0x08,
    MULMOD = 0x09,
    EXP = 0x0a,
    SIGNEXTEND = 0x0b,

    // 0x10 range - comparison/bitwise
    LT = 0x10,
    GT = 0x11,
    SLT = 0x12,
    SGT = 0x13,
    EQ = 0x14,
    ISZERO = 0x15,
    AND = 0x16,
    OR = 0x17,
    XOR = 0x18,
    NOT = 0x19,
    BYTE = 0x1a,
    SHL = 0x1b,
    SHR = 0x1c,
    SAR = 0x1d,

    SHA3 = 0x20,

    // 0x30 range - call environment
    ADDRESS = 0x30,
    BALANCE = 0x31,
    ORIGIN = 0x32,
    CALLER = 0x33,
    CALLVALUE = 0x34,
    CALLDATALOAD = 0x35,
    CALLDATASIZE = 0x36,
    CALLDATACOPY = 0x37,
    CODESIZE = 0x38,
    CODECOPY = 0x39,
    GASPRICE = 0x3a,
    EXTCODESIZE = 0x3b,
    EXTCODECOPY = 0x3c,
    RETURNDATASIZE = 0x3d,
    RETURNDATACOPY = 0x3e,
    EXTCODEHASH = 0x3f,

    // 0x40 range - block environment
    BLOCKHASH = 0x40,
    COINBASE = 0x41,
    TIMESTAMP = 0x42,
    NUMBER = 0x43,
    DIFFICULTY = 0x44,
    GASLIMIT = 0x45,

    // 0x50 range - stack/memory/storage/flow
    POP = 0x50,
    MLOAD = 0x51,
    MSTORE = 0x52,
    MSTORE8 = 0x53,
    SLOAD = 0x54,
    SSTORE = 0x55,
    JUMP = 0x56,
    JUMPI = 0x57,
    PC = 0x58,
    MSIZE = 0x59,
    GAS = 0x5a,
    JUMPDEST = 0x5b,

    // 0x60..0x7f
    PUSH1 = 0x60,
    PUSH2 = 0x61,
    PUSH3 = 0x62,
    PUSH4 = 0x63,
    PUSH5 = 0x64,
    PUSH6 = 0x65,
    PUSH7 = 0x66,
    PUSH8 = 0x67,
    PUSH9 = 0x68,
    PUSH10 = 0x69,
    PUSH11 = 0x6a,
    PUSH12 = 0x6b,
    PUSH13 = 0x6c,
    PUSH14 = 0x6d,
    PUSH15 = 0x6e,
    PUSH16 = 0x6f,
    PUSH17 = 0x70,
    PUSH18 = 0x71,
    PUSH19 = 0x72,
    PUSH20 = 0x73,
    PUSH21 = 0x74,
    PUSH22 = 0x75,
    PUSH23 = 0x76,
    PUSH24 = 0x77,
    PUSH25 = 0x78,
    PUSH26 = 0x79,
    PUSH27 = 0x7a,
    PUSH28 = 0x7b,
    PUSH29 = 0x7c,
    PUSH30 = 0x7d,
    PUSH31 = 0x7e,
    PUSH32 = 0x7f,

    // 0x80..0x8f
    DUP1 = 0x80,
    DUP2 = 0x81,
    DUP3 = 0x82,
    DUP4 = 0x83,
    DUP5 = 0x84,
    DUP6 = 0x85,
    DUP7 = 0x86,
    DUP8 = 0x87,
    DUP9 = 0x88,
    DUP10 = 0x89,
    DUP11 = 0x8a,
    DUP12 = 0x8b,
    DUP13 = 0x8c,
    DUP14 = 0x8d,
    DUP15 = 0x8e,
    DUP16 = 0x8f,

    // 0x90..0x9f
    SWAP1 = 0x90,
    SWAP2 = 0x91,
    SWAP3 = 0x92,
    SWAP4 = 0x93,
    SWAP5 = 0x94,
    SWAP6 = 0x95,
    SWAP7 = 0x96,
    SWAP8 = 0x97,
    SWAP9 = 0x98,
    SWAP10 = 0x99,
    SWAP11 = 0x9a,
    SWAP12 = 0x9b,
    SWAP13 = 0x9c,
    SWAP14 = 0x9d,
    SWAP15 = 0x9e,
    SWAP16 = 0x9f,

    LOG0 = 0xa0,
    LOG1 = 0xa1,
    LOG2 = 0xa2,
    LOG3 = 0xa3,
    LOG4 = 0xa4,

    // Synthesised by the interpreter's preprocessing pass, never valid in user code.
    PUSHC = 0xac,
    JUMPC = 0xad,
    JUMPCI = 0xae,

    // 0xb0 range - subroutines
    JUMPTO = 0xb0,
    JUMPIF = 0xb1,
    JUMPV = 0xb2,
    JUMPSUB = 0xb3,
    JUMPSUBV = 0xb4,
    BEGINSUB = 0xb5,
    BEGINDATA = 0xb6,
    RETURNSUB = 0xb7,
    PUTLOCAL = 0xb8,
    GETLOCAL = 0xb9,

    // 0xc0..0xef - wide arithmetic
    XADD = 0xc1,
    XMUL = 0xc2,
    XSUB = 0xc3,
    XDIV = 0xc4,
    XSDIV = 0xc5,
    XMOD = 0xc6,
    XSMOD = 0xc7,
    XLT = 0xd0,
    XGT = 0xd1,
    XSLT = 0xd2,
    XSGT = 0xd3,
    XEQ = 0xd4,
    XISZERO = 0xd5,
    XAND = 0xd6,
    XOOR = 0xd7,
    XXOR = 0xd8,
    XNOT = 0xd9,
    XSHL = 0xdb,
    XSHR = 0xdc,
    XSAR = 0xdd,
    XROL = 0xde,
    XROR = 0xdf,
    XPUSH = 0xe0,
    XMLOAD = 0xe1,
    XMSTORE = 0xe2,
    XSLOAD = 0xe4,
    XSSTORE = 0xe5,
    XVTOWIDE = 0xe6,
    XWIDETOV = 0xe7,
    XGET = 0xe8,
    XPUT = 0xe9,
    XSWIZZLE = 0xea,
    XSHUFFLE = 0xeb,

    // 0xf0 range - system
    CREATE = 0xf0,
    CALL = 0xf1,
    CALLCODE = 0xf2,
    RETURN = 0xf3,
    DELEGATECALL = 0xf4,
    CREATE2 = 0xf5,
    STATICCALL = 0xfa,
    REVERT = 0xfd,
    INVALID = 0xfe,
    SUICIDE = 0xff,
}

impl Instruction {
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub const fn is_push(self) -> bool {
        let b = self as u8;
        b >= Instruction::PUSH1 as u8 && b <= Instruction::PUSH32 as u8
    }

    /// Number of immediate bytes following the opcode in the code stream (PUSH1..PUSH32).
    /// Zero for everything else.
    pub const fn push_size(self) -> usize {
        if self.is_push() {
            (self as u8 - Instruction::PUSH1 as u8 + 1) as usize
        } else {
            0
        }
    }

    /// True for the pseudo-opcodes the interpreter generates itself.
    pub const fn is_internal(self) -> bool {
        matches!(self, Instruction::PUSHC | Instruction::JUMPC | Instruction::JUMPCI)
    }

    pub const fn mnemonic(self) -> &'static str {
        self.info().mnemonic
    }
}

impl From<Instruction> for u8 {
    fn from(inst: Instruction) -> u8 {
        inst as u8
    }
}

impl TryFrom<u8> for Instruction {
    type Error = InstructionError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Instruction::from_u8(byte).ok_or(InstructionError::UnknownOpcode(byte))
    }
}

impl FromStr for Instruction {
    type Err = InstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Instruction::ALL
            .iter()
            .copied()
            .find(|inst| inst.mnemonic() == s)
            .ok_or_else(|| InstructionError::UnknownMnemonic(s.to_string()))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
