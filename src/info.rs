//! Per-opcode metadata: mnemonic, stack arity and gas tier.

use serde::Serialize;

use crate::opcodes::Instruction;

/// Coarse gas-cost class. The gas meter maps a tier to a concrete amount; `Special`
/// opcodes are priced from runtime context instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Tier {
    Zero,
    Base,
    VeryLow,
    Low,
    Mid,
    High,
    Special,
    /// No such opcode.
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct InstructionInfo {
    pub mnemonic: &'static str,
    /// Stack items the instruction needs present. For DUPn this is a depth requirement,
    /// not a consumption count.
    pub stack_in: u8,
    pub stack_out: u8,
    pub tier: Tier,
}

impl InstructionInfo {
    /// Returned for bytes with no assigned opcode. An empty mnemonic is never used by a
    /// real entry.
    pub const UNKNOWN: InstructionInfo = info("", 0, 0, Tier::Invalid);

    pub const fn is_known(&self) -> bool {
        !self.mnemonic.is_empty()
    }

    /// Net change in stack height after the instruction runs.
    pub const fn stack_delta(&self) -> i16 {
        self.stack_out as i16 - self.stack_in as i16
    }
}

const fn info(mnemonic: &'static str, stack_in: u8, stack_out: u8, tier: Tier) -> InstructionInfo {
    InstructionInfo { mnemonic, stack_in, stack_out, tier }
}

impl Instruction {
    /// The registry row for this opcode.
    pub const fn info(self) -> InstructionInfo {
        use Instruction::*;
        use Tier::*;

        match self {
            //                                   in, out
            STOP => info("STOP", 0, 0, Zero),
            ADD => info("ADD", 2, 1, VeryLow),
            SUB => info("SUB", 2, 1, VeryLow),
            MUL => info("MUL", 2, 1, Low),
            DIV => info("DIV", 2, 1, Low),
            SDIV => info("SDIV", 2, 1, Low),
            MOD => info("MOD", 2, 1, Low),
            SMOD => info("SMOD", 2, 1, Low),
            EXP => info("EXP", 2, 1, Special),
            NOT => info("NOT", 1, 1, VeryLow),
            LT => info("LT", 2, 1, VeryLow),
            GT => info("GT", 2, 1, VeryLow),
            SLT => info("SLT", 2, 1, VeryLow),
            SGT => info("SGT", 2, 1, VeryLow),
            EQ => info("EQ", 2, 1, VeryLow),
            ISZERO => info("ISZERO", 1, 1, VeryLow),
            AND => info("AND", 2, 1, VeryLow),
            OR => info("OR", 2, 1, VeryLow),
            XOR => info("XOR", 2, 1, VeryLow),
            BYTE => info("BYTE", 2, 1, VeryLow),
            SHL => info("SHL", 2, 1, VeryLow),
            SHR => info("SHR", 2, 1, VeryLow),
            SAR => info("SAR", 2, 1, VeryLow),
            ADDMOD => info("ADDMOD", 3, 1, Mid),
            MULMOD => info("MULMOD", 3, 1, Mid),
            SIGNEXTEND => info("SIGNEXTEND", 2, 1, Low),
            SHA3 => info("SHA3", 2, 1, Special),

            ADDRESS => info("ADDRESS", 0, 1, Base),
            BALANCE => info("BALANCE", 1, 1, Special),
            ORIGIN => info("ORIGIN", 0, 1, Base),
            CALLER => info("CALLER", 0, 1, Base),
            CALLVALUE => info("CALLVALUE", 0, 1, Base),
            CALLDATALOAD => info("CALLDATALOAD", 1, 1, VeryLow),
            CALLDATASIZE => info("CALLDATASIZE", 0, 1, Base),
            CALLDATACOPY => info("CALLDATACOPY", 3, 0, VeryLow),
            CODESIZE => info("CODESIZE", 0, 1, Base),
            CODECOPY => info("CODECOPY", 3, 0, VeryLow),
            GASPRICE => info("GASPRICE", 0, 1, Base),
            EXTCODESIZE => info("EXTCODESIZE", 1, 1, Special),
            EXTCODECOPY => info("EXTCODECOPY", 4, 0, Special),
            RETURNDATASIZE => info("RETURNDATASIZE", 0, 1, Base),
            RETURNDATACOPY => info("RETURNDATACOPY", 3, 0, VeryLow),
            EXTCODEHASH => info("EXTCODEHASH", 1, 1, Special),
            BLOCKHASH => info("BLOCKHASH", 1, 1, Special),
            COINBASE => info("COINBASE", 0, 1, Base),
            TIMESTAMP => info("TIMESTAMP", 0, 1, Base),
            NUMBER => info("NUMBER", 0, 1, Base),
            DIFFICULTY => info("DIFFICULTY", 0, 1, Base),
            GASLIMIT => info("GASLIMIT", 0, 1, Base),

            POP => info("POP", 1, 0, Base),
            MLOAD => info("MLOAD", 1, 1, VeryLow),
            MSTORE => info("MSTORE", 2, 0, VeryLow),
            MSTORE8 => info("MSTORE8", 2, 0, VeryLow),
            SLOAD => info("SLOAD", 1, 1, Special),
            SSTORE => info("SSTORE", 2, 0, Special),
            JUMP => info("JUMP", 1, 0, Mid),
            JUMPI => info("JUMPI", 2, 0, High),
            PC => info("PC", 0, 1, Base),
            MSIZE => info("MSIZE", 0, 1, Base),
            GAS => info("GAS", 0, 1, Base),
            JUMPDEST => info("JUMPDEST", 0, 0, Special),

            PUSH1 => info("PUSH1", 0, 1, VeryLow),
            PUSH2 => info("PUSH2", 0, 1, VeryLow),
            PUSH3 => info("PUSH3", 0, 1, VeryLow),
            PUSH4 => info("PUSH4", 0, 1, VeryLow),
            PUSH5 => info("PUSH5", 0, 1, VeryLow),
            PUSH6 => info("PUSH6", 0, 1, VeryLow),
            PUSH7 => info("PUSH7", 0, 1, VeryLow),
            PUSH8 => info("PUSH8", 0, 1, VeryLow),
            PUSH9 => info("PUSH9", 0, 1, VeryLow),
            PUSH10 => info("PUSH10", 0, 1, VeryLow),
            PUSH11 => info("PUSH11", 0, 1, VeryLow),
            PUSH12 => info("PUSH12", 0, 1, VeryLow),
            PUSH13 => info("PUSH13", 0, 1, VeryLow),
            PUSH14 => info("PUSH14", 0, 1, VeryLow),
            PUSH15 => info("PUSH15", 0, 1, VeryLow),
            PUSH16 => info("PUSH16", 0, 1, VeryLow),
            PUSH17 => info("PUSH17", 0, 1, VeryLow),
            PUSH18 => info("PUSH18", 0, 1, VeryLow),
            PUSH19 => info("PUSH19", 0, 1, VeryLow),
            PUSH20 => info("PUSH20", 0, 1, VeryLow),
            PUSH21 => info("PUSH21", 0, 1, VeryLow),
            PUSH22 => info("PUSH22", 0, 1, VeryLow),
            PUSH23 => info("PUSH23", 0, 1, VeryLow),
            PUSH24 => info("PUSH24", 0, 1, VeryLow),
            PUSH25 => info("PUSH25", 0, 1, VeryLow),
            PUSH26 => info("PUSH26", 0, 1, VeryLow),
            PUSH27 => info("PUSH27", 0, 1, VeryLow),
            PUSH28 => info("PUSH28", 0, 1, VeryLow),
            PUSH29 => info("PUSH29", 0, 1, VeryLow),
            PUSH30 => info("PUSH30", 0, 1, VeryLow),
            PUSH31 => info("PUSH31", 0, 1, VeryLow),
            PUSH32 => info("PUSH32", 0, 1, VeryLow),

            DUP1 => info("DUP1", 1, 2, VeryLow),
            DUP2 => info("DUP2", 2, 3, VeryLow),
            DUP3 => info("DUP3", 3, 4, VeryLow),
            DUP4 => info("DUP4", 4, 5, VeryLow),
            DUP5 => info("DUP5", 5, 6, VeryLow),
            DUP6 => info("DUP6", 6, 7, VeryLow),
            DUP7 => info("DUP7", 7, 8, VeryLow),
            DUP8 => info("DUP8", 8, 9, VeryLow),
            DUP9 => info("DUP9", 9, 10, VeryLow),
            DUP10 => info("DUP10", 10, 11, VeryLow),
            DUP11 => info("DUP11", 11, 12, VeryLow),
            DUP12 => info("DUP12", 12, 13, VeryLow),
            DUP13 => info("DUP13", 13, 14, VeryLow),
            DUP14 => info("DUP14", 14, 15, VeryLow),
            DUP15 => info("DUP15", 15, 16, VeryLow),
            DUP16 => info("DUP16", 16, 17, VeryLow),

            SWAP1 => info("SWAP1", 2, 2, VeryLow),
            SWAP2 => info("SWAP2", 3, 3, VeryLow),
            SWAP3 => info("SWAP3", 4, 4, VeryLow),
            SWAP4 => info("SWAP4", 5, 5, VeryLow),
            SWAP5 => info("SWAP5", 6, 6, VeryLow),
            SWAP6 => info("SWAP6", 7, 7, VeryLow),
            SWAP7 => info("SWAP7", 8, 8, VeryLow),
            SWAP8 => info("SWAP8", 9, 9, VeryLow),
            SWAP9 => info("SWAP9", 10, 10, VeryLow),
            SWAP10 => info("SWAP10", 11, 11, VeryLow),
            SWAP11 => info("SWAP11", 12, 12, VeryLow),
            SWAP12 => info("SWAP12", 13, 13, VeryLow),
            SWAP13 => info("SWAP13", 14, 14, VeryLow),
            SWAP14 => info("SWAP14", 15, 15, VeryLow),
            SWAP15 => info("SWAP15", 16, 16, VeryLow),
            SWAP16 => info("SWAP16", 17, 17, VeryLow),

            LOG0 => info("LOG0", 2, 0, Special),
            LOG1 => info("LOG1", 3, 0, Special),
            LOG2 => info("LOG2", 4, 0, Special),
            LOG3 => info("LOG3", 5, 0, Special),
            LOG4 => info("LOG4", 6, 0, Special),

            JUMPTO => info("JUMPTO", 1, 0, VeryLow),
            JUMPIF => info("JUMPIF", 2, 0, Low),
            JUMPV => info("JUMPV", 1, 0, Mid),
            JUMPSUB => info("JUMPSUB", 1, 0, Low),
            JUMPSUBV => info("JUMPSUBV", 1, 0, Mid),
            BEGINSUB => info("BEGINSUB", 0, 0, Special),
            BEGINDATA => info("BEGINDATA", 0, 0, Special),
            RETURNSUB => info("RETURNSUB", 1, 0, Mid),
            PUTLOCAL => info("PUTLOCAL", 1, 0, VeryLow),
            GETLOCAL => info("GETLOCAL", 0, 1, VeryLow),

            // XADD (0/0) and XAND (1-in) differ from their 2-in/1-out siblings in the
            // reference table. Kept as published until that table is revised.
            XADD => info("XADD", 0, 0, Special),
            XMUL => info("XMUL", 2, 1, Special),
            XSUB => info("XSUB", 2, 1, Special),
            XDIV => info("XDIV", 2, 1, Special),
            XSDIV => info("XSDIV", 2, 1, Special),
            XMOD => info("XMOD", 2, 1, Special),
            XSMOD => info("XSMOD", 2, 1, Special),
            XLT => info("XLT", 2, 1, Special),
            XGT => info("XGT", 2, 1, Special),
            XSLT => info("XSLT", 2, 1, Special),
            XSGT => info("XSGT", 2, 1, Special),
            XEQ => info("XEQ", 2, 1, Special),
            XISZERO => info("XISZERO", 2, 1, Special),
            XAND => info("XAND", 1, 1, Special),
            XOOR => info("XOOR", 2, 1, Special),
            XXOR => info("XXOR", 2, 1, Special),
            XNOT => info("XNOT", 2, 1, Special),
            XSHL => info("XSHL", 2, 1, Special),
            XSHR => info("XSHR", 2, 1, Special),
            XSAR => info("XSAR", 2, 1, Special),
            XROL => info("XROL", 2, 1, Special),
            XROR => info("XROR", 2, 1, Special),
            XPUSH => info("XPUSH", 1, 1, VeryLow),
            XMLOAD => info("XMLOAD", 1, 1, VeryLow),
            XMSTORE => info("XMSTORE", 2, 0, VeryLow),
            XSLOAD => info("XSLOAD", 1, 1, Special),
            XSSTORE => info("XSSTORE", 2, 0, Special),
            XVTOWIDE => info("XVTOWIDE", 1, 1, VeryLow),
            XWIDETOV => info("XWIDETOV", 1, 1, VeryLow),
            XPUT => info("XPUT", 3, 1, Special),
            XGET => info("XGET", 2, 1, Special),
            XSWIZZLE => info("XSWIZZLE", 2, 1, Special),
            XSHUFFLE => info("XSHUFFLE", 3, 1, Special),

            CREATE => info("CREATE", 3, 1, Special),
            CREATE2 => info("CREATE2", 4, 1, Special),
            CALL => info("CALL", 7, 1, Special),
            CALLCODE => info("CALLCODE", 7, 1, Special),
            RETURN => info("RETURN", 2, 0, Zero),
            STATICCALL => info("STATICCALL", 6, 1, Special),
            DELEGATECALL => info("DELEGATECALL", 6, 1, Special),
            REVERT => info("REVERT", 2, 0, Special),
            INVALID => info("INVALID", 0, 0, Zero),
            SUICIDE => info("SUICIDE", 1, 0, Special),

            PUSHC => info("PUSHC", 0, 1, VeryLow),
            JUMPC => info("JUMPC", 1, 0, Mid),
            JUMPCI => info("JUMPCI", 2, 0, High),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mnemonic_matches_variant_name() {
        for &inst in Instruction::ALL {
            assert_eq!(inst.info().mnemonic, format!("{inst:?}"));
        }
    }

    #[test]
    fn unknown_sentinel() {
        let u = InstructionInfo::UNKNOWN;
        assert!(!u.is_known());
        assert_eq!((u.mnemonic, u.stack_in, u.stack_out, u.tier), ("", 0, 0, Tier::Invalid));
        assert!(Instruction::ALL.iter().all(|i| i.info().is_known()));
        assert!(Instruction::ALL.iter().all(|i| i.info().tier != Tier::Invalid));
    }

    #[test]
    fn stack_delta() {
        assert_eq!(Instruction::ADD.info().stack_delta(), -1);
        assert_eq!(Instruction::DUP3.info().stack_delta(), 1);
        assert_eq!(Instruction::SWAP9.info().stack_delta(), 0);
        assert_eq!(Instruction::CALL.info().stack_delta(), -6);
        assert_eq!(Instruction::LOG4.info().stack_delta(), -6);
    }

    #[test]
    fn wide_arithmetic_quirks_are_preserved() {
        assert_eq!(Instruction::XAND.info().stack_in, 1);
        assert_eq!((Instruction::XADD.info().stack_in, Instruction::XADD.info().stack_out), (0, 0));
        assert_eq!(Instruction::XOOR.info().stack_in, 2);
    }
}
