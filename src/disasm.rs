use primitive_types::U256;
use serde::Serialize;

use crate::info::InstructionInfo;
use crate::opcodes::Instruction;
use crate::registry::InstructionRegistry;

/// One decoded position in a code stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Operation {
    pub pc: usize,
    pub opcode: u8,
    pub info: InstructionInfo,
    /// PUSH data, big-endian, right-padded with zeros when the code ends early.
    #[serde(serialize_with = "ser_immediate")]
    pub immediate: Option<U256>,
    /// PUSH data ran past the end of the code.
    pub truncated: bool,
}

impl Operation {
    pub fn instruction(&self) -> Option<Instruction> {
        Instruction::from_u8(self.opcode)
    }
}

pub fn decode(code: &[u8]) -> Vec<Operation> {
    decode_with(InstructionRegistry::global(), code)
}

pub fn decode_with(registry: &InstructionRegistry, code: &[u8]) -> Vec<Operation> {
    let mut out = Vec::new();
    let mut pc = 0usize;
    while pc < code.len() {
        let op = code[pc];
        let info = registry.lookup(op);
        if !info.is_known() {
            tracing::debug!(pc, opcode = op, "unassigned opcode");
        }
        let n = Instruction::from_u8(op).map_or(0, Instruction::push_size);
        let (immediate, truncated) = if n > 0 {
            let start = pc + 1;
            let end = (start + n).min(code.len());
            let mut buf = [0u8; 32];
            // pad on the right: missing trailing bytes read as zero
            buf[32 - n..32 - n + (end - start)].copy_from_slice(&code[start..end]);
            (Some(U256::from_big_endian(&buf)), end - start < n)
        } else {
            (None, false)
        };
        out.push(Operation { pc, opcode: op, info, immediate, truncated });
        pc += 1 + n;
    }
    out
}

pub fn disassemble(code: &[u8]) -> Vec<String> {
    decode(code).iter().map(format_op).collect()
}

fn format_op(op: &Operation) -> String {
    let mut line = format!("{:04x}: ", op.pc);
    if op.info.is_known() {
        line.push_str(op.info.mnemonic);
    } else {
        line.push_str(&format!("0x{:02x}", op.opcode));
    }
    if let (Some(imm), Some(inst)) = (op.immediate, op.instruction()) {
        line.push_str(&format!(" 0x{}", hex::encode(immediate_bytes(imm, inst.push_size()))));
    }
    line
}

fn immediate_bytes(v: U256, n: usize) -> Vec<u8> {
    let mut buf = [0u8; 32];
    v.to_big_endian(&mut buf);
    buf[32 - n..].to_vec()
}

fn ser_immediate<S: serde::Serializer>(v: &Option<U256>, s: S) -> Result<S::Ok, S::Error> {
    match v {
        Some(v) => s.serialize_some(&format!("0x{:x}", v)),
        None => s.serialize_none(),
    }
}
