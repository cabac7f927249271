use clap::{Parser, Subcommand};
use evm_instructions::{analysis, disasm, Instruction, InstructionInfo, InstructionRegistry};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "evm", about = "Inspect the interpreter's instruction table")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Show metadata for one opcode
    Info {
        /// Opcode as hex (0x01), decimal (1) or mnemonic (ADD)
        opcode: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Dump the whole instruction table
    Table {
        /// Print as JSON
        #[arg(long)]
        json: bool,
        /// Include interpreter-generated pseudo-opcodes
        #[arg(long)]
        internal: bool,
    },
    /// Disassemble bytecode
    Disasm {
        /// Hex bytecode (e.g., 0x6001600101) or @file
        code: String,
        /// Print decoded operations as JSON
        #[arg(long)]
        json: bool,
    },
    /// Straight-line stack requirements of bytecode
    Stack {
        /// Hex bytecode or @file
        code: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Info { opcode, json } => info_cmd(&opcode, json),
        Cmd::Table { json, internal } => table_cmd(json, internal),
        Cmd::Disasm { code, json } => disasm_cmd(&code, json),
        Cmd::Stack { code } => stack_cmd(&code),
    }
}

fn info_cmd(arg: &str, json: bool) {
    let byte = parse_opcode(arg).unwrap_or_else(|| die(&format!("Invalid opcode: {arg}")));
    let info = InstructionRegistry::global().lookup(byte);
    if !info.is_known() {
        eprintln!("0x{:02x}: unassigned", byte);
        std::process::exit(2);
    }
    if json {
        println!("{}", to_json(&info));
    } else {
        println!("0x{:02x} {}", byte, format_info(&info));
    }
}

fn table_cmd(json: bool, internal: bool) {
    let rows: Vec<(Instruction, InstructionInfo)> = InstructionRegistry::global()
        .iter()
        .filter(|(inst, _)| internal || !inst.is_internal())
        .collect();
    if json {
        let entries: Vec<_> = rows
            .iter()
            .map(|(inst, info)| {
                serde_json::json!({
                    "opcode": format!("0x{:02x}", inst.as_u8()),
                    "info": info,
                })
            })
            .collect();
        println!("{}", to_json(&entries));
    } else {
        for (inst, info) in rows {
            println!("0x{:02x} {}", inst.as_u8(), format_info(&info));
        }
    }
}

fn disasm_cmd(code_arg: &str, json: bool) {
    let code = read_code_arg(code_arg);
    if json {
        println!("{}", to_json(&disasm::decode(&code)));
    } else {
        for line in disasm::disassemble(&code) {
            println!("{}", line);
        }
    }
}

fn stack_cmd(code_arg: &str) {
    let code = read_code_arg(code_arg);
    let profile = analysis::stack_profile(&disasm::decode(&code));
    println!("required: {}", profile.required);
    println!("net: {}", profile.net);
    println!("max height: {}", profile.max_height);
    if profile.unknown > 0 {
        println!("unknown: {}", profile.unknown);
    }
}

fn format_info(info: &InstructionInfo) -> String {
    format!(
        "{:<14} in={:<2} out={:<2} tier={:?}",
        info.mnemonic, info.stack_in, info.stack_out, info.tier
    )
}

/// Accepts `0x..` hex, decimal, or a mnemonic.
fn parse_opcode(s: &str) -> Option<u8> {
    let s = s.trim();
    if let Some(h) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        return u8::from_str_radix(h, 16).ok();
    }
    if let Ok(n) = s.parse::<u8>() {
        return Some(n);
    }
    s.parse::<Instruction>().ok().map(u8::from)
}

fn read_code_arg(arg: &str) -> Vec<u8> {
    if let Some(rest) = arg.strip_prefix('@') {
        std::fs::read(rest).unwrap_or_else(|e| die(&format!("Failed to read file: {e}")))
    } else {
        let s = arg.trim();
        let s = s.strip_prefix("0x").unwrap_or(s);
        hex::decode(s).unwrap_or_else(|e| die(&format!("Invalid code hex: {e}")))
    }
}

fn to_json<T: serde::Serialize + ?Sized>(v: &T) -> String {
    serde_json::to_string_pretty(v).unwrap_or_else(|e| die(&format!("serialize: {e}")))
}

fn die(msg: &str) -> ! {
    eprintln!("{}", msg);
    std::process::exit(1);
}
