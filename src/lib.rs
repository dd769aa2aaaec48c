//! mosasm — a MOS 6502 instruction assembler core.
//!
//! The crate implements the instruction-encoding stage of an NES-targeting toolchain as three pure functions used in
//! strict sequence: [`parser::lex`] splits source text into tokens, [`parser::parse`] resolves every statement's
//! token shape into exactly one addressing mode, and [`assembler::assemble`] encodes the resolved instructions into
//! machine-code bytes via the fixed mnemonic and addressing mode opcode table. Data flows strictly forward through
//! the stages and no stage keeps state between calls, so independent statements can be assembled concurrently.
//!
//! Everything around that pipeline lives in other tools: label resolution runs upstream and must deliver fully
//! numeric operands, cartridge/ROM packaging consumes the emitted byte sequences downstream.
//!
//! ```
//! let source = mosasm::AssemblyCode::new("EOR #10", "example.asm");
//! let code = mosasm::assemble(&source).unwrap();
//! assert_eq!(code, vec![vec![0x49, 0x10]]);
//! ```

#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![deny(missing_docs)]
#![allow(non_upper_case_globals)]
#![allow(clippy::result_large_err)]

use std::sync::Arc;

pub mod assembler;
mod error;
pub mod parser;
pub mod sema;
#[cfg(test)] mod test;

pub use error::{AssemblyCode, AssemblyError};

/// Run the whole assembler pipeline on the given source code, producing one machine-code byte sequence per statement
/// in source order.
///
/// # Errors
/// Any lexical, syntactical or encoding error in any statement aborts the whole run; callers that want to collect
/// errors instead assemble statements separately, since every error is confined to the statement that caused it.
pub fn assemble(source_code: &Arc<AssemblyCode>) -> Result<Vec<Vec<u8>>, Box<AssemblyError>> {
	let tokens = parser::lex(source_code.clone())?;
	let instructions = parser::parse(&tokens, source_code)?;
	assembler::assemble(&instructions, source_code)
}
