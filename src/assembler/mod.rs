//! Encoding resolved instructions into machine code.

use std::sync::Arc;

use crate::error::{AssemblyCode, AssemblyError};
use crate::sema::{AddressingMode, AddressingModeCategory, Instruction, Mnemonic};

mod table;

pub use table::assembly_table;

/// Encode the given instructions into machine code, one byte sequence per instruction in input order. The caller
/// (typically a cartridge packager) concatenates the sequences itself, together with whatever headers and padding it
/// manages.
///
/// # Errors
/// If any instruction pairs a mnemonic with an addressing mode the 6502 does not provide for it.
pub fn assemble(
	instructions: &[Instruction],
	source_code: &Arc<AssemblyCode>,
) -> Result<Vec<Vec<u8>>, Box<AssemblyError>> {
	instructions.iter().map(|instruction| assemble_instruction(instruction, source_code)).collect()
}

/// Encode one instruction: the opcode byte from the lookup table, then operand bytes as the addressing mode
/// dictates. 16-bit addresses are emitted least-significant byte first.
///
/// # Errors
/// If the mnemonic has no opcode for the instruction's addressing mode.
pub fn assemble_instruction(
	instruction: &Instruction,
	source_code: &Arc<AssemblyCode>,
) -> Result<Vec<u8>, Box<AssemblyError>> {
	let category = AddressingModeCategory::from(&instruction.mode);
	let opcode = assembly_table
		.get(&instruction.mnemonic)
		.and_then(|modes| modes.get(&category))
		.copied()
		.ok_or_else(|| AssemblyError::InvalidAddressingMode {
			mode:        category,
			mnemonic:    instruction.mnemonic,
			legal_modes: legal_modes_of(instruction.mnemonic),
			location:    instruction.span,
			src:         source_code.clone(),
		})?;

	Ok(match instruction.mode {
		AddressingMode::Implied => vec![opcode],
		AddressingMode::Immediate(value)
		| AddressingMode::ZeroPage(value)
		| AddressingMode::ZeroPageXIndexed(value)
		| AddressingMode::ZeroPageYIndexed(value)
		| AddressingMode::XIndexedIndirect(value)
		| AddressingMode::IndirectYIndexed(value) => vec![opcode, value],
		AddressingMode::Absolute(address)
		| AddressingMode::AbsoluteXIndexed(address)
		| AddressingMode::AbsoluteYIndexed(address) => {
			let [low, high] = address.to_le_bytes();
			vec![opcode, low, high]
		},
	})
}

/// The addressing modes the given mnemonic has encodings for, sorted for stable diagnostics.
fn legal_modes_of(mnemonic: Mnemonic) -> Vec<AddressingModeCategory> {
	let mut modes: Vec<AddressingModeCategory> =
		assembly_table.get(&mnemonic).map(|modes| modes.keys().copied().collect()).unwrap_or_default();
	modes.sort_unstable();
	modes
}
