//! Whole-pipeline tests: source text in, machine code out.

use crate::assembler::{assemble_instruction, assembly_table};
use crate::sema::{AddressingMode, AddressingModeCategory, Instruction, Mnemonic, Register};
use crate::{AssemblyCode, AssemblyError, assemble};

fn assemble_single(source: &str) -> Vec<u8> {
	let code = AssemblyCode::new(source, "test");
	let mut sequences = assemble(&code).unwrap();
	assert_eq!(sequences.len(), 1, "`{source}` should produce exactly one byte sequence");
	sequences.remove(0)
}

fn assembly_error(source: &str) -> AssemblyError {
	let code = AssemblyCode::new(source, "test");
	*assemble(&code).unwrap_err()
}

#[test]
fn eor_conformance() {
	assert_eq!(assemble_single("EOR #10"), vec![0x49, 0x10]);
	assert_eq!(assemble_single("EOR $00"), vec![0x45, 0x00]);
	assert_eq!(assemble_single("EOR $10,X"), vec![0x55, 0x10]);
	assert_eq!(assemble_single("EOR $1234"), vec![0x4D, 0x34, 0x12]);
	assert_eq!(assemble_single("EOR $1234,X"), vec![0x5D, 0x34, 0x12]);
	assert_eq!(assemble_single("EOR $1234,Y"), vec![0x59, 0x34, 0x12]);
	assert_eq!(assemble_single("EOR ($20,X)"), vec![0x41, 0x20]);
	assert_eq!(assemble_single("EOR ($20),Y"), vec![0x51, 0x20]);
}

#[test]
fn opcode_spot_checks() {
	assert_eq!(assemble_single("LDA #44"), vec![0xA9, 0x44]);
	assert_eq!(assemble_single("LDX #01"), vec![0xA2, 0x01]);
	assert_eq!(assemble_single("LDY $20,X"), vec![0xB4, 0x20]);
	assert_eq!(assemble_single("STA $0200"), vec![0x8D, 0x00, 0x02]);
	assert_eq!(assemble_single("STX $10"), vec![0x86, 0x10]);
	assert_eq!(assemble_single("STY $10,X"), vec![0x94, 0x10]);
	assert_eq!(assemble_single("ADC #01"), vec![0x69, 0x01]);
	assert_eq!(assemble_single("SBC $1000,Y"), vec![0xF9, 0x00, 0x10]);
	assert_eq!(assemble_single("CMP ($40),Y"), vec![0xD1, 0x40]);
	assert_eq!(assemble_single("CPX #08"), vec![0xE0, 0x08]);
	assert_eq!(assemble_single("INC $2000,X"), vec![0xFE, 0x00, 0x20]);
	assert_eq!(assemble_single("DEC $21"), vec![0xC6, 0x21]);
	assert_eq!(assemble_single("BIT $44"), vec![0x24, 0x44]);
	assert_eq!(assemble_single("JMP $8000"), vec![0x4C, 0x00, 0x80]);
	assert_eq!(assemble_single("JSR $C000"), vec![0x20, 0x00, 0xC0]);
	assert_eq!(assemble_single("ORA $10"), vec![0x05, 0x10]);
	assert_eq!(assemble_single("AND #05"), vec![0x29, 0x05]);
}

#[test]
fn implied_instructions() {
	assert_eq!(assemble_single("BRK"), vec![0x00]);
	assert_eq!(assemble_single("CLC"), vec![0x18]);
	assert_eq!(assemble_single("SEI"), vec![0x78]);
	assert_eq!(assemble_single("INX"), vec![0xE8]);
	assert_eq!(assemble_single("DEY"), vec![0x88]);
	assert_eq!(assemble_single("TAX"), vec![0xAA]);
	assert_eq!(assemble_single("TXS"), vec![0x9A]);
	assert_eq!(assemble_single("PHA"), vec![0x48]);
	assert_eq!(assemble_single("PLP"), vec![0x28]);
	assert_eq!(assemble_single("RTS"), vec![0x60]);
	assert_eq!(assemble_single("RTI"), vec![0x40]);
	assert_eq!(assemble_single("NOP"), vec![0xEA]);
}

#[test]
fn bare_shifts_encode_the_accumulator_opcodes() {
	assert_eq!(assemble_single("ASL"), vec![0x0A]);
	assert_eq!(assemble_single("LSR"), vec![0x4A]);
	assert_eq!(assemble_single("ROL"), vec![0x2A]);
	assert_eq!(assemble_single("ROR"), vec![0x6A]);
}

#[test]
fn absolute_operands_are_little_endian() {
	for address in [0x0100u16, 0x1234, 0x8000, 0xFFFE] {
		let code = assemble_single(&format!("JMP ${address:04X}"));
		assert_eq!(code.len(), 3);
		assert_eq!(u16::from_le_bytes([code[1], code[2]]), address);
	}
}

#[test]
fn one_byte_operands_are_masked_to_eight_bits() {
	// The ninth bit of an oversized immediate is dropped by the 8-bit mask.
	assert_eq!(assemble_single("LDA #100"), vec![0xA9, 0x00]);
	assert_eq!(assemble_single("EOR ($1234),Y"), vec![0x51, 0x34]);
}

#[test]
fn padded_addresses_stay_absolute() {
	assert_eq!(assemble_single("LDA $0010"), vec![0xAD, 0x10, 0x00]);
}

#[test]
fn multi_statement_program() {
	let code = AssemblyCode::new("SEI\nCLD\nLDA #01\nSTA $0200\nEOR ($20),Y\n", "test");
	let sequences = assemble(&code).unwrap();
	let expected: Vec<Vec<u8>> =
		vec![vec![0x78], vec![0xD8], vec![0xA9, 0x01], vec![0x8D, 0x00, 0x02], vec![0x51, 0x20]];
	assert_eq!(sequences, expected);
}

#[test]
fn comments_and_blank_lines_produce_no_code() {
	let code = AssemblyCode::new("; reset sequence\n\nLDA #01 ; load the flag\n", "test");
	assert_eq!(assemble(&code).unwrap(), vec![vec![0xA9, 0x01]]);
}

#[test]
fn assembly_is_deterministic() {
	let first = assemble_single("EOR $1234,Y");
	for _ in 0 .. 16 {
		assert_eq!(assemble_single("EOR $1234,Y"), first);
	}
}

#[test]
fn every_table_entry_encodes_and_starts_with_its_opcode() {
	let code = AssemblyCode::new("", "test");
	for (mnemonic, modes) in assembly_table.iter() {
		for (category, opcode) in modes {
			let instruction =
				Instruction { mnemonic: *mnemonic, mode: mode_with_dummy_operand(*category), span: (0, 0).into() };
			let bytes = assemble_instruction(&instruction, &code).unwrap();
			assert_eq!(bytes[0], *opcode, "{instruction} must encode to its table opcode");
			assert_eq!(bytes.len(), 1 + instruction.mode.operand_length() as usize);
		}
	}
}

fn mode_with_dummy_operand(category: AddressingModeCategory) -> AddressingMode {
	match category {
		AddressingModeCategory::Immediate => AddressingMode::Immediate(0x42),
		AddressingModeCategory::ZeroPage => AddressingMode::ZeroPage(0x42),
		AddressingModeCategory::ZeroPageXIndexed => AddressingMode::ZeroPageXIndexed(0x42),
		AddressingModeCategory::ZeroPageYIndexed => AddressingMode::ZeroPageYIndexed(0x42),
		AddressingModeCategory::Absolute => AddressingMode::Absolute(0x4242),
		AddressingModeCategory::AbsoluteXIndexed => AddressingMode::AbsoluteXIndexed(0x4242),
		AddressingModeCategory::AbsoluteYIndexed => AddressingMode::AbsoluteYIndexed(0x4242),
		AddressingModeCategory::XIndexedIndirect => AddressingMode::XIndexedIndirect(0x42),
		AddressingModeCategory::IndirectYIndexed => AddressingMode::IndirectYIndexed(0x42),
		AddressingModeCategory::Implied => AddressingMode::Implied,
	}
}

#[test]
fn lexical_errors() {
	assert!(matches!(assembly_error("EOR @10"), AssemblyError::UnexpectedCharacter { chr: '@', .. }));
	assert!(matches!(assembly_error("lda #10"), AssemblyError::UnexpectedCharacter { chr: 'l', .. }));
	assert!(matches!(assembly_error("WOT $10"), AssemblyError::InvalidMnemonic { .. }));
	assert!(matches!(assembly_error("EOR #"), AssemblyError::ExpectedDigits { marker: '#', .. }));
	assert!(matches!(assembly_error("EOR $"), AssemblyError::ExpectedDigits { marker: '$', .. }));
	assert!(matches!(assembly_error("EOR $00012"), AssemblyError::AddressTooLong { .. }));
	assert!(matches!(assembly_error("EOR $12345"), AssemblyError::InvalidNumber { .. }));
	assert!(matches!(assembly_error("EOR #99999"), AssemblyError::InvalidNumber { .. }));
}

#[test]
fn syntax_errors() {
	assert!(matches!(assembly_error("EOR $10,"), AssemblyError::InvalidOperandSyntax { .. }));
	assert!(matches!(assembly_error("EOR $10 $20"), AssemblyError::InvalidOperandSyntax { .. }));
	assert!(matches!(assembly_error("EOR ($20,X"), AssemblyError::InvalidOperandSyntax { .. }));
	assert!(matches!(assembly_error("EOR ,X"), AssemblyError::InvalidOperandSyntax { .. }));
	assert!(matches!(assembly_error("X"), AssemblyError::ExpectedMnemonic { .. }));
	assert!(matches!(
		assembly_error("EOR ($20,Y)"),
		AssemblyError::InvalidIndexRegister { expected: Register::X, actual: Register::Y, .. }
	));
	assert!(matches!(
		assembly_error("EOR ($20),X"),
		AssemblyError::InvalidIndexRegister { expected: Register::Y, actual: Register::X, .. }
	));
}

#[test]
fn unsupported_addressing_modes() {
	assert!(matches!(
		assembly_error("STA #10"),
		AssemblyError::InvalidAddressingMode {
			mnemonic: Mnemonic::Sta,
			mode: AddressingModeCategory::Immediate,
			..
		}
	));
	assert!(matches!(assembly_error("CPX $10,X"), AssemblyError::InvalidAddressingMode { .. }));
	assert!(matches!(assembly_error("LDX $10,X"), AssemblyError::InvalidAddressingMode { .. }));
	assert!(matches!(assembly_error("TXS $10"), AssemblyError::InvalidAddressingMode { .. }));
	assert!(matches!(assembly_error("JMP $10"), AssemblyError::InvalidAddressingMode { .. }));
	// Branches only provide the relative mode, which a later toolchain stage resolves.
	assert!(matches!(assembly_error("BNE $10"), AssemblyError::InvalidAddressingMode { .. }));
	assert!(matches!(assembly_error("BEQ"), AssemblyError::InvalidAddressingMode { .. }));
}

#[test]
fn failing_statements_can_be_isolated_by_the_caller() {
	// A driver that wants to report every error assembles statements separately; a failure in one statement never
	// contaminates another.
	assert!(assemble(&AssemblyCode::new("STA #10", "test")).is_err());
	assert_eq!(assemble(&AssemblyCode::new("STA $10", "test")).unwrap(), vec![vec![0x85, 0x10]]);
}
