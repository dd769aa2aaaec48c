//! Assembler lookup table.
//!
//! This module provides the ``assembly_table`` data structure, the single source of truth for which mnemonic and
//! addressing-mode combinations exist on the 6502 and which opcode byte each combination encodes to.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::sema::{AddressingModeCategory, Mnemonic};

/// The per-mnemonic table that maps each supported addressing mode to its opcode byte.
pub type ModeTable = HashMap<AddressingModeCategory, u8>;

lazy_static! {
	/// The ``assembly_table`` static data structure contains the mappings from mnemonics and addressing modes to
	/// opcode bytes. It is built once and never mutated, so concurrent readers need no synchronization. An absent
	/// entry means the 6502 does not provide that combination. The branch mnemonics have no entries at all: their
	/// only addressing mode is relative, which is resolved outside this assembler. The bare shift and rotate forms
	/// encode their accumulator-mode opcodes under the implied category.
	pub static ref assembly_table: HashMap<Mnemonic, ModeTable> = {
		let mut table = HashMap::new();

		table.insert(Mnemonic::Adc, ModeTable::from([
			(AddressingModeCategory::Immediate, 0x69),
			(AddressingModeCategory::ZeroPage, 0x65),
			(AddressingModeCategory::ZeroPageXIndexed, 0x75),
			(AddressingModeCategory::Absolute, 0x6D),
			(AddressingModeCategory::AbsoluteXIndexed, 0x7D),
			(AddressingModeCategory::AbsoluteYIndexed, 0x79),
			(AddressingModeCategory::XIndexedIndirect, 0x61),
			(AddressingModeCategory::IndirectYIndexed, 0x71),
		]));

		table.insert(Mnemonic::And, ModeTable::from([
			(AddressingModeCategory::Immediate, 0x29),
			(AddressingModeCategory::ZeroPage, 0x25),
			(AddressingModeCategory::ZeroPageXIndexed, 0x35),
			(AddressingModeCategory::Absolute, 0x2D),
			(AddressingModeCategory::AbsoluteXIndexed, 0x3D),
			(AddressingModeCategory::AbsoluteYIndexed, 0x39),
			(AddressingModeCategory::XIndexedIndirect, 0x21),
			(AddressingModeCategory::IndirectYIndexed, 0x31),
		]));

		table.insert(Mnemonic::Asl, ModeTable::from([
			(AddressingModeCategory::Implied, 0x0A),
			(AddressingModeCategory::ZeroPage, 0x06),
			(AddressingModeCategory::ZeroPageXIndexed, 0x16),
			(AddressingModeCategory::Absolute, 0x0E),
			(AddressingModeCategory::AbsoluteXIndexed, 0x1E),
		]));

		table.insert(Mnemonic::Bit, ModeTable::from([
			(AddressingModeCategory::ZeroPage, 0x24),
			(AddressingModeCategory::Absolute, 0x2C),
		]));

		table.insert(Mnemonic::Brk, ModeTable::from([(AddressingModeCategory::Implied, 0x00)]));

		table.insert(Mnemonic::Clc, ModeTable::from([(AddressingModeCategory::Implied, 0x18)]));
		table.insert(Mnemonic::Cld, ModeTable::from([(AddressingModeCategory::Implied, 0xD8)]));
		table.insert(Mnemonic::Cli, ModeTable::from([(AddressingModeCategory::Implied, 0x58)]));
		table.insert(Mnemonic::Clv, ModeTable::from([(AddressingModeCategory::Implied, 0xB8)]));

		table.insert(Mnemonic::Cmp, ModeTable::from([
			(AddressingModeCategory::Immediate, 0xC9),
			(AddressingModeCategory::ZeroPage, 0xC5),
			(AddressingModeCategory::ZeroPageXIndexed, 0xD5),
			(AddressingModeCategory::Absolute, 0xCD),
			(AddressingModeCategory::AbsoluteXIndexed, 0xDD),
			(AddressingModeCategory::AbsoluteYIndexed, 0xD9),
			(AddressingModeCategory::XIndexedIndirect, 0xC1),
			(AddressingModeCategory::IndirectYIndexed, 0xD1),
		]));

		table.insert(Mnemonic::Cpx, ModeTable::from([
			(AddressingModeCategory::Immediate, 0xE0),
			(AddressingModeCategory::ZeroPage, 0xE4),
			(AddressingModeCategory::Absolute, 0xEC),
		]));

		table.insert(Mnemonic::Cpy, ModeTable::from([
			(AddressingModeCategory::Immediate, 0xC0),
			(AddressingModeCategory::ZeroPage, 0xC4),
			(AddressingModeCategory::Absolute, 0xCC),
		]));

		table.insert(Mnemonic::Dec, ModeTable::from([
			(AddressingModeCategory::ZeroPage, 0xC6),
			(AddressingModeCategory::ZeroPageXIndexed, 0xD6),
			(AddressingModeCategory::Absolute, 0xCE),
			(AddressingModeCategory::AbsoluteXIndexed, 0xDE),
		]));

		table.insert(Mnemonic::Dex, ModeTable::from([(AddressingModeCategory::Implied, 0xCA)]));
		table.insert(Mnemonic::Dey, ModeTable::from([(AddressingModeCategory::Implied, 0x88)]));

		table.insert(Mnemonic::Eor, ModeTable::from([
			(AddressingModeCategory::Immediate, 0x49),
			(AddressingModeCategory::ZeroPage, 0x45),
			(AddressingModeCategory::ZeroPageXIndexed, 0x55),
			(AddressingModeCategory::Absolute, 0x4D),
			(AddressingModeCategory::AbsoluteXIndexed, 0x5D),
			(AddressingModeCategory::AbsoluteYIndexed, 0x59),
			(AddressingModeCategory::XIndexedIndirect, 0x41),
			(AddressingModeCategory::IndirectYIndexed, 0x51),
		]));

		table.insert(Mnemonic::Inc, ModeTable::from([
			(AddressingModeCategory::ZeroPage, 0xE6),
			(AddressingModeCategory::ZeroPageXIndexed, 0xF6),
			(AddressingModeCategory::Absolute, 0xEE),
			(AddressingModeCategory::AbsoluteXIndexed, 0xFE),
		]));

		table.insert(Mnemonic::Inx, ModeTable::from([(AddressingModeCategory::Implied, 0xE8)]));
		table.insert(Mnemonic::Iny, ModeTable::from([(AddressingModeCategory::Implied, 0xC8)]));

		// Absolute-indirect `JMP ($nnnn)` is not part of the recognized operand shapes, so JMP only carries the
		// direct absolute form here.
		table.insert(Mnemonic::Jmp, ModeTable::from([(AddressingModeCategory::Absolute, 0x4C)]));
		table.insert(Mnemonic::Jsr, ModeTable::from([(AddressingModeCategory::Absolute, 0x20)]));

		table.insert(Mnemonic::Lda, ModeTable::from([
			(AddressingModeCategory::Immediate, 0xA9),
			(AddressingModeCategory::ZeroPage, 0xA5),
			(AddressingModeCategory::ZeroPageXIndexed, 0xB5),
			(AddressingModeCategory::Absolute, 0xAD),
			(AddressingModeCategory::AbsoluteXIndexed, 0xBD),
			(AddressingModeCategory::AbsoluteYIndexed, 0xB9),
			(AddressingModeCategory::XIndexedIndirect, 0xA1),
			(AddressingModeCategory::IndirectYIndexed, 0xB1),
		]));

		table.insert(Mnemonic::Ldx, ModeTable::from([
			(AddressingModeCategory::Immediate, 0xA2),
			(AddressingModeCategory::ZeroPage, 0xA6),
			(AddressingModeCategory::ZeroPageYIndexed, 0xB6),
			(AddressingModeCategory::Absolute, 0xAE),
			(AddressingModeCategory::AbsoluteYIndexed, 0xBE),
		]));

		table.insert(Mnemonic::Ldy, ModeTable::from([
			(AddressingModeCategory::Immediate, 0xA0),
			(AddressingModeCategory::ZeroPage, 0xA4),
			(AddressingModeCategory::ZeroPageXIndexed, 0xB4),
			(AddressingModeCategory::Absolute, 0xAC),
			(AddressingModeCategory::AbsoluteXIndexed, 0xBC),
		]));

		table.insert(Mnemonic::Lsr, ModeTable::from([
			(AddressingModeCategory::Implied, 0x4A),
			(AddressingModeCategory::ZeroPage, 0x46),
			(AddressingModeCategory::ZeroPageXIndexed, 0x56),
			(AddressingModeCategory::Absolute, 0x4E),
			(AddressingModeCategory::AbsoluteXIndexed, 0x5E),
		]));

		table.insert(Mnemonic::Nop, ModeTable::from([(AddressingModeCategory::Implied, 0xEA)]));

		table.insert(Mnemonic::Ora, ModeTable::from([
			(AddressingModeCategory::Immediate, 0x09),
			(AddressingModeCategory::ZeroPage, 0x05),
			(AddressingModeCategory::ZeroPageXIndexed, 0x15),
			(AddressingModeCategory::Absolute, 0x0D),
			(AddressingModeCategory::AbsoluteXIndexed, 0x1D),
			(AddressingModeCategory::AbsoluteYIndexed, 0x19),
			(AddressingModeCategory::XIndexedIndirect, 0x01),
			(AddressingModeCategory::IndirectYIndexed, 0x11),
		]));

		table.insert(Mnemonic::Pha, ModeTable::from([(AddressingModeCategory::Implied, 0x48)]));
		table.insert(Mnemonic::Php, ModeTable::from([(AddressingModeCategory::Implied, 0x08)]));
		table.insert(Mnemonic::Pla, ModeTable::from([(AddressingModeCategory::Implied, 0x68)]));
		table.insert(Mnemonic::Plp, ModeTable::from([(AddressingModeCategory::Implied, 0x28)]));

		table.insert(Mnemonic::Rol, ModeTable::from([
			(AddressingModeCategory::Implied, 0x2A),
			(AddressingModeCategory::ZeroPage, 0x26),
			(AddressingModeCategory::ZeroPageXIndexed, 0x36),
			(AddressingModeCategory::Absolute, 0x2E),
			(AddressingModeCategory::AbsoluteXIndexed, 0x3E),
		]));

		table.insert(Mnemonic::Ror, ModeTable::from([
			(AddressingModeCategory::Implied, 0x6A),
			(AddressingModeCategory::ZeroPage, 0x66),
			(AddressingModeCategory::ZeroPageXIndexed, 0x76),
			(AddressingModeCategory::Absolute, 0x6E),
			(AddressingModeCategory::AbsoluteXIndexed, 0x7E),
		]));

		table.insert(Mnemonic::Rti, ModeTable::from([(AddressingModeCategory::Implied, 0x40)]));
		table.insert(Mnemonic::Rts, ModeTable::from([(AddressingModeCategory::Implied, 0x60)]));

		table.insert(Mnemonic::Sbc, ModeTable::from([
			(AddressingModeCategory::Immediate, 0xE9),
			(AddressingModeCategory::ZeroPage, 0xE5),
			(AddressingModeCategory::ZeroPageXIndexed, 0xF5),
			(AddressingModeCategory::Absolute, 0xED),
			(AddressingModeCategory::AbsoluteXIndexed, 0xFD),
			(AddressingModeCategory::AbsoluteYIndexed, 0xF9),
			(AddressingModeCategory::XIndexedIndirect, 0xE1),
			(AddressingModeCategory::IndirectYIndexed, 0xF1),
		]));

		table.insert(Mnemonic::Sec, ModeTable::from([(AddressingModeCategory::Implied, 0x38)]));
		table.insert(Mnemonic::Sed, ModeTable::from([(AddressingModeCategory::Implied, 0xF8)]));
		table.insert(Mnemonic::Sei, ModeTable::from([(AddressingModeCategory::Implied, 0x78)]));

		// STA has no immediate form; storing into a literal is meaningless.
		table.insert(Mnemonic::Sta, ModeTable::from([
			(AddressingModeCategory::ZeroPage, 0x85),
			(AddressingModeCategory::ZeroPageXIndexed, 0x95),
			(AddressingModeCategory::Absolute, 0x8D),
			(AddressingModeCategory::AbsoluteXIndexed, 0x9D),
			(AddressingModeCategory::AbsoluteYIndexed, 0x99),
			(AddressingModeCategory::XIndexedIndirect, 0x81),
			(AddressingModeCategory::IndirectYIndexed, 0x91),
		]));

		table.insert(Mnemonic::Stx, ModeTable::from([
			(AddressingModeCategory::ZeroPage, 0x86),
			(AddressingModeCategory::ZeroPageYIndexed, 0x96),
			(AddressingModeCategory::Absolute, 0x8E),
		]));

		table.insert(Mnemonic::Sty, ModeTable::from([
			(AddressingModeCategory::ZeroPage, 0x84),
			(AddressingModeCategory::ZeroPageXIndexed, 0x94),
			(AddressingModeCategory::Absolute, 0x8C),
		]));

		table.insert(Mnemonic::Tax, ModeTable::from([(AddressingModeCategory::Implied, 0xAA)]));
		table.insert(Mnemonic::Tay, ModeTable::from([(AddressingModeCategory::Implied, 0xA8)]));
		table.insert(Mnemonic::Tsx, ModeTable::from([(AddressingModeCategory::Implied, 0xBA)]));
		table.insert(Mnemonic::Txa, ModeTable::from([(AddressingModeCategory::Implied, 0x8A)]));
		table.insert(Mnemonic::Txs, ModeTable::from([(AddressingModeCategory::Implied, 0x9A)]));
		table.insert(Mnemonic::Tya, ModeTable::from([(AddressingModeCategory::Implied, 0x98)]));

		table
	};
}
