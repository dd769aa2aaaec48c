//! Instruction-related types created in the parser and consumed in the assembler.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use flexstr::ToSharedStr;
use miette::SourceSpan;

use super::AddressingMode;
use crate::error::{AssemblyCode, AssemblyError};

/// One resolved CPU instruction: a mnemonic paired with exactly one addressing mode. The mode carries the operand at
/// the width the mode requires, so there is no separate operand field to keep consistent.
#[derive(Clone, Copy, Debug)]
pub struct Instruction {
	/// Instruction mnemonic.
	pub mnemonic:    Mnemonic,
	/// The addressing mode this statement resolved to.
	pub mode:        AddressingMode,
	pub(crate) span: SourceSpan,
}

impl Display for Instruction {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
		match self.mode {
			AddressingMode::Implied => write!(f, "{}", self.mnemonic),
			mode => write!(f, "{} {mode}", self.mnemonic),
		}
	}
}

/// The 56 documented mnemonics of the MOS 6502. Which addressing modes each one supports is recorded solely in the
/// opcode table; the branch mnemonics are recognized here but have no encodable mode in this assembler.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[allow(missing_docs)]
pub enum Mnemonic {
	Adc,
	And,
	Asl,
	Bcc,
	Bcs,
	Beq,
	Bit,
	Bmi,
	Bne,
	Bpl,
	Brk,
	Bvc,
	Bvs,
	Clc,
	Cld,
	Cli,
	Clv,
	Cmp,
	Cpx,
	Cpy,
	Dec,
	Dex,
	Dey,
	Eor,
	Inc,
	Inx,
	Iny,
	Jmp,
	Jsr,
	Lda,
	Ldx,
	Ldy,
	Lsr,
	Nop,
	Ora,
	Pha,
	Php,
	Pla,
	Plp,
	Rol,
	Ror,
	Rti,
	Rts,
	Sbc,
	Sec,
	Sed,
	Sei,
	Sta,
	Stx,
	Sty,
	Tax,
	Tay,
	Tsx,
	Txa,
	Txs,
	Tya,
}

impl Mnemonic {
	/// Parse a mnemonic from its uppercase source-text spelling.
	/// # Errors
	/// If the text is not a documented 6502 mnemonic.
	pub fn parse(mnemonic: &str, location: SourceSpan, src: &Arc<AssemblyCode>) -> Result<Self, AssemblyError> {
		Ok(match mnemonic {
			"ADC" => Self::Adc,
			"AND" => Self::And,
			"ASL" => Self::Asl,
			"BCC" => Self::Bcc,
			"BCS" => Self::Bcs,
			"BEQ" => Self::Beq,
			"BIT" => Self::Bit,
			"BMI" => Self::Bmi,
			"BNE" => Self::Bne,
			"BPL" => Self::Bpl,
			"BRK" => Self::Brk,
			"BVC" => Self::Bvc,
			"BVS" => Self::Bvs,
			"CLC" => Self::Clc,
			"CLD" => Self::Cld,
			"CLI" => Self::Cli,
			"CLV" => Self::Clv,
			"CMP" => Self::Cmp,
			"CPX" => Self::Cpx,
			"CPY" => Self::Cpy,
			"DEC" => Self::Dec,
			"DEX" => Self::Dex,
			"DEY" => Self::Dey,
			"EOR" => Self::Eor,
			"INC" => Self::Inc,
			"INX" => Self::Inx,
			"INY" => Self::Iny,
			"JMP" => Self::Jmp,
			"JSR" => Self::Jsr,
			"LDA" => Self::Lda,
			"LDX" => Self::Ldx,
			"LDY" => Self::Ldy,
			"LSR" => Self::Lsr,
			"NOP" => Self::Nop,
			"ORA" => Self::Ora,
			"PHA" => Self::Pha,
			"PHP" => Self::Php,
			"PLA" => Self::Pla,
			"PLP" => Self::Plp,
			"ROL" => Self::Rol,
			"ROR" => Self::Ror,
			"RTI" => Self::Rti,
			"RTS" => Self::Rts,
			"SBC" => Self::Sbc,
			"SEC" => Self::Sec,
			"SED" => Self::Sed,
			"SEI" => Self::Sei,
			"STA" => Self::Sta,
			"STX" => Self::Stx,
			"STY" => Self::Sty,
			"TAX" => Self::Tax,
			"TAY" => Self::Tay,
			"TSX" => Self::Tsx,
			"TXA" => Self::Txa,
			"TXS" => Self::Txs,
			"TYA" => Self::Tya,
			_ =>
				return Err(AssemblyError::InvalidMnemonic {
					mnemonic: mnemonic.to_shared_str(),
					location,
					src: src.clone(),
				}),
		})
	}

	/// The canonical uppercase spelling of this mnemonic.
	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::Adc => "ADC",
			Self::And => "AND",
			Self::Asl => "ASL",
			Self::Bcc => "BCC",
			Self::Bcs => "BCS",
			Self::Beq => "BEQ",
			Self::Bit => "BIT",
			Self::Bmi => "BMI",
			Self::Bne => "BNE",
			Self::Bpl => "BPL",
			Self::Brk => "BRK",
			Self::Bvc => "BVC",
			Self::Bvs => "BVS",
			Self::Clc => "CLC",
			Self::Cld => "CLD",
			Self::Cli => "CLI",
			Self::Clv => "CLV",
			Self::Cmp => "CMP",
			Self::Cpx => "CPX",
			Self::Cpy => "CPY",
			Self::Dec => "DEC",
			Self::Dex => "DEX",
			Self::Dey => "DEY",
			Self::Eor => "EOR",
			Self::Inc => "INC",
			Self::Inx => "INX",
			Self::Iny => "INY",
			Self::Jmp => "JMP",
			Self::Jsr => "JSR",
			Self::Lda => "LDA",
			Self::Ldx => "LDX",
			Self::Ldy => "LDY",
			Self::Lsr => "LSR",
			Self::Nop => "NOP",
			Self::Ora => "ORA",
			Self::Pha => "PHA",
			Self::Php => "PHP",
			Self::Pla => "PLA",
			Self::Plp => "PLP",
			Self::Rol => "ROL",
			Self::Ror => "ROR",
			Self::Rti => "RTI",
			Self::Rts => "RTS",
			Self::Sbc => "SBC",
			Self::Sec => "SEC",
			Self::Sed => "SED",
			Self::Sei => "SEI",
			Self::Sta => "STA",
			Self::Stx => "STX",
			Self::Sty => "STY",
			Self::Tax => "TAX",
			Self::Tay => "TAY",
			Self::Tsx => "TSX",
			Self::Txa => "TXA",
			Self::Txs => "TXS",
			Self::Tya => "TYA",
		}
	}
}

impl Display for Mnemonic {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
		f.pad(self.name())
	}
}
