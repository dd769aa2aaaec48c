//! The Token struct.

use std::fmt::Display;

use miette::{SourceOffset, SourceSpan};

use crate::sema::{Mnemonic, Register};

/// The width of an address token's hex digit run. The width, not the numeric value, decides between the zero-page
/// and absolute addressing-mode families downstream, so a padded `$0012` stays a 16-bit address.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AddressWidth {
	/// One or two hex digits; the address fits into the zero page.
	Byte,
	/// Three or four hex digits; a full 16-bit address.
	Word,
}

/// Assembly language tokens.
#[derive(Clone, Copy, Debug)]
pub enum Token {
	/// Mnemonic, the start of an instruction.
	Mnemonic(Mnemonic, SourceSpan),
	/// Immediate number literal, introduced by `#` in the source; the value is already parsed.
	Number(u16, SourceSpan),
	/// A `$`-prefixed hexadecimal address with the width of its digit run.
	Address(u16, AddressWidth, SourceSpan),
	/// Index register name.
	Register(Register, SourceSpan),
	/// ','
	Comma(SourceOffset),
	/// '('
	OpenParenthesis(SourceOffset),
	/// ')'
	CloseParenthesis(SourceOffset),
	/// ASCII newline (\n).
	Newline(SourceOffset),
}

impl Token {
	/// Returns the source span where this token lives.
	#[must_use]
	pub fn span(&self) -> SourceSpan {
		match self {
			Self::Mnemonic(_, span) | Self::Number(_, span) | Self::Address(_, _, span) | Self::Register(_, span) =>
				*span,
			Self::Comma(offset)
			| Self::OpenParenthesis(offset)
			| Self::CloseParenthesis(offset)
			| Self::Newline(offset) => (offset.offset(), 1).into(),
		}
	}
}

impl Eq for Token {}
// Token equality ignores source locations, so test assertions can compare token content.
impl PartialEq for Token {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Mnemonic(mnemonic, ..), Self::Mnemonic(other_mnemonic, ..)) => mnemonic == other_mnemonic,
			(Self::Number(value, ..), Self::Number(other_value, ..)) => value == other_value,
			(Self::Address(value, width, ..), Self::Address(other_value, other_width, ..)) =>
				value == other_value && width == other_width,
			(Self::Register(register, ..), Self::Register(other_register, ..)) => register == other_register,
			(Self::Comma(..), Self::Comma(..))
			| (Self::OpenParenthesis(..), Self::OpenParenthesis(..))
			| (Self::CloseParenthesis(..), Self::CloseParenthesis(..))
			| (Self::Newline(..), Self::Newline(..)) => true,
			_ => false,
		}
	}
}

impl Display for Token {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
		match self {
			Self::Mnemonic(mnemonic, ..) => write!(f, "mnemonic `{mnemonic}`"),
			Self::Number(value, ..) => write!(f, "number #{value:02X}"),
			Self::Address(value, AddressWidth::Byte, ..) => write!(f, "address ${value:02X}"),
			Self::Address(value, AddressWidth::Word, ..) => write!(f, "address ${value:04X}"),
			Self::Register(register, ..) => write!(f, "register {register}"),
			Self::Comma(..) => f.pad("','"),
			Self::OpenParenthesis(..) => f.pad("'('"),
			Self::CloseParenthesis(..) => f.pad("')'"),
			Self::Newline(..) => f.pad("newline"),
		}
	}
}
