//! The Register struct.

use std::fmt::Display;

/// The index registers of the 6502 that can appear in operand position. The accumulator and the stack pointer are
/// never spelled out in operands, so they have no representation here.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Register {
	/// First index register.
	X,
	/// Second index register.
	Y,
}

impl Register {
	/// Parse a register from its source-text name; register names are uppercase like everything else in the
	/// instruction syntax.
	#[must_use]
	pub fn parse(name: &str) -> Option<Self> {
		match name {
			"X" => Some(Self::X),
			"Y" => Some(Self::Y),
			_ => None,
		}
	}
}

impl Display for Register {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
		f.pad(match self {
			Self::X => "X",
			Self::Y => "Y",
		})
	}
}
