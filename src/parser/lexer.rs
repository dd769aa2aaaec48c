//! Lexing.

use std::iter::Peekable;
use std::sync::Arc;

use flexstr::ToSharedStr;

use super::token::{AddressWidth, Token};
use crate::error::{AssemblyCode, AssemblyError};
use crate::sema::{Mnemonic, Register};

/// Lex the given assembly into a list of tokens.
/// # Errors
/// Errors are returned for any syntactical error at the token level, e.g. invalid number literals or characters that
/// cannot start a token.
#[allow(clippy::missing_panics_doc)]
pub fn lex(source_code: Arc<AssemblyCode>) -> Result<Vec<Token>, AssemblyError> {
	let mut chars = source_code.text.chars().peekable();
	let mut index = 0usize;
	let mut tokens = Vec::new();

	while let Some(chr) = chars.next() {
		match chr {
			// \r is treated as white space and ignored.
			'\n' => {
				tokens.push(Token::Newline(index.into()));
				index += 1;
			},
			chr if chr.is_whitespace() => index += 1,
			'A' ..= 'Z' => {
				let word = next_word(&mut chars, chr);
				let span = (index, word.len()).into();
				tokens.push(match Register::parse(&word) {
					Some(register) => Token::Register(register, span),
					None => Token::Mnemonic(Mnemonic::parse(&word, span, &source_code)?, span),
				});
				index += word.len();
			},
			'#' => {
				// Bare immediate digit runs are interpreted as hexadecimal just like `$` addresses; `#10` is the
				// value 0x10. TODO: confirm that this convention is intended rather than decimal.
				let (value, size) = next_number(&mut chars, chr, char::is_ascii_digit, index, &source_code)?;
				tokens.push(Token::Number(value, (index, size + 1).into()));
				index += size + 1;
			},
			'$' => {
				let (value, size) = next_number(&mut chars, chr, char::is_ascii_hexdigit, index, &source_code)?;
				if size > 4 {
					return Err(AssemblyError::AddressTooLong {
						address:  format!("{value:0width$X}", width = size).to_shared_str(),
						location: (index, size + 1).into(),
						src:      source_code,
					});
				}
				let width = if size <= 2 { AddressWidth::Byte } else { AddressWidth::Word };
				tokens.push(Token::Address(value, width, (index, size + 1).into()));
				index += size + 1;
			},
			',' => {
				tokens.push(Token::Comma(index.into()));
				index += 1;
			},
			'(' => {
				tokens.push(Token::OpenParenthesis(index.into()));
				index += 1;
			},
			')' => {
				tokens.push(Token::CloseParenthesis(index.into()));
				index += 1;
			},
			';' => {
				index += 1;
				while let Some(chr) = chars.peek()
					&& chr != &'\n'
				{
					chars.next();
					index += 1;
				}
			},
			_ =>
				return Err(AssemblyError::UnexpectedCharacter {
					chr,
					location: (index, 1).into(),
					src: source_code,
				}),
		}
	}

	Ok(tokens)
}

fn next_word(chars: &mut Peekable<std::str::Chars<'_>>, start: char) -> String {
	let mut word = String::from(start);
	while let Some(chr) = chars.peek()
		&& chr.is_ascii_uppercase()
	{
		word.push(chars.next().unwrap());
	}
	word
}

fn next_number(
	chars: &mut Peekable<std::str::Chars<'_>>,
	marker: char,
	checker: fn(&char) -> bool,
	start_index: usize,
	source_code: &Arc<AssemblyCode>,
) -> Result<(u16, usize), AssemblyError> {
	let mut number_chars = String::default();
	while let Some(chr) = chars.peek()
		&& checker(chr)
	{
		number_chars.push(chars.next().unwrap());
	}
	if number_chars.is_empty() {
		return Err(AssemblyError::ExpectedDigits {
			marker,
			location: (start_index, 1).into(),
			src: source_code.clone(),
		});
	}
	u16::from_str_radix(&number_chars, 16)
		.map_err(|error| AssemblyError::InvalidNumber {
			error,
			location: (start_index, number_chars.len() + 1).into(),
			src: source_code.clone(),
		})
		.map(|value| (value, number_chars.len()))
}
