//! Error types and the source code container they point into.

use std::path::PathBuf;
use std::sync::Arc;

use flexstr::SharedStr;
use miette::{Diagnostic, MietteError, MietteSpanContents, SourceCode, SourceSpan, SpanContents};
use thiserror::Error;

use crate::sema::{AddressingModeCategory, Mnemonic, Register};

/// The source code for an assembly error.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct AssemblyCode {
	pub(crate) text: String,
	pub(crate) name: PathBuf,
}

impl AssemblyCode {
	/// Create a source code struct from in-memory text, e.g. a single statement handed over by a driver.
	#[must_use]
	pub fn new(text: &str, name: &str) -> Arc<Self> {
		Arc::new(Self { text: text.to_owned(), name: PathBuf::from(name) })
	}

	/// Create a new source code struct by loading a file's contents.
	/// # Errors
	/// If reading the file fails (doesn't exist, permissions wrong, I/O error etc.)
	pub fn from_file(filename: &str) -> Result<Arc<Self>, std::io::Error> {
		let mut path = PathBuf::from(filename);
		if path.is_relative() {
			path = std::env::current_dir()?.join(path);
		}
		path = path.canonicalize()?;
		let contents = std::fs::read_to_string(&path)?;
		Ok(Arc::new(Self { name: path, text: contents }))
	}

	/// Returns a copy of the file name of this source code.
	#[must_use]
	pub fn file_name(&self) -> String {
		self.name.as_os_str().to_string_lossy().to_string()
	}
}

impl SourceCode for AssemblyCode {
	fn read_span<'a>(
		&'a self,
		span: &SourceSpan,
		context_lines_before: usize,
		context_lines_after: usize,
	) -> Result<Box<dyn SpanContents<'a> + 'a>, MietteError> {
		let result = self.text.read_span(span, context_lines_before, context_lines_after)?;
		let retval = Box::new(MietteSpanContents::new_named(
			self.file_name(),
			result.data(),
			*result.span(),
			result.line(),
			result.column(),
			result.line_count(),
		));
		Ok(retval)
	}
}

/// All types of errors that the assembler can report to the user. Every error aborts exactly the statement being
/// processed; none of them is recoverable within that statement and none is ever defaulted into a guessed encoding.
#[derive(Error, Debug, Diagnostic)]
#[allow(clippy::module_name_repetitions, missing_docs)]
pub enum AssemblyError {
	//#region Lexical errors
	#[error("Unexpected character {chr}")]
	#[diagnostic(code(mosasm::syntax::unexpected_character), severity(Error))]
	UnexpectedCharacter {
		chr:      char,
		#[label("Unexpected")]
		location: SourceSpan,
		#[source_code]
		src:      Arc<AssemblyCode>,
	},

	#[error("`{mnemonic}` is not a MOS 6502 mnemonic")]
	#[diagnostic(
		code(mosasm::syntax::invalid_mnemonic),
		severity(Error),
		help("Instructions are written as one of the 56 documented 6502 mnemonics, in uppercase")
	)]
	InvalidMnemonic {
		mnemonic: SharedStr,
		#[label("Unknown mnemonic")]
		location: SourceSpan,
		#[source_code]
		src:      Arc<AssemblyCode>,
	},

	#[error("Expected digits after `{marker}`")]
	#[diagnostic(
		code(mosasm::syntax::expected_digits),
		severity(Error),
		help("`#` introduces an immediate value and `$` a hexadecimal address; both must be followed by digits")
	)]
	ExpectedDigits {
		marker:   char,
		#[label("Digits expected after this")]
		location: SourceSpan,
		#[source_code]
		src:      Arc<AssemblyCode>,
	},

	#[error("Invalid number: {error}")]
	#[diagnostic(code(mosasm::syntax::invalid_number), severity(Error))]
	InvalidNumber {
		#[source]
		error:    std::num::ParseIntError,
		#[label("This number is invalid")]
		location: SourceSpan,
		#[source_code]
		src:      Arc<AssemblyCode>,
	},

	#[error("Address `${address}` has too many hex digits")]
	#[diagnostic(
		code(mosasm::syntax::address_too_long),
		severity(Error),
		help("Addresses are written with one or two hex digits in the zero page and three or four above it")
	)]
	AddressTooLong {
		address:  SharedStr,
		#[label("Too many hex digits")]
		location: SourceSpan,
		#[source_code]
		src:      Arc<AssemblyCode>,
	},
	//#endregion

	//#region Syntax errors
	#[error("Expected a mnemonic to start the statement")]
	#[diagnostic(
		code(mosasm::syntax::expected_mnemonic),
		severity(Error),
		help("Every statement is a single instruction; labels and directives are resolved before this assembler runs")
	)]
	ExpectedMnemonic {
		#[label("This statement does not start with a mnemonic")]
		location: SourceSpan,
		#[source_code]
		src:      Arc<AssemblyCode>,
	},

	#[error("Invalid operand syntax for `{mnemonic}`")]
	#[diagnostic(
		code(mosasm::syntax::invalid_operand),
		severity(Error),
		help(
			"Operands take one of the forms #nn, $nn, $nnnn, $nn,X, $nn,Y, $nnnn,X, $nnnn,Y, ($nn,X) or ($nn),Y; \
			 instructions without an operand stand alone"
		)
	)]
	InvalidOperandSyntax {
		mnemonic: Mnemonic,
		#[label("In this statement")]
		location: SourceSpan,
		#[source_code]
		src:      Arc<AssemblyCode>,
	},

	#[error("Index register must be {expected}, not {actual}")]
	#[diagnostic(
		code(mosasm::syntax::invalid_index_register),
		severity(Error),
		help("The 6502 only provides the X-indexed indirect `($nn,X)` and indirect Y-indexed `($nn),Y` forms")
	)]
	InvalidIndexRegister {
		expected: Register,
		actual:   Register,
		#[label("This index register")]
		location: SourceSpan,
		#[source_code]
		src:      Arc<AssemblyCode>,
	},
	//#endregion

	//#region Semantic errors
	#[error("Invalid addressing mode `{mode}` for `{mnemonic}`")]
	#[diagnostic(
		code(mosasm::invalid_addressing_mode),
		severity(Error),
		help("{}", format_legal_modes(.mnemonic, .legal_modes))
	)]
	InvalidAddressingMode {
		mode:        AddressingModeCategory,
		mnemonic:    Mnemonic,
		legal_modes: Vec<AddressingModeCategory>,
		#[label("For this instruction")]
		location:    SourceSpan,
		#[source_code]
		src:         Arc<AssemblyCode>,
	},
	//#endregion
}

fn format_legal_modes(mnemonic: &Mnemonic, legal_modes: &[AddressingModeCategory]) -> String {
	if legal_modes.is_empty() {
		format!(
			"The instruction `{mnemonic}` has no encodable addressing mode here; relative branch offsets are computed \
			 by a later toolchain stage"
		)
	} else {
		format!(
			"The instruction `{mnemonic}` accepts the modes {}",
			legal_modes.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
		)
	}
}
