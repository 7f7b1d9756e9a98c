//! Contains error types used throughout the library.



//		Packages

use thiserror::Error as ThisError;



//		Enums

//		ConversionError
/// Represents all possible conversion errors that can occur.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ConversionError {
	/// The incoming value is negative, which is not allowed by the destination
	/// type.
	#[error("Value is negative")]
	ValueIsNegative,

	/// The incoming value is too large to be converted to the destination type.
	#[error("Value too large")]
	ValueTooLarge,
}

//		ParseError
/// Represents all possible parsing and radix errors that can occur.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ParseError {
	/// The input contains no digits once signs and prefixes have been removed.
	#[error("No digits found")]
	NoDigits,

	/// A character outside the digit range for the requested base.
	#[error("Non-digit character found: {0:?}")]
	NonDigit(char),

	/// A character that is not a hexadecimal digit in a base-16 parse.
	#[error("Non-hexadecimal character found: {0:?}")]
	NonHexDigit(char),

	/// A base outside the supported set.
	#[error("Unsupported base: {0}")]
	UnsupportedBase(u16),
}


