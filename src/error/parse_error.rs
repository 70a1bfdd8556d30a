/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Found a character that does not start any token.
    #[error("Error on line {line}: Unrecognized character '{character}'.")]
    UnrecognizedCharacter {
        /// The offending character.
        character: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A string literal was not closed before the end of its line.
    #[error("Error on line {line}: String must be closed with a matching quote.")]
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found an unexpected token while parsing.
    #[error("Error on line {line}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered, or a description of what was expected.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function declaration lists more parameters than allowed.
    #[error("Error on line {line}: Function '{name}' declares {count} parameters, the limit is {max}.")]
    TooManyParameters {
        /// The function name.
        name:  String,
        /// How many parameters were declared.
        count: usize,
        /// The parameter limit.
        max:   usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A call passes more arguments than allowed.
    #[error("Error on line {line}: Call passes {count} arguments, the limit is {max}.")]
    TooManyArguments {
        /// How many arguments were passed.
        count: usize,
        /// The argument limit.
        max:   usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A declared parameter is not a bare identifier.
    #[error("Error on line {line}: Parameters of function '{function}' must be identifiers.")]
    InvalidParameter {
        /// The function being declared.
        function: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A `keep` declaration without an initializer.
    #[error("Error on line {line}: Cannot declare constant '{name}' without a value.")]
    MissingConstantValue {
        /// The constant name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The right-hand side of `.` was not an identifier.
    #[error("Error on line {line}: Cannot use dot operator without right hand identifier.")]
    InvalidMemberProperty {
        /// The source line where the error occurred.
        line: usize,
    },
}
