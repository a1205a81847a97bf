/// Why an input was rejected. Only ever logged; callers see `None`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ColorParseError {
    // Input shape
    Empty,
    UnknownKeyword,

    // Hex
    InvalidHexLength,
    InvalidHexDigit,

    // Functional notation
    UnknownFunction,
    MissingParen,
    ArgumentCount(usize),
    MissingAlphaSlash,
    InvalidNumber,
}

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ColorParseError::*;
        match self {
            Empty => write!(f, "empty color string"),
            UnknownKeyword => write!(f, "unknown color keyword"),

            InvalidHexLength => write!(f, "invalid hex length"),
            InvalidHexDigit => write!(f, "invalid hex digit"),

            UnknownFunction => write!(f, "unknown color function"),
            MissingParen => write!(f, "unbalanced parentheses"),
            ArgumentCount(n) => write!(f, "wrong argument count ({n})"),
            MissingAlphaSlash => write!(f, "space separated alpha needs '/'"),
            InvalidNumber => write!(f, "unparseable number"),
        }
    }
}

impl std::error::Error for ColorParseError {}
