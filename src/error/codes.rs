/// Error code registry
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 2000-2999: Input (token stream) errors
/// - 3000-3999: Validation errors
/// - 4000-4999: I/O errors
/// - 5000-5999: Judge errors
/// - 9000-9999: Other errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_PARSE_ERROR: u16 = 1002;
    pub const CONFIG_INVALID_VALUE: u16 = 1003;

    // Input errors (2000-2999)
    pub const INPUT_UNEXPECTED_EOF: u16 = 2001;
    pub const INPUT_NOT_AN_INTEGER: u16 = 2002;
    pub const INPUT_BAD_COUNT: u16 = 2003;

    // Validation errors (3000-3999)
    pub const VALIDATION_DIGIT_OUT_OF_RANGE: u16 = 3001;
    pub const VALIDATION_EMPTY_CHAIN: u16 = 3002;
    pub const VALIDATION_NOT_A_NUMERAL: u16 = 3003;

    // I/O errors (4000-4999)
    pub const IO_READ_FAILED: u16 = 4001;
    pub const IO_WRITE_FAILED: u16 = 4002;

    // Judge errors (5000-5999)
    pub const JUDGE_WRONG_ANSWER: u16 = 5001;
    pub const JUDGE_INVALID_INPUT: u16 = 5002;
    pub const JUDGE_TIME_LIMIT_EXCEEDED: u16 = 5003;

    // Other errors (9000-9999)
    pub const OTHER_GENERIC: u16 = 9000;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        1000 => "Generic configuration error",
        1001 => "Configuration file not found",
        1002 => "Failed to parse configuration",
        1003 => "Invalid value in configuration",

        2001 => "Input ended before all required values were read",
        2002 => "Token is not a valid integer",
        2003 => "Element count is not a valid non-negative integer",

        3001 => "Digit outside the range 0-9",
        3002 => "Digit chain has no digits",
        3003 => "Text is not a decimal numeral",

        4001 => "Failed to read input",
        4002 => "Failed to write output",

        5001 => "Output did not match the expected answer",
        5002 => "Test case input was rejected",
        5003 => "Test case ran past its time limit",

        9000 => "Unknown error",
        _ => "Unrecognized error code",
    }
}
