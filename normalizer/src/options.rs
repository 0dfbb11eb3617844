/// The conventional core size. Operand offsets wrap into `[0, CORE_SIZE)`.
pub const CORE_SIZE: i64 = 8000;

/// Width of the opcode and A-operand columns.
pub const COLUMN_WIDTH: usize = 8;

pub const COMMENT_MARKER: char = ';';

/// Knobs for a normalization pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Modulus applied to operand values. Must be positive.
    pub core_size: i64,
    pub column_width: usize,
    /// Lines starting with this character are copied through untouched.
    pub comment_marker: char,
    /// When `false`, only spacing is normalized and operands are kept as written.
    pub canonicalize: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            core_size: CORE_SIZE,
            column_width: COLUMN_WIDTH,
            comment_marker: COMMENT_MARKER,
            canonicalize: true,
        }
    }
}
