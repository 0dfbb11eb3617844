//! The normalization pass over a whole load file.
//!
//! ```
//! # use redcode_normalize::{normalize, Options};
//! let source = "; imp\nSTART MOV.I $0, $-1\n";
//! let normalized = normalize(source, &Options::default()).unwrap();
//! assert_eq!(normalized, "; imp\nORG     0\nMOV.I   $0,     $7999\n");
//! ```

use std::borrow::Cow;

use itertools::Itertools;
use log::debug;

use crate::error::{Error, LineContext, MalformedReason};
use crate::line::{Fields, Instruction, Operand};
use crate::operand::normalize_operand;
use crate::options::Options;
use crate::org::{OrgValue, ORG, START};

/// Rewrites a load file into its canonical form.
///
/// Comment lines are kept as they are. Every other non-blank line is re-emitted
/// as `OPCODE  A,      B` with operands reduced modulo the core size.
/// `ORG` directives are dropped and a single `ORG` line is placed right before
/// the first output line that doesn't start with the comment marker, or at the end
/// if there is none. An instruction whose opcode starts with the marker therefore
/// reads as a comment, both here and when the output is normalized again.
///
/// Fails on an `ORG` without a value, an instruction without an operand,
/// or (when canonicalizing) an operand that isn't a mode character and an integer.
pub fn normalize(text: &str, options: &Options) -> Result<String, Error> {
    if options.core_size <= 0 {
        return Err(Error::InvalidCoreSize(options.core_size));
    }

    let mut org = OrgValue::default();
    let mut lines = Vec::new();

    for (index, src) in text.lines().enumerate() {
        if src.starts_with(options.comment_marker) {
            lines.push(Cow::Borrowed(src));
            continue;
        }

        let Fields { words, trailing } = Fields::split(src);
        let mut words = words.as_slice();
        let first = match words.first() {
            Some(first) => *first,
            None => continue,
        };

        if first.src == ORG {
            let value = words.get(1).ok_or_else(|| Error::Malformed {
                line: LineContext::new(index, src, first.span),
                reason: MalformedReason::MissingOrgValue,
            })?;
            org = OrgValue::from_directive(value.src);
            debug!("line {}: ORG set to {}", index + 1, org);
            continue;
        }

        if first.src == START {
            org.apply_start_label(index);
            debug!("line {}: START label, ORG is {}", index + 1, org);
            words = &words[1..];
        }

        let mut instruction = Instruction::new(words, trailing).ok_or_else(|| {
            let anchor = words.first().copied().unwrap_or(first);
            Error::Malformed {
                line: LineContext::new(index, src, anchor.span),
                reason: MalformedReason::MissingOperand,
            }
        })?;

        if options.canonicalize {
            canonicalize(&mut instruction.a_operand, index, src, options.core_size)?;
            canonicalize(&mut instruction.b_operand, index, src, options.core_size)?;
        }

        lines.push(Cow::Owned(instruction.format(options.column_width)));
    }

    let org_line = format!("{:<width$}{}", ORG, org, width = options.column_width);
    let position = lines.iter()
        .position(|line| !line.starts_with(options.comment_marker))
        .unwrap_or_else(|| lines.len());
    lines.insert(position, Cow::Owned(org_line));

    let mut output = lines.iter().join("\n");
    output.push('\n');
    Ok(output)
}

fn canonicalize(operand: &mut Operand, index: usize, src: &str, core_size: i64) -> Result<(), Error> {
    operand.text = normalize_operand(&operand.text, core_size).map_err(|_| Error::InvalidOperand {
        line: LineContext::new(index, src, operand.span),
        operand: operand.text.clone(),
    })?;
    Ok(())
}
