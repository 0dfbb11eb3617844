use std::fmt::{self, Display, Formatter};

pub const ORG: &str = "ORG";
pub const START: &str = "START";

/// The program's entry point as far as it's known during a pass.
#[derive(Debug, Clone, PartialEq)]
pub enum OrgValue {
    /// No `ORG` directive seen yet.
    Default,
    /// `ORG START`: the entry point is wherever the `START` label turns up.
    Placeholder,
    /// The value of an explicit `ORG` directive.
    Token(String),
    /// Derived from the input line index of a `START` label.
    Index(isize),
}

impl Default for OrgValue {
    fn default() -> Self {
        OrgValue::Default
    }
}

impl OrgValue {
    pub fn from_directive(value: &str) -> Self {
        if value == START {
            OrgValue::Placeholder
        } else {
            OrgValue::Token(value.to_string())
        }
    }

    /// Records a `START` label found on input line `index`.
    ///
    /// Only takes effect while no real `ORG` value has been given;
    /// the entry point becomes the index of the line before the label.
    pub fn apply_start_label(&mut self, index: usize) {
        if let OrgValue::Default | OrgValue::Placeholder = self {
            *self = OrgValue::Index(index as isize - 1);
        }
    }
}

impl Display for OrgValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            OrgValue::Default => write!(f, "0"),
            OrgValue::Placeholder => write!(f, "{}", START),
            OrgValue::Token(token) => write!(f, "{}", token),
            OrgValue::Index(index) => write!(f, "{}", index),
        }
    }
}
