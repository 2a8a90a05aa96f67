use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of converting a string into a value.
///
/// The tags are independent outcomes, not a severity scale, so no ordering
/// is defined. Test for success with [`Status::is_valid`]; anything else is
/// a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The conversion worked and the value is usable.
    #[default]
    Valid,
    /// The conversion failed. The value is null and a message should say why.
    Invalid,
    /// The input is not valid yet, but could become valid with more
    /// characters. Typing is unfinished rather than wrong.
    Incomplete,
}

impl Status {
    pub fn is_valid(&self) -> bool {
        matches!(self, Status::Valid)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Valid => "valid",
            Status::Invalid => "invalid",
            Status::Incomplete => "incomplete",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
