//! Classification labels.

use serde::Serialize;
use utoipa::ToSchema;

/// Who is on the other end of the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    /// A live person answered.
    Human,
    /// An answering machine or voicemail greeting.
    Machine,
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Human => write!(f, "human"),
            Label::Machine => write!(f, "machine"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_serialization() {
        assert_eq!(serde_json::to_string(&Label::Machine).unwrap(), "\"machine\"");
        assert_eq!(serde_json::to_string(&Label::Human).unwrap(), "\"human\"");
    }
}
