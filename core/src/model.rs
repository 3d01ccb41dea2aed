use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// The four canned operations a caller can ask the agent for.
///
/// Declaration order is the classification priority used when matching
/// free-form prompt text, see [`ActionKind::classify`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    Sequence,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ActionKind {
    GenerateCaption,
    SchedulePost,
    AnalyzeAccount,
    RespondComment,
}

impl ActionKind {
    /// Literal keyword embedded in every prompt built for this action.
    pub fn marker(&self) -> &'static str {
        match self {
            ActionKind::GenerateCaption => "generate_caption",
            ActionKind::SchedulePost => "schedule_post",
            ActionKind::AnalyzeAccount => "analyze_account",
            ActionKind::RespondComment => "respond_comment",
        }
    }

    /// First action (in priority order) whose marker occurs in `text`.
    pub fn classify(text: &str) -> Option<ActionKind> {
        enum_iterator::all::<ActionKind>().find(|kind| text.contains(kind.marker()))
    }
}

/// Optional form fields submitted alongside an action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_stats: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("Invalid action")]
    InvalidAction(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_action_kind_parses_wire_names() {
        assert_eq!(
            ActionKind::from_str("generate_caption"),
            Ok(ActionKind::GenerateCaption)
        );
        assert_eq!(
            ActionKind::from_str("respond_comment"),
            Ok(ActionKind::RespondComment)
        );
        assert!(ActionKind::from_str("unknown_action").is_err());
        assert!(ActionKind::from_str("GenerateCaption").is_err());
    }

    #[test]
    fn test_marker_matches_display() {
        for kind in enum_iterator::all::<ActionKind>() {
            assert_eq!(kind.marker(), kind.to_string());
            assert_eq!(kind.marker(), AsRef::<str>::as_ref(&kind));
        }
    }

    #[test]
    fn test_classify_priority() {
        assert_eq!(
            ActionKind::classify("schedule_post then generate_caption"),
            Some(ActionKind::GenerateCaption)
        );
        assert_eq!(
            ActionKind::classify("respond_comment analyze_account"),
            Some(ActionKind::AnalyzeAccount)
        );
        assert_eq!(ActionKind::classify("nothing to see"), None);
    }

    #[test]
    fn test_fields_deserialize_camel_case() {
        let fields: Fields =
            serde_json::from_str(r#"{"imageDescription":"sunset","commentText":"love this!"}"#)
                .unwrap();
        assert_eq!(fields.image_description.as_deref(), Some("sunset"));
        assert_eq!(fields.comment_text.as_deref(), Some("love this!"));
        assert!(fields.post_topic.is_none());
    }
}
