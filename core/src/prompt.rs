use crate::model::{ActionKind, Fields};

const NO_STATS: &str =
    "No specific stats provided - provide general Instagram growth strategies";
const UNSPECIFIED: &str = "an unspecified topic";

/// Builds the instruction text for `action` from the submitted fields.
///
/// The first line always carries the action marker. Optional fields that are
/// absent or empty either drop their line or fall back to a default note;
/// whitespace-only values are kept verbatim.
pub fn build(action: ActionKind, fields: &Fields) -> String {
    let body = match action {
        ActionKind::GenerateCaption => caption(fields),
        ActionKind::SchedulePost => schedule(fields),
        ActionKind::AnalyzeAccount => analyze(fields),
        ActionKind::RespondComment => respond(fields),
    };
    format!("Action: {}\n\n{}", action.marker(), body)
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn optional_line(label: &str, value: &Option<String>) -> String {
    present(value)
        .map(|v| format!("{label}: {v}"))
        .unwrap_or_default()
}

fn caption(fields: &Fields) -> String {
    format!(
        "You are an expert Instagram content creator. Generate an engaging Instagram caption with relevant hashtags for a post about: {}.

{}

Provide:
1. A captivating caption (2-3 sentences)
2. 15-20 relevant hashtags
3. A call-to-action suggestion

Format the response in a clear, copy-paste ready format.",
        present(&fields.image_description).unwrap_or(UNSPECIFIED),
        optional_line("Tone", &fields.caption_input),
    )
}

fn schedule(fields: &Fields) -> String {
    format!(
        "You are an Instagram growth strategist. Provide optimal posting schedule recommendations for: {}.

{}

Provide:
1. Best days of the week to post
2. Optimal times (with timezone considerations)
3. Posting frequency recommendations
4. Content mix suggestions for maximum engagement

Be specific and actionable.",
        present(&fields.post_topic).unwrap_or(UNSPECIFIED),
        optional_line("Target audience location", &fields.post_time),
    )
}

fn analyze(fields: &Fields) -> String {
    format!(
        "You are an Instagram analytics expert. Analyze the following account information and provide actionable insights:

{}

Provide:
1. Key performance insights
2. Content strategy recommendations
3. Engagement improvement tactics
4. Follower growth strategies
5. Specific action items to implement this week

Be specific, data-driven, and actionable.",
        present(&fields.account_stats).unwrap_or(NO_STATS),
    )
}

fn respond(fields: &Fields) -> String {
    format!(
        "You are a professional social media manager. Generate a friendly, engaging response to this Instagram comment/message:

\"{}\"

Provide 2-3 response options:
1. A warm, friendly response
2. A professional response
3. A playful/casual response (if appropriate)

Each response should be authentic, engaging, and encourage further interaction.",
        present(&fields.comment_text).unwrap_or_default(),
    )
}
