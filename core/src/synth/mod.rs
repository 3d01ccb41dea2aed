pub mod templates;

use crate::model::ActionKind;
use once_cell::sync::Lazy;
use regex::Regex;
use std::time::Duration;

pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);
pub const DEFAULT_TONE: &str = "casual";

static TONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Tone: ([A-Za-z0-9_]+)").expect("tone pattern compiles. qed"));

/// Mock model: maps prompt text to a canned response after a fixed delay.
///
/// Holds no state besides the delay, so clones can be shared freely across
/// request handlers.
#[derive(Debug, Clone)]
pub struct Synthesizer {
    delay: Duration,
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl Synthesizer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Classifies free-form prompt text by action marker and answers with the
    /// matching template, or the generic fallback when nothing matches.
    pub async fn synthesize(&self, prompt: &str) -> String {
        match ActionKind::classify(prompt) {
            Some(action) => self.respond(action, prompt).await,
            None => {
                self.pause().await;
                templates::FALLBACK.to_string()
            }
        }
    }

    /// Answers for an already validated action.
    pub async fn respond(&self, action: ActionKind, prompt: &str) -> String {
        self.pause().await;
        render(action, prompt).to_string()
    }

    async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

fn render(action: ActionKind, prompt: &str) -> &'static str {
    match action {
        ActionKind::GenerateCaption => {
            // tone is read but does not select a different template yet
            let tone = extract_tone(prompt);
            tracing::debug!(tone, "caption tone");
            templates::CAPTION
        }
        ActionKind::SchedulePost => templates::SCHEDULE,
        ActionKind::AnalyzeAccount => templates::ANALYSIS,
        ActionKind::RespondComment => templates::COMMENT_REPLIES,
    }
}

/// First ASCII word following `Tone: ` in the prompt, `casual` when absent.
pub fn extract_tone(prompt: &str) -> &str {
    TONE_PATTERN
        .captures(prompt)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(DEFAULT_TONE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tokio::time::Instant;

    fn instant() -> Synthesizer {
        Synthesizer::new(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_synthesize_is_deterministic() {
        let synth = instant();
        let prompt = "Action: schedule_post\n\nfitness";
        assert_eq!(
            synth.synthesize(prompt).await,
            synth.synthesize(prompt).await
        );
    }

    #[tokio::test]
    async fn test_synthesize_templates_by_marker() {
        let synth = instant();
        assert_eq!(
            synth.synthesize("generate_caption").await,
            templates::CAPTION
        );
        assert_eq!(synth.synthesize("schedule_post").await, templates::SCHEDULE);
        assert_eq!(
            synth.synthesize("analyze_account").await,
            templates::ANALYSIS
        );
        assert_eq!(
            synth.synthesize("respond_comment").await,
            templates::COMMENT_REPLIES
        );
    }

    #[tokio::test]
    async fn test_synthesize_priority_and_fallback() {
        let synth = instant();
        assert_eq!(
            synth
                .synthesize("schedule_post and also generate_caption")
                .await,
            templates::CAPTION
        );
        assert_eq!(
            synth.synthesize("respond_comment, analyze_account").await,
            templates::ANALYSIS
        );
        assert_eq!(
            synth.synthesize("write me a poem").await,
            templates::FALLBACK
        );
    }

    #[tokio::test]
    async fn test_respond_ignores_prompt_markers() {
        let synth = instant();
        let out = synth
            .respond(ActionKind::RespondComment, "generate_caption")
            .await;
        assert_eq!(out, templates::COMMENT_REPLIES);
    }

    #[tokio::test]
    async fn test_caption_does_not_vary_by_tone() {
        let synth = instant();
        let casual = synth
            .respond(ActionKind::GenerateCaption, "Tone: casual")
            .await;
        let formal = synth
            .respond(ActionKind::GenerateCaption, "Tone: formal")
            .await;
        assert_eq!(casual, formal);
    }

    #[tokio::test]
    async fn test_delay_floor() {
        let delay = Duration::from_millis(50);
        let synth = Synthesizer::new(delay);

        let started = Instant::now();
        synth.synthesize("analyze_account").await;
        assert!(started.elapsed() >= delay);

        let started = Instant::now();
        synth.synthesize("no marker").await;
        assert!(started.elapsed() >= delay);
    }

    #[test]
    fn test_extract_tone() {
        assert_eq!(extract_tone("Tone: witty and bold"), "witty");
        assert_eq!(extract_tone("no tone here"), DEFAULT_TONE);
        assert_eq!(extract_tone("Tone: "), DEFAULT_TONE);
        assert_eq!(extract_tone("Tone: café au lait"), "caf");
        assert_eq!(extract_tone("Tone: élégant"), DEFAULT_TONE);
    }

    #[test]
    fn test_default_delay() {
        assert_eq!(Synthesizer::default().delay(), Duration::from_secs(1));
    }
}
