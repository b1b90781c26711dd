use crate::domain::ports::follow_up_port::FollowUpGenerator;

/// Shown when no language-model key is configured at all.
pub const NO_PROVIDER_NOTICE: &str =
    "Molecular analysis complete. (Connect a valid Groq API key to enable Deep Exploration AI questions).";

/// Follow-up generator used when no language-model provider is configured.
/// Selected at construction time, never probed per call.
pub struct StaticFollowUp;

#[async_trait::async_trait]
impl FollowUpGenerator for StaticFollowUp {
    async fn generate_follow_up(&self, _fragment_text: &str) -> String {
        NO_PROVIDER_NOTICE.to_string()
    }
}
