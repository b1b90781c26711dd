/// Produces a "deep exploration" follow-up question for the best-matching
/// fragment. Implementations never fail: a provider that cannot answer falls
/// back internally to a canned question.
#[async_trait::async_trait]
pub trait FollowUpGenerator: Send + Sync {
    async fn generate_follow_up(&self, fragment_text: &str) -> String;
}
