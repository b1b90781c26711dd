use crate::domain::error::DomainError;
use crate::domain::ports::follow_up_port::FollowUpGenerator;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const GROQ_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

const SYSTEM_PROMPT: &str =
    "You are KnowledgeQuest AI, an expert in bakery and pastry science.";

/// Canned lab-simulation questions served when the API is unreachable.
const LAB_QUESTIONS: &[&str] = &[
    "🔬 LAB SIMULATION: Based on this fragment, what is the optimal hydration percentage required to fully activate the enzyme complex?",
    "🔬 LAB SIMULATION: How would a temperature increase of 5°C during the proofing stage impact the stability of this formulation?",
    "🔬 LAB SIMULATION: Given these ingredients, how would the cross-linking profile change if the pH was adjusted to 5.5?",
];

/// Live follow-up generator backed by Groq chat completions. API failures
/// are expected and recoverable: they are logged and replaced with a canned
/// question, never surfaced to the caller.
pub struct GroqFollowUp {
    client: Client,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl GroqFollowUp {
    pub fn new(api_key: String, model: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: model.unwrap_or_else(|| "llama3-8b-8192".to_string()),
        }
    }

    async fn request(&self, fragment_text: &str) -> Result<String, DomainError> {
        let prompt = format!(
            "Based on the following technical fragment from a bakery/pastry ingredient sheet, \
             generate one thought-provoking 'Deep Exploration' question to help the user learn more. \
             Keep it concise:\n\n{fragment_text}"
        );

        let resp = self
            .client
            .post(GROQ_URL)
            .bearer_auth(&self.api_key)
            .json(&ChatRequest {
                model: self.model.clone(),
                messages: vec![
                    ChatMessage {
                        role: "system".to_string(),
                        content: SYSTEM_PROMPT.to_string(),
                    },
                    ChatMessage {
                        role: "user".to_string(),
                        content: prompt,
                    },
                ],
            })
            .send()
            .await
            .map_err(|e| DomainError::LanguageModel(format!("Groq API error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::LanguageModel(format!("Groq API {status}: {body}")));
        }

        let result: ChatResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::Parse(format!("Parse error: {e}")))?;
        result
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| DomainError::Parse("Groq response had no choices".to_string()))
    }

    fn canned_question(fragment_text: &str) -> String {
        // Keyed by fragment length so repeated queries vary without RNG state.
        LAB_QUESTIONS[fragment_text.len() % LAB_QUESTIONS.len()].to_string()
    }
}

#[async_trait::async_trait]
impl FollowUpGenerator for GroqFollowUp {
    async fn generate_follow_up(&self, fragment_text: &str) -> String {
        match self.request(fragment_text).await {
            Ok(question) if !question.trim().is_empty() => question,
            Ok(_) => Self::canned_question(fragment_text),
            Err(e) => {
                tracing::warn!(error = %e, "follow-up generation failed, using canned question");
                Self::canned_question(fragment_text)
            }
        }
    }
}
