use std::sync::Arc;

use async_openai::{
    config::OpenAIConfig,
    types::responses::{
        CreateResponseArgs, InputMessage, InputRole, OutputItem, OutputMessageContent,
    },
    Client,
};
use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::{
    config::Config,
    constants::prompts,
    errors::{AppError, AppResult},
    models::domain::QuizQuestion,
    models::dto::request::{StudyPlanRequest, StudyTask},
    models::dto::response::StudyPlanResponse,
    services::model_helpers::{clean_repeated_lines, extract_json_object, truncate_chars},
};

/// Notes are clipped before being handed to the model.
const QUIZ_NOTES_LIMIT: usize = 1500;
const SUMMARY_NOTES_LIMIT: usize = 1024;
const CHAT_CONTEXT_LIMIT: usize = 1000;

/// One request/response exchange with an inference backend. No retries: a
/// failed call surfaces as an error and the caller falls back.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    async fn complete(
        &self,
        model: &str,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
    ) -> AppResult<String>;
}

/// OpenAI-compatible backend. A custom api base covers local
/// Ollama-compatible servers as well.
pub struct OpenAiBackend {
    client: Client<OpenAIConfig>,
}

impl OpenAiBackend {
    pub fn from_config(config: &Config) -> Option<Self> {
        let api_key = config.openai_api_key.as_ref()?;

        let mut openai_config = OpenAIConfig::new().with_api_key(api_key.expose_secret());
        if let Some(base) = &config.openai_api_base {
            openai_config = openai_config.with_api_base(base);
        }

        Some(Self {
            client: Client::with_config(openai_config),
        })
    }
}

#[async_trait]
impl InferenceBackend for OpenAiBackend {
    async fn complete(
        &self,
        model: &str,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
    ) -> AppResult<String> {
        let request = CreateResponseArgs::default()
            .model(model)
            .max_output_tokens(max_tokens)
            .input(vec![
                InputMessage {
                    role: InputRole::System,
                    content: vec![system_prompt.into()],
                    status: None,
                },
                InputMessage {
                    role: InputRole::User,
                    content: vec![user_prompt.into()],
                    status: None,
                },
            ])
            .build()?;

        let response = self.client.responses().create(request).await?;

        for item in response.output {
            if let OutputItem::Message(message) = item {
                for content in message.content {
                    if let OutputMessageContent::OutputText(text) = content {
                        let trimmed = text.text.trim();
                        if trimmed.is_empty() {
                            continue;
                        }
                        return Ok(trimmed.to_string());
                    }
                }
            }
        }

        Err(AppError::ModelError(
            "no text output returned from model".to_string(),
        ))
    }
}

/// Wraps an optional inference backend behind the study-assistant operations.
/// When no backend is configured every call returns `ModelUnavailable` and
/// the handlers take their heuristic fallback path.
pub struct ModelService {
    backend: Option<Arc<dyn InferenceBackend>>,
    chat_model: String,
    summarization_model: String,
    max_tokens: u32,
}

impl ModelService {
    pub fn from_config(config: &Config) -> Self {
        let backend = OpenAiBackend::from_config(config)
            .map(|backend| Arc::new(backend) as Arc<dyn InferenceBackend>);

        Self::new(backend, config)
    }

    pub fn new(backend: Option<Arc<dyn InferenceBackend>>, config: &Config) -> Self {
        Self {
            backend,
            chat_model: config.chat_model.clone(),
            summarization_model: config.summarization_model.clone(),
            max_tokens: config.max_completion_tokens,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    fn backend(&self) -> AppResult<&Arc<dyn InferenceBackend>> {
        self.backend.as_ref().ok_or(AppError::ModelUnavailable)
    }

    /// Ask the model for a question set and parse it out of whatever prose
    /// surrounds the JSON.
    pub async fn generate_quiz(
        &self,
        notes: &str,
        num_questions: usize,
    ) -> AppResult<Vec<QuizQuestion>> {
        let backend = self.backend()?;

        let user_prompt = format!(
            "Create {} questions from these study notes:\n\n{}",
            num_questions,
            truncate_chars(notes, QUIZ_NOTES_LIMIT)
        );

        let output = backend
            .complete(
                &self.chat_model,
                prompts::QUIZ_SYSTEM_PROMPT,
                &user_prompt,
                self.max_tokens,
            )
            .await?;
        let output = clean_repeated_lines(&output);

        let questions = extract_json_object(&output)
            .and_then(|mut value| value.get_mut("questions").map(serde_json::Value::take))
            .and_then(|questions| serde_json::from_value::<Vec<QuizQuestion>>(questions).ok())
            .unwrap_or_default();

        if questions.is_empty() {
            return Err(AppError::ModelError(
                "model returned no usable questions".to_string(),
            ));
        }

        let mut questions = questions;
        questions.truncate(num_questions);
        Ok(questions)
    }

    pub async fn summarize_notes(&self, notes: &str, max_length: usize) -> AppResult<String> {
        let backend = self.backend()?;

        let user_prompt = format!(
            "Summarize this text in {} words or less:\n\n{}",
            max_length,
            truncate_chars(notes, SUMMARY_NOTES_LIMIT)
        );

        let summary = backend
            .complete(
                &self.summarization_model,
                prompts::SUMMARY_SYSTEM_PROMPT,
                &user_prompt,
                self.max_tokens,
            )
            .await?;
        let summary = clean_repeated_lines(&summary);

        if summary.is_empty() {
            return Err(AppError::ModelError("model returned an empty summary".to_string()));
        }

        Ok(summary)
    }

    pub async fn chat(&self, message: &str, context: &str) -> AppResult<String> {
        let backend = self.backend()?;

        let context_block = if context.is_empty() {
            String::new()
        } else {
            format!(
                "\n\nStudy Material Context:\n{}",
                truncate_chars(context, CHAT_CONTEXT_LIMIT)
            )
        };
        let user_prompt = format!("{}\n\nStudent's Question: {}", context_block, message);

        let response = backend
            .complete(
                &self.chat_model,
                prompts::TUTOR_SYSTEM_PROMPT,
                &user_prompt,
                self.max_tokens,
            )
            .await?;
        let response = clean_repeated_lines(&response);

        if response.is_empty() {
            return Err(AppError::ModelError("model returned an empty reply".to_string()));
        }

        Ok(response)
    }

    pub async fn study_plan(&self, request: &StudyPlanRequest) -> AppResult<StudyPlanResponse> {
        let backend = self.backend()?;

        let tasks_text: String = request
            .tasks
            .iter()
            .take(8)
            .map(Self::describe_task)
            .collect::<Vec<_>>()
            .join("\n");
        let user_prompt = format!(
            "Tasks:\n{}\n\nProgress: Accuracy {}, Efficiency {}",
            tasks_text,
            Self::describe_metric(request.user_progress.accuracy),
            Self::describe_metric(request.user_progress.efficiency),
        );

        let output = backend
            .complete(
                &self.chat_model,
                prompts::STUDY_PLAN_SYSTEM_PROMPT,
                &user_prompt,
                self.max_tokens,
            )
            .await?;
        let output = clean_repeated_lines(&output);

        let mut plan: StudyPlanResponse = extract_json_object(&output)
            .and_then(|value| serde_json::from_value(value).ok())
            .ok_or_else(|| {
                AppError::ModelError("model returned no usable study plan".to_string())
            })?;

        if plan.recommendations.is_empty() {
            return Err(AppError::ModelError(
                "model returned no recommendations".to_string(),
            ));
        }
        plan.recommendations.truncate(5);

        Ok(plan)
    }

    fn describe_task(task: &StudyTask) -> String {
        format!(
            "- {}: {}% done, due {}",
            if task.title.is_empty() { "Task" } else { &task.title },
            task.progress,
            task.due.as_deref().unwrap_or("N/A")
        )
    }

    fn describe_metric(metric: Option<f64>) -> String {
        metric
            .map(|m| m.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }
}
