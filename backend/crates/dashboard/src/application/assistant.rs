//! Assistant Use Case
//!
//! Thin wrapper that supplies thread-local randomness to the catalog.

use std::sync::Arc;

use crate::domain::services::assistant::{AssistantReply, ResponseCatalog, Sentiment};

#[derive(Clone)]
pub struct AssistantUseCase {
    catalog: Arc<ResponseCatalog>,
}

impl AssistantUseCase {
    pub fn new(catalog: Arc<ResponseCatalog>) -> Self {
        Self { catalog }
    }

    pub fn respond(&self, query: &str) -> AssistantReply {
        self.catalog.respond(query, &mut rand::rng())
    }

    pub fn post_suggestion(&self) -> String {
        self.catalog.post_suggestion(&mut rand::rng()).to_string()
    }

    /// Tailored to `post_content` when given, generic otherwise
    pub fn comment_suggestion(&self, post_content: Option<&str>) -> (Sentiment, String) {
        let mut rng = rand::rng();
        match post_content.map(str::trim).filter(|c| !c.is_empty()) {
            Some(content) => {
                let (sentiment, text) = self.catalog.context_aware_comment(content, &mut rng);
                (sentiment, text.to_string())
            }
            None => (
                Sentiment::Neutral,
                self.catalog.comment_suggestion(&mut rng).to_string(),
            ),
        }
    }
}
