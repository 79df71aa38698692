//! Content Assistant
//!
//! Keyword-driven helper that suggests posts and comments. Classification
//! is a pure function of the input text; every reply text lives in a JSON
//! [`ResponseCatalog`] so wording can change without touching code.
//!
//! ## Examples
//! ```rust
//! use dashboard::domain::services::assistant::{classify_query, QueryTopic};
//!
//! assert_eq!(classify_query("Any post ideas?"), QueryTopic::PostIdea);
//! assert_eq!(classify_query("how do I get more likes"), QueryTopic::Engagement);
//! ```

use std::path::Path;

use kernel::error::app_error::{AppError, AppResult};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

/// Catalog compiled into the binary
const BUNDLED_CATALOG: &str = include_str!("../../../assets/assistant_catalog.json");

/// What a query is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryTopic {
    PostIdea,
    CommentHelp,
    Trends,
    Engagement,
    General,
}

/// Tone of a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Checked in order; the first topic with a matching keyword wins
const TOPIC_KEYWORDS: [(QueryTopic, &[&str]); 4] = [
    (QueryTopic::PostIdea, &["post", "content", "idea"]),
    (QueryTopic::CommentHelp, &["comment", "reply"]),
    (QueryTopic::Trends, &["trend", "popular"]),
    (QueryTopic::Engagement, &["engagement", "likes"]),
];

const POSITIVE_WORDS: [&str; 5] = ["great", "awesome", "fantastic", "excited", "happy"];
const NEGATIVE_WORDS: [&str; 5] = ["sad", "disappointed", "sorry", "bad", "terrible"];

/// Classify a free-text query by case-insensitive substring match
pub fn classify_query(query: &str) -> QueryTopic {
    let query = query.to_lowercase();

    TOPIC_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| query.contains(k)))
        .map(|(topic, _)| *topic)
        .unwrap_or(QueryTopic::General)
}

/// Count distinct positive and negative words present in `text`
///
/// Substring matching, so "badge" counts as "bad".
pub fn analyze_sentiment(text: &str) -> Sentiment {
    let text = text.to_lowercase();
    let count = |words: &[&str]| words.iter().filter(|w| text.contains(*w)).count();

    let positive = count(&POSITIVE_WORDS);
    let negative = count(&NEGATIVE_WORDS);

    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}

// ============================================================================
// Response catalog
// ============================================================================

/// Where the reply to a topic comes from
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "from", rename_all = "snake_case")]
pub enum TopicReply {
    /// A random post suggestion after `prefix`
    PostSuggestions { prefix: String },
    /// A random comment suggestion after `prefix`
    CommentSuggestions { prefix: String },
    /// A random entry of `texts`, as is
    Pool { texts: Vec<String> },
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopicReplies {
    pub post_idea: TopicReply,
    pub comment_help: TopicReply,
    pub trends: TopicReply,
    pub engagement: TopicReply,
    pub general: TopicReply,
}

impl TopicReplies {
    fn get(&self, topic: QueryTopic) -> &TopicReply {
        match topic {
            QueryTopic::PostIdea => &self.post_idea,
            QueryTopic::CommentHelp => &self.comment_help,
            QueryTopic::Trends => &self.trends,
            QueryTopic::Engagement => &self.engagement,
            QueryTopic::General => &self.general,
        }
    }

    fn iter(&self) -> impl Iterator<Item = (QueryTopic, &TopicReply)> {
        [
            QueryTopic::PostIdea,
            QueryTopic::CommentHelp,
            QueryTopic::Trends,
            QueryTopic::Engagement,
            QueryTopic::General,
        ]
        .into_iter()
        .map(move |topic| (topic, self.get(topic)))
    }
}

/// Replies to a post, chosen by its sentiment
#[derive(Debug, Clone, Deserialize)]
pub struct SentimentReplies {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

/// All assistant wording
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseCatalog {
    pub post_suggestions: Vec<String>,
    pub comment_suggestions: Vec<String>,
    pub sentiment_replies: SentimentReplies,
    pub topics: TopicReplies,
}

/// Answer to a free-text query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistantReply {
    pub topic: QueryTopic,
    pub text: String,
}

impl ResponseCatalog {
    /// The catalog shipped with the crate
    pub fn bundled() -> AppResult<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Parse and validate a catalog
    pub fn from_json(json: &str) -> AppResult<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load an override catalog from disk
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            AppError::internal(format!(
                "Failed to read assistant catalog {}",
                path.display()
            ))
            .with_source(e)
        })?;
        Self::from_json(&json)
    }

    /// Every pool a reply can be drawn from must be non-empty
    fn validate(&self) -> AppResult<()> {
        let mut pools: Vec<(&str, &[String])> = vec![
            ("post_suggestions", self.post_suggestions.as_slice()),
            ("comment_suggestions", self.comment_suggestions.as_slice()),
            ("sentiment_replies.positive", self.sentiment_replies.positive.as_slice()),
            ("sentiment_replies.negative", self.sentiment_replies.negative.as_slice()),
        ];
        for (topic, reply) in self.topics.iter() {
            if let TopicReply::Pool { texts } = reply {
                pools.push((topic_key(topic), texts.as_slice()));
            }
        }

        match pools.into_iter().find(|(_, pool)| pool.is_empty()) {
            Some((name, _)) => Err(AppError::bad_request(format!(
                "Assistant catalog pool '{}' is empty",
                name
            ))),
            None => Ok(()),
        }
    }

    /// Answer a free-text query
    pub fn respond<R: Rng + ?Sized>(&self, query: &str, rng: &mut R) -> AssistantReply {
        let topic = classify_query(query);
        let text = match self.topics.get(topic) {
            TopicReply::PostSuggestions { prefix } => {
                format!("{}{}", prefix, pick(&self.post_suggestions, rng))
            }
            TopicReply::CommentSuggestions { prefix } => {
                format!("{}{}", prefix, pick(&self.comment_suggestions, rng))
            }
            TopicReply::Pool { texts } => pick(texts, rng).to_string(),
        };

        AssistantReply { topic, text }
    }

    pub fn post_suggestion<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        pick(&self.post_suggestions, rng)
    }

    pub fn comment_suggestion<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        pick(&self.comment_suggestions, rng)
    }

    /// Comment suited to the tone of `post_content`; neutral posts get a
    /// generic suggestion
    pub fn context_aware_comment<R: Rng + ?Sized>(
        &self,
        post_content: &str,
        rng: &mut R,
    ) -> (Sentiment, &str) {
        let sentiment = analyze_sentiment(post_content);
        let text = match sentiment {
            Sentiment::Positive => pick(&self.sentiment_replies.positive, rng),
            Sentiment::Negative => pick(&self.sentiment_replies.negative, rng),
            Sentiment::Neutral => self.comment_suggestion(rng),
        };
        (sentiment, text)
    }
}

fn topic_key(topic: QueryTopic) -> &'static str {
    match topic {
        QueryTopic::PostIdea => "topics.post_idea",
        QueryTopic::CommentHelp => "topics.comment_help",
        QueryTopic::Trends => "topics.trends",
        QueryTopic::Engagement => "topics.engagement",
        QueryTopic::General => "topics.general",
    }
}

// Pools are validated non-empty on load.
fn pick<'a, R: Rng + ?Sized>(pool: &'a [String], rng: &mut R) -> &'a str {
    pool.choose(rng).map(String::as_str).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn catalog() -> ResponseCatalog {
        ResponseCatalog::bundled().unwrap()
    }

    #[test]
    fn test_classify_priority_order() {
        assert_eq!(classify_query("give me a POST idea"), QueryTopic::PostIdea);
        // "post" outranks "comment"
        assert_eq!(classify_query("comment on my post"), QueryTopic::PostIdea);
        assert_eq!(classify_query("how should I reply?"), QueryTopic::CommentHelp);
        assert_eq!(classify_query("what's popular now"), QueryTopic::Trends);
        // "trend" outranks "likes"
        assert_eq!(classify_query("trending likes"), QueryTopic::Trends);
        assert_eq!(classify_query("boost engagement"), QueryTopic::Engagement);
        assert_eq!(classify_query("hello there"), QueryTopic::General);
        assert_eq!(classify_query(""), QueryTopic::General);
    }

    #[test]
    fn test_sentiment() {
        assert_eq!(analyze_sentiment("I'm so excited and happy!"), Sentiment::Positive);
        assert_eq!(analyze_sentiment("Sad news, terrible day"), Sentiment::Negative);
        assert_eq!(analyze_sentiment("great but sad"), Sentiment::Neutral);
        assert_eq!(analyze_sentiment("Just a regular Tuesday"), Sentiment::Neutral);
        // each word counts once however often it appears
        assert_eq!(
            analyze_sentiment("great great great, bad, sorry"),
            Sentiment::Negative
        );
    }

    #[test]
    fn test_bundled_catalog() {
        let catalog = catalog();
        assert_eq!(catalog.post_suggestions.len(), 10);
        assert_eq!(catalog.comment_suggestions.len(), 10);
        assert_eq!(catalog.sentiment_replies.positive.len(), 3);
        assert_eq!(catalog.sentiment_replies.negative.len(), 3);
        match &catalog.topics.general {
            TopicReply::Pool { texts } => assert_eq!(texts.len(), 8),
            other => panic!("unexpected general reply: {:?}", other),
        }
    }

    #[test]
    fn test_respond_post_idea() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(7);
        let reply = catalog.respond("I need content", &mut rng);
        assert_eq!(reply.topic, QueryTopic::PostIdea);
        let suggestion = reply
            .text
            .strip_prefix("Here's a content suggestion: ")
            .unwrap();
        assert!(catalog.post_suggestions.iter().any(|s| s == suggestion));
    }

    #[test]
    fn test_respond_comment_help() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(1);
        let reply = catalog.respond("help me reply", &mut rng);
        let suggestion = reply.text.strip_prefix("Try this comment: ").unwrap();
        assert!(catalog.comment_suggestions.iter().any(|s| s == suggestion));
    }

    #[test]
    fn test_respond_fixed_answers() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(3);
        let trends = catalog.respond("what's trending", &mut rng);
        assert!(trends.text.starts_with("Currently trending topics include sustainability"));
        let engagement = catalog.respond("more likes please", &mut rng);
        assert!(engagement.text.starts_with("To increase engagement"));
    }

    #[test]
    fn test_same_seed_same_reply() {
        let catalog = catalog();
        let a = catalog.respond("hi", &mut StdRng::seed_from_u64(42));
        let b = catalog.respond("hi", &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
        assert_eq!(a.topic, QueryTopic::General);
    }

    #[test]
    fn test_context_aware_comment() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(9);

        let (sentiment, text) = catalog.context_aware_comment("Awesome news!", &mut rng);
        assert_eq!(sentiment, Sentiment::Positive);
        assert!(catalog.sentiment_replies.positive.iter().any(|s| s == text));

        let (sentiment, text) = catalog.context_aware_comment("So disappointed", &mut rng);
        assert_eq!(sentiment, Sentiment::Negative);
        assert!(catalog.sentiment_replies.negative.iter().any(|s| s == text));

        let (sentiment, text) = catalog.context_aware_comment("New blog post", &mut rng);
        assert_eq!(sentiment, Sentiment::Neutral);
        assert!(catalog.comment_suggestions.iter().any(|s| s == text));
    }

    #[test]
    fn test_empty_pool_rejected() {
        let json = BUNDLED_CATALOG.replacen(
            "\"positive\": [",
            "\"positive\": [], \"unused\": [",
            1,
        );
        let err = ResponseCatalog::from_json(&json).unwrap_err();
        assert!(err.message().contains("sentiment_replies.positive"));
    }

    #[test]
    fn test_missing_topic_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(BUNDLED_CATALOG).unwrap();
        value["topics"].as_object_mut().unwrap().remove("trends");
        assert!(ResponseCatalog::from_json(&value.to_string()).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = ResponseCatalog::from_file("/nonexistent/catalog.json").unwrap_err();
        assert_eq!(err.status_code(), 500);
    }
}
