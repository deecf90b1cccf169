//! # Canned Assistant
//!
//! A stand-in for a real assistant backend. Replies are drawn at random from
//! a fixed pool; the question text is recorded but never interpreted. There
//! is no simulated latency.
//!
//! [`Conversation`] keeps an in-memory transcript of [`ChatMessage`]s, each
//! stamped with an [`Identifier`] and a [`Timestamp`].

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::UtilityError;
use crate::identity::Identifier;
use crate::temporal::Timestamp;

/// Returned when the default pool has no responses to choose from.
pub const FALLBACK_RESPONSE: &str = "I'm here to help with your iOS development!";

/// Fallback for the [`ResponsePool::copilot`] pool.
pub const GENERATED_FALLBACK: &str = "AI response generated!";

const DEFAULT_RESPONSES: [&str; 5] = [
    "GitHub Copilot Pro helps you write better Swift code with intelligent suggestions.",
    "SwiftUI makes it easy to build beautiful iOS apps with declarative syntax.",
    "Use async/await for modern asynchronous programming in Swift.",
    "SF Symbols provides thousands of icons optimized for iOS.",
    "Combine framework enables reactive programming in Swift.",
];

const COPILOT_RESPONSES: [&str; 5] = [
    "GitHub Copilot Pro can help you write SwiftUI code faster and more efficiently!",
    "AI-driven development enables rapid prototyping and reduces boilerplate code.",
    "With Copilot, you can focus on solving problems rather than syntax.",
    "Let AI assist you in writing tests, documentation, and implementing features.",
    "Copilot understands context and can suggest entire functions based on your comments.",
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A fixed set of canned replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsePool {
    responses: Vec<String>,
    fallback: String,
}

impl ResponsePool {
    /// A pool of custom replies. An empty pool always answers with
    /// [`FALLBACK_RESPONSE`].
    pub fn new(responses: Vec<String>) -> Self {
        Self::with_fallback(responses, FALLBACK_RESPONSE)
    }

    /// A pool of custom replies with its own fallback.
    pub fn with_fallback(responses: Vec<String>, fallback: impl Into<String>) -> Self {
        Self {
            responses,
            fallback: fallback.into(),
        }
    }

    /// The home-screen pool about Copilot-assisted development, falling back
    /// to [`GENERATED_FALLBACK`].
    pub fn copilot() -> Self {
        Self::with_fallback(owned(&COPILOT_RESPONSES), GENERATED_FALLBACK)
    }

    /// The replies in this pool.
    pub fn responses(&self) -> &[String] {
        &self.responses
    }

    /// The reply used when the pool is empty.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Choose a reply using the supplied RNG.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.responses
            .choose(rng)
            .map(String::as_str)
            .unwrap_or(self.fallback.as_str())
    }

    /// Choose a reply using the thread-local RNG. The question is ignored.
    pub fn respond(&self, _question: &str) -> String {
        self.pick(&mut rand::thread_rng()).to_string()
    }
}

impl Default for ResponsePool {
    fn default() -> Self {
        Self::new(owned(&DEFAULT_RESPONSES))
    }
}

/// Three templated rewrites of `input`; none for blank input.
pub fn suggestions(input: &str) -> Vec<String> {
    let input = input.trim();
    if input.is_empty() {
        return Vec::new();
    }
    vec![
        format!("Enhanced version: {input}"),
        format!("Creative take: {input} with innovation"),
        format!("Professional: {input} optimized"),
    ]
}

/// Who sent a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The person asking.
    User,
    /// The canned assistant.
    Assistant,
}

/// One entry in a [`Conversation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message identifier.
    pub id: Identifier,
    /// Message body.
    pub text: String,
    /// Sender.
    pub role: Role,
    /// When the message was appended.
    pub sent_at: Timestamp,
}

impl ChatMessage {
    /// Create a message stamped with a fresh identifier and the current time.
    pub fn new(text: impl Into<String>, role: Role) -> Self {
        Self {
            id: Identifier::generate(),
            text: text.into(),
            role,
            sent_at: Timestamp::now(),
        }
    }

    /// Returns true if the user sent this message.
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

/// An append-only, in-memory chat transcript.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    pool: ResponsePool,
    messages: Vec<ChatMessage>,
}

impl Conversation {
    /// Start an empty conversation answering from `pool`.
    pub fn new(pool: ResponsePool) -> Self {
        Self {
            pool,
            messages: Vec::new(),
        }
    }

    /// Record `question`, append a canned reply, and return the reply.
    ///
    /// # Errors
    ///
    /// Returns [`UtilityError::EmptyMessage`] for empty or whitespace-only
    /// questions; the transcript is left unchanged.
    pub fn ask(&mut self, question: &str) -> Result<&ChatMessage, UtilityError> {
        self.ask_with(question, &mut rand::thread_rng())
    }

    /// As [`Conversation::ask`], drawing the reply with `rng`.
    pub fn ask_with<R: Rng + ?Sized>(
        &mut self,
        question: &str,
        rng: &mut R,
    ) -> Result<&ChatMessage, UtilityError> {
        if question.trim().is_empty() {
            return Err(UtilityError::EmptyMessage);
        }
        let reply = self.pool.pick(rng).to_string();
        self.messages.push(ChatMessage::new(question, Role::User));
        self.messages.push(ChatMessage::new(reply, Role::Assistant));
        self.messages.last().ok_or(UtilityError::EmptyMessage)
    }

    /// The transcript, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of messages in the transcript.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if nothing has been asked yet.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
