use std::collections::HashMap;

use crate::vocabulary;

/// Dialogue capability of an actor.
#[derive(Debug, Clone, Default)]
pub struct Person {
    /// Subjects the actor can respond to.
    pub topics: Vec<Topic>,
    /// Answers used when no topic matches, keyed by action name.
    pub default_answers: HashMap<String, Vec<String>>,
    /// Said when the player addresses the actor without naming a topic.
    pub greeting: String,
    /// Longer name used when the actor is listed in a room.
    pub display_name: String,
    /// Whether the player has been introduced.
    pub known: bool,
}

impl Person {
    /// Create an actor record with a display name.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            ..Self::default()
        }
    }

    /// Add a topic.
    pub fn with_topic(mut self, topic: Topic) -> Self {
        self.topics.push(topic);
        self
    }

    /// Register fallback answers for an action.
    pub fn with_default_answers<I, S>(mut self, action: impl Into<String>, answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_answers
            .insert(action.into(), answers.into_iter().map(Into::into).collect());
        self
    }

    /// Set the greeting line.
    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }

    /// The fallback answers registered for an action.
    pub fn answers_for(&self, action: &str) -> &[String] {
        self.default_answers
            .get(action)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// A conversation subject with first-time and repeat answers.
#[derive(Debug, Clone, Default)]
pub struct Topic {
    /// Action name(s) this topic answers, space-separated ("ask", "give").
    pub action: String,
    /// Set once the topic has been discussed.
    pub used: bool,
    /// Words that bring the topic up.
    pub vocabulary: String,
    /// Answers for the first time.
    pub answers: Vec<String>,
    /// Answers once the topic has been discussed.
    pub repeat_answers: Vec<String>,
    /// The item handed over is removed from play when this topic fires.
    pub consumes_item: bool,
}

impl Topic {
    /// Create a topic for an action with its vocabulary.
    pub fn new(action: impl Into<String>, vocabulary: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            vocabulary: vocabulary.into(),
            ..Self::default()
        }
    }

    /// Add a first-time answer.
    pub fn answer(mut self, text: impl Into<String>) -> Self {
        self.answers.push(text.into());
        self
    }

    /// Add a repeat answer.
    pub fn repeat(mut self, text: impl Into<String>) -> Self {
        self.repeat_answers.push(text.into());
        self
    }

    /// Consume the given item when this topic fires.
    pub fn consuming(mut self) -> Self {
        self.consumes_item = true;
        self
    }

    /// Whether this topic answers the named action.
    pub fn answers_action(&self, action: &str) -> bool {
        vocabulary::matches(&self.action, action)
    }

    /// Whether a token brings this topic up.
    pub fn matches(&self, word: &str) -> bool {
        vocabulary::matches(&self.vocabulary, word)
    }
}
