//! Intent classification for incoming chat messages.
//!
//! Classification is a first-match scan over an ordered pattern table. The
//! patterns overlap (a message can mention both "hi" and "book"), so the
//! table order is part of the observable behaviour and must not change.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Purpose of a single user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Farewell,
    Booking,
    Payment,
    Info,
    Cancel,
    Help,
    /// No pattern matched.
    Fallback,
}

impl Intent {
    /// Intents in the order their patterns are tried.
    pub const PRIORITY: [Intent; 7] = [
        Intent::Greeting,
        Intent::Farewell,
        Intent::Booking,
        Intent::Payment,
        Intent::Info,
        Intent::Cancel,
        Intent::Help,
    ];

    /// The pattern tested against the lower-cased message, if any.
    pub fn pattern(&self) -> Option<&'static str> {
        match self {
            Intent::Greeting => Some("(hello|hi|hey|greetings|howdy)"),
            Intent::Farewell => Some("(bye|goodbye|see you|farewell|thank you|thanks)"),
            Intent::Booking => Some("(book|reserve|entry)"),
            Intent::Payment => Some("(pay|payment|credit|card|transaction)"),
            Intent::Info => Some("(info|information|cost|price|hour|time|open|exhibit)"),
            Intent::Cancel => Some("(cancel|refund|return)"),
            Intent::Help => Some("(help|assist|support)"),
            Intent::Fallback => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Farewell => "farewell",
            Intent::Booking => "booking",
            Intent::Payment => "payment",
            Intent::Info => "info",
            Intent::Cancel => "cancel",
            Intent::Help => "help",
            Intent::Fallback => "fallback",
        }
    }
}

static INTENT_PATTERNS: Lazy<Vec<(Intent, Regex)>> = Lazy::new(|| {
    Intent::PRIORITY
        .iter()
        .filter_map(|intent| intent.pattern().map(|p| (*intent, p)))
        .map(|(intent, pattern)| {
            (
                intent,
                Regex::new(pattern).expect("intent patterns are valid regular expressions"),
            )
        })
        .collect()
});

/// Maps raw messages to intents.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentClassifier;

impl IntentClassifier {
    /// Returns the first intent whose pattern matches the lower-cased
    /// message, or `Fallback` when none does.
    pub fn classify(message: &str) -> Intent {
        let lowered = message.to_lowercase();
        INTENT_PATTERNS
            .iter()
            .find(|(_, regex)| regex.is_match(&lowered))
            .map(|(intent, _)| *intent)
            .unwrap_or(Intent::Fallback)
    }
}
