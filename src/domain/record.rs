//! Journal records and the emotion catalog

use chrono::Local;
use serde::{Deserialize, Serialize};

/// A single journal record as stored by the note store.
///
/// All fields besides `title`/`content` are optional on the wire; the
/// calendar aggregation tolerates records missing a timestamp or emotion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub emotion_name: Option<String>,
    #[serde(default)]
    pub emotion_emoji: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl JournalRecord {
    /// Create a record stamped with the current local time.
    pub fn new(title: String, content: String, emotion: Option<&Emotion>) -> Self {
        JournalRecord {
            id: None,
            title,
            content,
            emotion_name: emotion.map(|e| e.name.to_string()),
            emotion_emoji: emotion.map(|e| e.emoji.to_string()),
            timestamp: Some(Local::now().to_rfc3339()),
        }
    }
}

/// A named emotion with its display emoji
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emotion {
    pub name: &'static str,
    pub emoji: &'static str,
}

/// The fixed emotion catalog offered when writing a record
pub const EMOTIONS: &[Emotion] = &[
    Emotion { name: "Feliz", emoji: "😊" },
    Emotion { name: "Triste", emoji: "😢" },
    Emotion { name: "Enojado", emoji: "😠" },
    Emotion { name: "Ansioso", emoji: "😟" },
    Emotion { name: "Agradecido", emoji: "🙏" },
    Emotion { name: "Cansado", emoji: "😴" },
    Emotion { name: "Normal", emoji: "😐" },
];

/// Look up an emotion by name, case-insensitively
pub fn find_emotion(name: &str) -> Option<&'static Emotion> {
    let normalized = name.trim().to_lowercase();
    EMOTIONS.iter().find(|e| e.name.to_lowercase() == normalized)
}
