//! Authored question → answer table.
//!
//! The catalog is built once at startup and shared read-only. Lookups are
//! exact and case-sensitive: the widget only answers questions it was
//! explicitly authored for.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::action::ActionTag;
use super::error::{ChatbotError, ChatbotResult};

/// One authored question and its canned answer.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Exact question text used as the lookup key.
    pub question: String,
    /// Answer body (simple markdown).
    pub content: String,
    /// Optional follow-up action.
    pub action: Option<ActionTag>,
}

impl CatalogEntry {
    /// Build an entry without a follow-up action.
    #[must_use]
    pub fn new(question: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            content: content.into(),
            action: None,
        }
    }

    /// Attach a follow-up action.
    #[must_use]
    pub const fn with_action(mut self, action: ActionTag) -> Self {
        self.action = Some(action);
        self
    }
}

/// Immutable mapping from question to entry.
#[derive(Clone, Debug, Default)]
pub struct ResponseCatalog {
    entries: HashMap<String, CatalogEntry>,
}

impl ResponseCatalog {
    /// Build a catalog from explicit entries.
    ///
    /// # Errors
    /// Returns [`ChatbotError::DuplicateQuestion`] if two entries share a key.
    pub fn new(entries: impl IntoIterator<Item = CatalogEntry>) -> ChatbotResult<Self> {
        let mut map = HashMap::new();
        for entry in entries {
            if map.contains_key(&entry.question) {
                return Err(ChatbotError::DuplicateQuestion(entry.question));
            }
            map.insert(entry.question.clone(), entry);
        }
        Ok(Self { entries: map })
    }

    /// The site's authored catalog.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = builtin_entries()
            .into_iter()
            .map(|entry| (entry.question.clone(), entry))
            .collect();
        Self { entries }
    }

    /// Exact-match lookup.
    #[must_use]
    pub fn lookup(&self, question: &str) -> Option<&CatalogEntry> {
        self.entries.get(question)
    }

    /// Whether `question` has an entry.
    #[must_use]
    pub fn contains(&self, question: &str) -> bool {
        self.entries.contains_key(question)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the authored questions (unordered).
    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

fn builtin_entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(
            "Tell me about Jalaj's experience",
            "💼 **Professional Experience**

Jalaj has worked at **Tech Mahindra** as an **Associate Developer** for **1 year and 10 months**.

**Key Areas of Work:**

🚀 **FastAPI** - Building high-performance backend APIs

🌐 **ASP.NET MVC** - Developing enterprise web applications

💬 **WhatsApp Chatbots** - Creating automated messaging solutions

🤖 **Generative AI Applications** - Implementing cutting-edge AI solutions

💻 **Frontend Development** - Working on various website interfaces

His experience spans full-stack development with a strong focus on modern technologies and AI integration.",
        ),
        CatalogEntry::new(
            "What are his technical skills?",
            "⚡ **Technical Skills**

**💻 Programming Languages & System Design**
Java • C# • Python • HLD • LLD

**🔧 Backend Frameworks**
ASP.NET • Flask • FastAPI • RESTful API Development

**🎨 Frontend Technologies**
HTML • CSS • JavaScript • React.js • Next.js • Razor Pages

**☁️ Database & Cloud**
MS SQL • MongoDB • PostgreSQL • Docker • GitHub • Microsoft Azure • VPS Hosting • AWS

**🤖 AI & ML**
LangChain • LangGraph • LangSmith • RAG • Generative AI • Agentic AI • Machine Learning • MCP",
        ),
        CatalogEntry::new(
            "Can I see his resume?",
            "📄 **Resume**

Yes, of course! Click the button below to view Jalaj's complete resume with all his experience, skills, and achievements.",
        )
        .with_action(ActionTag::ViewResume),
        CatalogEntry::new(
            "Is he available for work?",
            "✅ **Available for Work**

Yes! Jalaj is actively available for new opportunities and would love to hear from you.

Click the button below to get in touch and discuss potential collaborations.",
        )
        .with_action(ActionTag::Contact),
        CatalogEntry::new(
            "What are Jalaj's achievements?",
            "🏆 **Key Achievements**

**📚 Published Research in IEEE Journal**
Published machine learning stress detection research in the prestigious IEEE journal (IIT Mandi).

[View Publication →](https://ieeexplore.ieee.org/abstract/document/10725040/keywords)

**⭐ Outstanding Performance Recognition**
Received **3 consecutive quarterly \"Pat on the Back\" awards** at Tech Mahindra, recognizing exceptional performance and dedication to excellence.

These achievements demonstrate his commitment to innovation, research, and delivering high-quality work consistently.",
        ),
        CatalogEntry::new(
            "What projects has Jalaj built?",
            "🚀 **Projects Portfolio**

Jalaj has built several impressive projects spanning full-stack development, AI/ML, and enterprise applications.

Click the button below to explore detailed case studies, technologies used, and live demos of his work!",
        )
        .with_action(ActionTag::Projects),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_unique_questions() {
        let catalog = ResponseCatalog::builtin();
        assert_eq!(catalog.len(), builtin_entries().len());
        assert!(ResponseCatalog::new(builtin_entries()).is_ok());
    }

    #[test]
    fn test_lookup_is_exact() {
        let catalog = ResponseCatalog::builtin();
        assert!(catalog.lookup("Can I see his resume?").is_some());
        assert!(catalog.lookup("can i see his resume?").is_none());
        assert!(catalog.lookup(" Can I see his resume?").is_none());
        assert!(catalog.lookup("Can I see his resume").is_none());
    }

    #[test]
    fn test_builtin_actions() {
        let catalog = ResponseCatalog::builtin();
        let action = |q: &str| catalog.lookup(q).and_then(|e| e.action);
        assert_eq!(action("Can I see his resume?"), Some(ActionTag::ViewResume));
        assert_eq!(action("Is he available for work?"), Some(ActionTag::Contact));
        assert_eq!(action("What projects has Jalaj built?"), Some(ActionTag::Projects));
        assert_eq!(action("What are his technical skills?"), None);
    }

    #[test]
    fn test_duplicate_question_rejected() {
        let err = ResponseCatalog::new([
            CatalogEntry::new("Hello?", "first"),
            CatalogEntry::new("Hello?", "second"),
        ])
        .unwrap_err();
        assert_eq!(err, ChatbotError::DuplicateQuestion("Hello?".to_string()));
    }
}
