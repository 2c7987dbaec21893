//! The assistant context: dataset + knowledge base + both matching layers, built once
//! at startup and shared read-only.

use crate::dataset::Dataset;
use crate::error::LoadError;
use crate::knowledge::{FaqLayer, KnowledgeBase};
use crate::responder::Responder;
use crate::shared::CoreConfig;

/// Reply to an empty chat message; neither layer is consulted.
pub const CHAT_PROMPT: &str = "I’m a Bennett University assistant. Please type a question about admissions, fees, hostel, placements, courses or campus life.";

#[derive(Debug)]
pub struct Assistant {
    dataset: Dataset,
    knowledge: KnowledgeBase,
    responder: Responder,
    faq: FaqLayer,
}

impl Assistant {
    pub fn new(dataset: Dataset, knowledge: KnowledgeBase) -> Result<Self, LoadError> {
        Ok(Self {
            dataset,
            knowledge,
            responder: Responder::new()?,
            faq: FaqLayer::new(),
        })
    }

    /// Full startup load: knowledge base (optional), then the dataset (required).
    pub async fn load(config: &CoreConfig) -> Result<Self, LoadError> {
        let knowledge = KnowledgeBase::load(&config.knowledge_path()).await;
        let dataset = Dataset::load(&config.data_paths()).await?;
        Self::new(dataset, knowledge)
    }

    /// FAQ answers take priority; an absent or empty FAQ answer falls through to the responder.
    pub fn reply(&self, message: &str) -> String {
        match self.faq.answer(&self.knowledge, message).filter(|a| !a.is_empty()) {
            Some(answer) => answer.to_string(),
            None => self.responder.respond(&self.dataset, message),
        }
    }

    /// University name for banners; "the University" when none was loaded.
    pub fn university_name(&self) -> &str {
        self.dataset
            .university()
            .map_or("the University", |u| u.name.as_str())
    }

    /// Console greeting: a dashed rule, the welcome line, and another rule.
    pub fn welcome_banner(&self) -> String {
        let rule = "-".repeat(100);
        format!(
            "{rule}\nWelcome to the {} Chatbot! Type your questions, or 'quit' to exit.\n{rule}",
            self.university_name()
        )
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures::sample_dataset;
    use crate::responder::FALLBACK_REPLY;

    async fn assistant(knowledge: KnowledgeBase) -> Assistant {
        Assistant::new(sample_dataset().await, knowledge).unwrap()
    }

    #[tokio::test]
    async fn faq_answer_bypasses_responder() {
        let kb: KnowledgeBase = [("hostel_fees", "Hostel fee is Rs 1.5L per year.")].into_iter().collect();
        let a = assistant(kb).await;
        assert_eq!(a.reply("How much is the hostel fee?"), "Hostel fee is Rs 1.5L per year.");
    }

    #[tokio::test]
    async fn missing_topic_falls_through_to_responder() {
        let kb: KnowledgeBase = [("website", "https://www.bennett.edu.in")].into_iter().collect();
        let a = assistant(kb).await;
        assert_eq!(a.reply("hostel fee"), FALLBACK_REPLY);
        assert_eq!(a.reply("what is the student id of asha singh"), "Student: Asha Singh\nStudent ID: S01");
    }

    #[tokio::test]
    async fn empty_faq_answer_falls_through() {
        let kb: KnowledgeBase = [("transport", "")].into_iter().collect();
        let a = assistant(kb).await;
        assert_eq!(a.reply("show students in bus department"), "No students found in department 'bus'.");
    }

    #[tokio::test]
    async fn unmatched_text_gets_fallback() {
        let a = assistant(KnowledgeBase::default()).await;
        assert_eq!(a.reply("sing me a song"), FALLBACK_REPLY);
        assert_eq!(a.university_name(), "Bennett University");
    }

    #[tokio::test]
    async fn load_uses_configured_paths() {
        let dir = tempfile::tempdir().unwrap();
        let paths = crate::dataset::fixtures::write_sources(dir.path());
        let config = CoreConfig {
            app_name: "Test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            student_file: paths.students.display().to_string(),
            course_file: paths.courses.display().to_string(),
            university_file: paths.university.display().to_string(),
            knowledge_file: dir.path().join("absent.json").display().to_string(),
        };
        let a = Assistant::load(&config).await.unwrap();
        assert_eq!(a.dataset().student_count(), 4);
        assert!(a.knowledge().is_empty());
    }

    #[tokio::test]
    async fn welcome_banner_wraps_greeting_in_rules() {
        let a = assistant(KnowledgeBase::default()).await;
        let banner = a.welcome_banner();
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "-".repeat(100));
        assert_eq!(
            lines[1],
            "Welcome to the Bennett University Chatbot! Type your questions, or 'quit' to exit."
        );
        assert_eq!(lines[2], lines[0]);
    }

    #[test]
    fn welcome_banner_falls_back_without_university() {
        let a = Assistant::new(Dataset::default(), KnowledgeBase::default()).unwrap();
        assert!(a.welcome_banner().contains("Welcome to the the University Chatbot!"));
    }
}
