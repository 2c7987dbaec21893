//! Keyword taxonomy for canned FAQ answers.

use super::KnowledgeBase;

/// A secondary keyword test that swaps the rule's default topic.
#[derive(Debug)]
pub struct Refinement {
    pub keywords: &'static [&'static str],
    pub topic: &'static str,
}

/// Fires when any `keywords` substring is present and, if `qualifiers` is non-empty,
/// any qualifier is present too. The first matching refinement picks the topic.
#[derive(Debug)]
pub struct FaqRule {
    pub keywords: &'static [&'static str],
    pub qualifiers: &'static [&'static str],
    pub refinements: &'static [Refinement],
    pub topic: &'static str,
}

const BTECH: &[&str] = &["btech", "b.tech", "engineering"];
const FEE: &[&str] = &["fee", "fees", "cost"];
const HOSTEL: &[&str] = &["hostel", "accommodation", "room"];

/// Rules in priority order.
pub const FAQ_RULES: &[FaqRule] = &[
    FaqRule {
        keywords: &["admission", "admissions", "apply", "application", "how to get admission"],
        qualifiers: &[],
        refinements: &[Refinement { keywords: &["last date", "deadline"], topic: "admissions_last_date" }],
        topic: "admissions_process",
    },
    FaqRule {
        keywords: &["eligibility"],
        qualifiers: BTECH,
        refinements: &[],
        topic: "btech_eligibility",
    },
    FaqRule {
        keywords: &["fee", "fees", "tuition", "cost", "college fees"],
        qualifiers: &[],
        refinements: &[Refinement { keywords: HOSTEL, topic: "hostel_fees" }],
        topic: "btech_fees",
    },
    FaqRule {
        keywords: HOSTEL,
        qualifiers: &[],
        refinements: &[Refinement { keywords: FEE, topic: "hostel_fees" }],
        topic: "hostel_info",
    },
    FaqRule {
        keywords: &["scholarship", "scholarships", "financial aid"],
        qualifiers: &[],
        refinements: &[],
        topic: "scholarships",
    },
    FaqRule {
        keywords: &["placement", "placements", "package", "ctc", "job"],
        qualifiers: &[],
        refinements: &[
            Refinement { keywords: &["average"], topic: "average_package" },
            Refinement { keywords: &["highest", "max"], topic: "highest_package" },
        ],
        topic: "placements_overview",
    },
    FaqRule {
        keywords: &["where is", "location", "address", "located"],
        qualifiers: &["bennett", "university", "campus"],
        refinements: &[],
        topic: "campus_location",
    },
    FaqRule {
        keywords: &["how to reach", "transport", "bus", "metro"],
        qualifiers: &[],
        refinements: &[],
        topic: "transport",
    },
    FaqRule {
        keywords: &["club", "clubs", "student life", "campus life"],
        qualifiers: &[],
        refinements: &[],
        topic: "student_life",
    },
    // Shadowed by the admissions rule for any text containing "admission".
    FaqRule {
        keywords: &["contact"],
        qualifiers: &["admission"],
        refinements: &[],
        topic: "contact_admissions",
    },
    FaqRule {
        keywords: &["website", "official site"],
        qualifiers: &[],
        refinements: &[],
        topic: "website",
    },
];

fn any_in(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text.contains(n))
}

impl FaqRule {
    /// Topic this rule selects for the lowercased `text`, if it fires.
    pub fn topic_for(&self, text: &str) -> Option<&'static str> {
        if !any_in(text, self.keywords) {
            return None;
        }
        if !self.qualifiers.is_empty() && !any_in(text, self.qualifiers) {
            return None;
        }
        let topic = self
            .refinements
            .iter()
            .find(|r| any_in(text, r.keywords))
            .map_or(self.topic, |r| r.topic);
        Some(topic)
    }
}

/// Keyword classifier over [`FAQ_RULES`]. Never reads the dataset tables.
#[derive(Debug, Clone, Copy)]
pub struct FaqLayer {
    rules: &'static [FaqRule],
}

impl Default for FaqLayer {
    fn default() -> Self {
        Self { rules: FAQ_RULES }
    }
}

impl FaqLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Topic key of the first firing rule.
    pub fn classify(&self, message: &str) -> Option<&'static str> {
        let text = message.to_lowercase();
        self.rules.iter().find_map(|rule| rule.topic_for(&text))
    }

    /// The canned answer for `message`, or `None` when no rule fires, the knowledge base
    /// is empty, or the selected topic has no entry.
    pub fn answer<'kb>(&self, knowledge: &'kb KnowledgeBase, message: &str) -> Option<&'kb str> {
        if knowledge.is_empty() {
            return None;
        }
        let topic = self.classify(message)?;
        tracing::debug!(target: "campus::faq", topic, "FAQ rule fired");
        knowledge.get(topic)
    }
}
