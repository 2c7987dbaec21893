//! campus-core: the campus assistant's dataset tables, department mapping,
//! pattern responder and FAQ layer.
//!
//! Everything is built once at startup into an [`Assistant`] and shared read-only
//! by the gateway and the console add-ons.

mod assistant;
mod dataset;
mod department;
mod error;
mod knowledge;
mod responder;
mod shared;

pub use assistant::{Assistant, CHAT_PROMPT};
pub use dataset::{department_prefix, Course, DataPaths, Dataset, Student, UniversityInfo};
pub use department::map_department_name;
pub use error::LoadError;
pub use knowledge::{FaqLayer, FaqRule, KnowledgeBase, Refinement, FAQ_RULES};
pub use responder::{Matcher, Route, Responder, FALLBACK_REPLY, FAREWELL_REPLY, EMPTY_QUESTION_REPLY};
pub use shared::CoreConfig;
