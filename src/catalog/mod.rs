//! Question catalog
//!
//! Loads category files, normalizes them into a flat question index, and
//! provides the filtering and display ordering the site is built on.

pub mod bundled;
pub mod filter;
pub mod index;
pub mod normalize;
pub mod order;
pub mod schema;
pub mod slug;
pub mod source;
pub mod validation;

pub use filter::{LevelFilter, QuestionFilter, filter_questions};
pub use index::{IndexBuilder, QuestionIndex, load_index, parse_category};
pub use normalize::normalize_category;
pub use order::{CategoryOrder, UNLISTED_PRIORITY, sorted_entries};
pub use schema::{CategoryData, LoadedCategory, QUESTION_TYPE, Question, SkillLevel};
pub use slug::slugify;
pub use source::{BundledSource, CategorySource, DirSource, HttpSource};
pub use validation::{ValidationResult, Validator};
