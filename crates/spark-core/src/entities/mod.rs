//! Spark document entities.

mod document;
mod enhanced;
mod frontmatter;
mod phase;

pub use document::{
    DEFAULT_SPARK_TYPE, NEW_SPARK_NAME, SparkBody, SparkDocument, UNTITLED_NAME,
    field_key_by_name,
};
pub use enhanced::EnhancedBody;
pub use frontmatter::Frontmatter;
pub use phase::{EMPTY_STATUS, LegacyBody, Phase};
