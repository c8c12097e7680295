//! Resume data types.
//!
//! [`RawResume`] is what arrives from the outside world; [`CanonicalResume`]
//! is what the renderers consume. The normalizer is the only bridge
//! between the two.

mod analysis;
mod canonical;
mod raw;

pub use analysis::{CategoryScore, KeywordMatch, ResumeAnalysis, GENERAL_CATEGORY};
pub use canonical::{CanonicalResume, ExperienceEntry, PLACEHOLDER_NAME};
pub use raw::{EntryRecord, ListField, ListItem, RawResume, TextField};
