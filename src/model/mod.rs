//! Data model for training-plan extraction.
//!
//! These types form the contract between the page source, the structuring
//! pipeline, and the export backends. All of them serialize with serde so
//! the JSON snapshot is a direct serialization of [`ExtractResult`].

mod outline;
mod page;
mod result;
mod section;
mod table;

pub use outline::{ObjectiveSet, RequirementItem, RequirementSet, RequirementSubItem};
pub use page::{PageRecord, RawGrid};
pub use result::ExtractResult;
pub use section::{AppendixTitle, AppendixTitleMap, Section, SectionMap, FRONT_MATTER_KEY};
pub use table::{CleanTable, TablePack};
