//! Structure parsers: chapter segmentation, appendix titles, objectives,
//! graduation requirements, and direction classification.

mod appendix;
mod direction;
mod objectives;
mod requirements;
mod section;

pub use appendix::AppendixTitleResolver;
pub use direction::{DirectionRules, DirectionTagger, DIRECTION_COLUMN};
pub use objectives::ObjectivesParser;
pub use requirements::RequirementsParser;
pub use section::SectionSplitter;
