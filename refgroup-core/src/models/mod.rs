pub mod grouping;
pub mod priority;
pub mod reference_filter;

pub use grouping::{Grouping, ResolvedGroup};
pub use priority::{Priority, ResolutionPass};
pub use reference_filter::ReferenceFilter;
