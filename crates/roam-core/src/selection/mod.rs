mod category;
mod synchronizer;

pub use category::{default_categories, Category};
pub use synchronizer::{CategorySelection, ReselectPolicy, SelectOutcome, SelectionSynchronizer};
