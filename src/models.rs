mod reading;
mod rule;
mod suggestion;

pub use reading::{MeterReading, ReadingSummary};
pub use rule::{RuleDef, TagRule};
pub use suggestion::{Explanation, Suggestion};
