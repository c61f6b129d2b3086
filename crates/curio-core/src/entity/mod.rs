mod collection;
mod collector;


pub use collection::Collection;
pub use collector::{Collector, CollectorError};
