pub mod criteria;
pub mod resource;

pub use criteria::{CategoryFilter, ResourceCriteria};
pub use resource::{Resource, ResourceCategory};
