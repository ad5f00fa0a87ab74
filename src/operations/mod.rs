pub mod creation;
pub mod cut;
pub mod query;
pub mod transform;
