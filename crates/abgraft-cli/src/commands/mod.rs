pub mod enumerate;
pub mod plan;
