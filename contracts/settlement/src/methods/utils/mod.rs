pub mod swap_plan;
pub mod validation;
