pub mod arm;
pub mod execute;
pub mod initialize;
pub mod quote;
pub mod sweep;
pub mod utils;
