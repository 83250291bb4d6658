pub mod initialize;
pub mod initiate;
pub mod utils;
