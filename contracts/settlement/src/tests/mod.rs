pub mod sut;

mod initialize;
