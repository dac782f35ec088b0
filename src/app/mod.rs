pub mod buyers;
pub mod driver;

pub use driver::{DemoDriver, DemoInputs};
