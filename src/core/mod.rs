pub mod advice;
pub mod context;
pub mod proxy;
pub mod wiring;

pub use crate::domain::model::{BuyMethod, Invocation, JoinPoint};
pub use crate::domain::ports::{Advice, Buy};
pub use crate::utils::error::Result;
