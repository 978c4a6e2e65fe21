pub mod driver;
pub mod greeter;

pub use crate::domain::model::GreetingRequest;
pub use crate::domain::ports::{Clock, FixedClock, SystemClock};
pub use crate::utils::error::Result;
