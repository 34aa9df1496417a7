pub mod authentication;
pub mod notification;
pub mod validation;

pub use authentication::*;
pub use notification::*;
pub use validation::*;
