pub mod controller;
pub mod error_state;
pub mod state;

#[cfg(test)]
pub mod test_helpers;

pub use controller::*;
pub use error_state::*;
pub use state::*;
