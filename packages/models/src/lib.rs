pub mod credentials;
pub mod field;

pub mod prelude {
    pub use crate::credentials::Credentials;
    pub use crate::field::{Field, UnknownFieldError};
}

pub use credentials::*;
pub use field::*;
