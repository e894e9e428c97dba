pub mod filename;
pub mod fs;
pub mod page_id;
pub mod token;

pub use crate::domain::model::{FoundToken, TokenSource};
pub use crate::domain::ports::EnvSource;
pub use crate::utils::error::Result;
