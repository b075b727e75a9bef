pub mod etl;
pub mod loader;
pub mod matcher;
pub mod pipeline;
pub mod writer;

pub use crate::domain::model::{CodeRules, MatchOutcome, SourceCodes};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
