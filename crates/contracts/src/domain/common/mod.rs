pub mod source;
pub mod varieties;

pub use source::DataSource;
pub use varieties::{Variety, VarietyCounts};
