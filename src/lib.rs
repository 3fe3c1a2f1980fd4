pub mod cohort;
pub mod error;
pub mod formula;
pub mod inputs;
pub mod mention;
pub mod output;
pub mod report;

pub use error::GradeError;
pub use formula::{CalculationResult, evaluate};
pub use inputs::GradeInputs;
pub use mention::{Mention, classify};
pub use report::GradeReport;
