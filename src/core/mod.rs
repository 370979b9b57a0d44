pub mod classifier;
pub mod duplicates;

pub use crate::utils::error::Result;
pub use classifier::{label, labels, render, write_report, Label};
pub use duplicates::{find_duplicates, render_duplicates};
