//! Problem parsing: segmentation and choice separation.

mod choices;
mod segment;

pub use choices::ChoiceSplitter;
pub use segment::{ProblemSpan, Segmenter};
