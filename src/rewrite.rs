pub mod classifier;
pub mod processor;
pub mod rules;
pub mod state;

pub use classifier::{LineClassifier, LineType};
pub use processor::{LineRewriter, RewriteStats};
pub use state::{EmitState, ProcessorState};
