pub mod dataframe_table;
pub mod div_close;
pub mod div_open;
pub mod row_align;

use super::{classifier::LineType, state::ProcessorState};

pub use dataframe_table::DataframeTableRule;
pub use div_close::DivCloseRule;
pub use div_open::DivOpenRule;
pub use row_align::RowAlignRule;

/// Trait for transform rules.
pub trait TransformRule: Send + Sync {
    /// Check if this rule should be applied.
    fn matches(&self, line_type: &LineType) -> bool;

    /// Transform the line into zero or more output lines.
    fn transform(&self, line: &str, state: &mut ProcessorState) -> Vec<String>;
}

/// Create default set of transform rules, in match order.
pub fn default_rules() -> Vec<Box<dyn TransformRule>> {
    vec![
        Box::new(DivOpenRule),
        Box::new(DivCloseRule),
        Box::new(DataframeTableRule),
        Box::new(RowAlignRule),
    ]
}
