use super::{LineType, ProcessorState, TransformRule};

/// Rule for `<div>` lines: starts suppressing text and drops the line.
pub struct DivOpenRule;

impl TransformRule for DivOpenRule {
    fn matches(&self, line_type: &LineType) -> bool {
        *line_type == LineType::DivOpen
    }

    fn transform(&self, _line: &str, state: &mut ProcessorState) -> Vec<String> {
        state.suppress();
        vec![]
    }
}
