use super::{LineType, ProcessorState, TransformRule};

pub const PLAIN_ROW: &str = "    <tr>";

/// Rule for stripping the right-align style from header `<tr>` tags.
pub struct RowAlignRule;

impl TransformRule for RowAlignRule {
    fn matches(&self, line_type: &LineType) -> bool {
        *line_type == LineType::RightAlignedRow
    }

    fn transform(&self, _line: &str, _state: &mut ProcessorState) -> Vec<String> {
        vec![PLAIN_ROW.to_string()]
    }
}
