use super::{LineType, ProcessorState, TransformRule};

/// Caption line written ahead of every rewritten dataframe table.
pub const OUTPUT_CAPTION: &str = " - 出力";
pub const PLAIN_TABLE: &str = "<table>";

/// Rule for replacing the dataframe `<table>` tag with a caption and a bare tag.
///
/// Also ends any suppression started by a preceding `<div>`.
pub struct DataframeTableRule;

impl TransformRule for DataframeTableRule {
    fn matches(&self, line_type: &LineType) -> bool {
        *line_type == LineType::DataframeTable
    }

    fn transform(&self, _line: &str, state: &mut ProcessorState) -> Vec<String> {
        state.resume();
        vec![OUTPUT_CAPTION.to_string(), PLAIN_TABLE.to_string()]
    }
}
