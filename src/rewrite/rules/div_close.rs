use super::{LineType, ProcessorState, TransformRule};

/// Rule for removing `</div>` lines. Leaves the emit state alone.
pub struct DivCloseRule;

impl TransformRule for DivCloseRule {
    fn matches(&self, line_type: &LineType) -> bool {
        *line_type == LineType::DivClose
    }

    fn transform(&self, _line: &str, _state: &mut ProcessorState) -> Vec<String> {
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_line_without_touching_state() {
        let rule = DivCloseRule;

        let mut state = ProcessorState::new();
        assert!(rule.transform("</div>\n", &mut state).is_empty());
        assert!(state.is_emitting());

        state.suppress();
        assert!(rule.matches(&LineType::DivClose));
        assert!(rule.transform("</div>\n", &mut state).is_empty());
        assert!(!state.is_emitting());
    }
}
