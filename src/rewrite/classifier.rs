pub const DIV_OPEN: &str = "<div>\n";
pub const DIV_CLOSE: &str = "</div>\n";
pub const DATAFRAME_TABLE: &str = "<table border=\"1\" class=\"dataframe\">\n";
pub const RIGHT_ALIGNED_ROW: &str = "    <tr style=\"text-align: right;\">\n";

/// Represents the type of a line in an exported document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    DivOpen,
    DivClose,
    DataframeTable,
    RightAlignedRow,
    Text,
}

impl LineType {
    /// Whether this line is one of the fixed markup literals.
    pub fn is_markup(&self) -> bool {
        !matches!(self, Self::Text)
    }
}

/// Classifier for document lines.
pub struct LineClassifier;

impl LineClassifier {
    /// Classify a line, including its trailing newline.
    ///
    /// Matching is exact: whitespace and the terminator must be identical.
    pub fn classify(line: &str) -> LineType {
        match line {
            DIV_OPEN => LineType::DivOpen,
            DIV_CLOSE => LineType::DivClose,
            DATAFRAME_TABLE => LineType::DataframeTable,
            RIGHT_ALIGNED_ROW => LineType::RightAlignedRow,
            _ => LineType::Text,
        }
    }
}
