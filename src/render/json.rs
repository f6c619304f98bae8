//! JSON rendering of layout plans.

use crate::error::{Error, Result};
use crate::model::AssembledDocument;
use serde::{Deserialize, Serialize};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a layout plan to JSON.
pub fn to_json(doc: &AssembledDocument, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::SimpleDocument;
    use crate::model::{RegionKind, TextElement};
    use crate::{PrintCollection, PrintRule};

    fn plan() -> AssembledDocument {
        let doc = SimpleDocument::new()
            .with_file_name("invoice.pdf")
            .with_region(RegionKind::Header, TextElement::new("Invoice", 50.0), PrintRule::AllPages)
            .with_item(TextElement::new("Line 1", 20.0));
        PrintCollection::from_document(doc).assemble().unwrap()
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&plan(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"file_name\": \"invoice.pdf\""));
        assert!(json.contains("\"element\": \"Invoice\""));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&plan(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n')); // Compact has no newlines

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["pages"][0]["is_last"], true);
        assert_eq!(value["pages"][0]["body"]["rows"][0]["element"], "Line 1");
    }
}
