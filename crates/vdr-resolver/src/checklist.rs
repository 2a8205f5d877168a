//! Checklist output shape.

use serde::{Deserialize, Serialize};

use vdr_core::DocumentCategory;

/// One resolved document requirement.
///
/// `category` and `required` are carried separately on the wire even
/// though upgrades to `required` force the flag: a base or conditional
/// rule may legitimately list an optional-category document as required
/// for a specific applicant segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseChecklistItem {
    /// Stable document identifier.
    pub document_type: String,
    pub category: DocumentCategory,
    pub required: bool,
}

impl BaseChecklistItem {
    pub fn new(document_type: &str, category: DocumentCategory, required: bool) -> Self {
        Self {
            document_type: document_type.to_string(),
            category,
            required,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape() {
        let item = BaseChecklistItem::new("passport", DocumentCategory::Required, true);
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["documentType"], "passport");
        assert_eq!(value["category"], "required");
        assert_eq!(value["required"], true);
    }
}
