// ABOUTME: Step descriptors and tooltip hints, loadable from TOML step lists

use serde::{Deserialize, Serialize};

/// Presentation hints for the tooltip attached to a step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipSpec {
    /// Place the tooltip above the hole instead of below it.
    #[serde(default, rename = "above")]
    pub is_above_element: bool,
    /// Align the tooltip's right edge with the hole's right edge.
    #[serde(default, rename = "right_justified")]
    pub is_right_justified: bool,
    /// Tooltip text. Newlines start new paragraphs.
    #[serde(default)]
    pub content: String,
}

impl TipSpec {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn above(mut self) -> Self {
        self.is_above_element = true;
        self
    }

    #[must_use]
    pub const fn right_justified(mut self) -> Self {
        self.is_right_justified = true;
        self
    }
}

/// One highlight-and-explain unit of a walkthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDescriptor {
    /// Key of the element to highlight.
    pub target_id: String,
    /// Tooltip, or `None` for a hole without explanation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<TipSpec>,
}

impl StepDescriptor {
    pub fn new(target_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
            tip: None,
        }
    }

    #[must_use]
    pub fn with_tip(mut self, tip: TipSpec) -> Self {
        self.tip = Some(tip);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Steps {
        steps: Vec<StepDescriptor>,
    }

    #[test]
    fn test_tip_flags_default_to_false() {
        let parsed: Steps = toml::from_str(
            r#"
            [[steps]]
            target_id = "search"

            [[steps]]
            target_id = "list"
            [steps.tip]
            content = "Your sessions"
            "#,
        )
        .unwrap();

        assert_eq!(parsed.steps[0], StepDescriptor::new("search"));
        let tip = parsed.steps[1].tip.as_ref().unwrap();
        assert!(!tip.is_above_element);
        assert!(!tip.is_right_justified);
        assert_eq!(tip.content, "Your sessions");
    }

    #[test]
    fn test_builder_sets_flags() {
        let tip = TipSpec::new("hi").above().right_justified();
        assert!(tip.is_above_element && tip.is_right_justified);
    }
}
