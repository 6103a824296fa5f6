//! JSON output formatter

use crate::render::RenderNode;

/// Format a render tree as JSON
pub fn format_json(tree: &[RenderNode]) -> String {
    serde_json::to_string_pretty(tree).unwrap_or_else(|e| {
        format!("{{\"error\": \"Failed to serialize view: {}\"}}", e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::NO_ACTIVE_FILE;

    #[test]
    fn test_format_json_status() {
        let tree = vec![RenderNode::Status {
            text: NO_ACTIVE_FILE.to_string(),
        }];
        let output = format_json(&tree);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["type"], "status");
        assert_eq!(parsed[0]["text"], "No active file");
    }

    #[test]
    fn test_format_json_list() {
        let tree = vec![RenderNode::List {
            items: crate::render::heading_items("- ### Deep [[Note|n]]", true),
        }];
        let output = format_json(&tree);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let item = &parsed[0]["items"][0];
        assert_eq!(item["inlines"][0]["text"], "###");
        assert_eq!(item["inlines"][2]["text"], "n");
        assert_eq!(item["action"]["line"], 0);
    }
}
