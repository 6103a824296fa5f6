//! Insta snapshot tests for mdextract
//!
//! These tests render small notes and snapshot the formatted output so that
//! any regressions in the views are immediately visible as snapshot diffs.

use mdextract::formatters::{format_json, format_text};
use mdextract::render::{NO_ACTIVE_FILE, heading_items, link_items};
use mdextract::{RenderNode, ScanMode, build_link_index};

const NOTE: &str = "\
# Weekly review

- ## Wins [[Launch|the launch]]
- ordinary bullet
  + ### Follow up with [[Alice]] and [[Bob|B.]]
* ####### not a heading
1. ## ordered item
- #hashtag only

See [[Roadmap]] and [notes](Notes/Meeting.md).
";

/// Helper: the tree a host would receive for `NOTE` in `mode`.
fn view(mode: ScanMode) -> Vec<RenderNode> {
    let items = match mode {
        ScanMode::Links => link_items(&build_link_index(NOTE)),
        ScanMode::Headings => heading_items(NOTE, true),
    };
    vec![
        RenderNode::Title {
            text: mode.title().to_string(),
        },
        RenderNode::List { items },
    ]
}

#[test]
fn snapshot_headings_view() {
    let output = format_text(&view(ScanMode::Headings), "🧷");
    insta::assert_snapshot!(output, @r"
    List-style Headings:
    1. ## Wins [[Launch|the launch]]
    2. ### Follow up with [[Alice]] and [[Bob|B.]]
    ");
}

#[test]
fn snapshot_links_view() {
    let output = format_text(&view(ScanMode::Links), "🧷");
    insta::assert_snapshot!(output, @r"
    Links in this page:
    1. [[Launch|the launch]] 🧷 line 3
    2. [[Alice]] 🧷 line 5
    3. [[Bob|B.]] 🧷 line 5
    4. [[Roadmap]] 🧷 line 10
    5. [[Notes/Meeting.md|notes]] 🧷 line 10
    ");
}

#[test]
fn snapshot_no_active_file() {
    let tree = vec![RenderNode::Status {
        text: NO_ACTIVE_FILE.to_string(),
    }];
    insta::assert_snapshot!(format_text(&tree, "🧷"), @"No active file");
}

#[test]
fn snapshot_heading_json() {
    let tree = vec![
        RenderNode::Title {
            text: ScanMode::Headings.title().to_string(),
        },
        RenderNode::List {
            items: heading_items("- # A [[B]]", true),
        },
    ];
    insta::assert_snapshot!(format_json(&tree), @r##"
    [
      {
        "type": "title",
        "text": "List-style Headings:"
      },
      {
        "type": "list",
        "items": [
          {
            "inlines": [
              {
                "type": "marker",
                "text": "#"
              },
              {
                "type": "text",
                "text": "A "
              },
              {
                "type": "link",
                "target": "B",
                "text": "B"
              }
            ],
            "action": {
              "action": "jump_to_line",
              "line": 0
            }
          }
        ]
      }
    ]
    "##);
}
