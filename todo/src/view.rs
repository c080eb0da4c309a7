//! Declarative view tree and its text rendering.
//!
//! Components return [`Node`]s; a front-end draws them and turns user input
//! back into [`UiEvent`]s.

use crate::todos::TodoId;
use crate::visibility::VisibilityFilter;

const STRIKE_ON: &str = "\x1b[9m";
const STRIKE_OFF: &str = "\x1b[0m";

/// Something the user did
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// The input field now holds this text
    InputChanged(String),
    /// The add form was submitted
    Submit,
    /// A todo row was clicked
    RowClicked(TodoId),
    /// A filter button was clicked
    FilterClicked(VisibilityFilter),
}

/// How a row's text is drawn
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextDecoration {
    /// Plain text
    #[default]
    None,
    /// Struck through
    LineThrough,
}

/// A node in the view tree
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Children stacked vertically
    Column(Vec<Node>),
    /// Children laid out on one line
    Row(Vec<Node>),
    /// Input controls that submit together
    Form {
        /// Event emitted on submit
        on_submit: UiEvent,
        /// Form controls
        children: Vec<Node>,
    },
    /// Text input showing its current value, drawn as `> value`
    Input {
        /// Current contents
        value: String,
    },
    /// Clickable button
    Button {
        /// Caption
        label: String,
        /// Disabled buttons emit nothing
        disabled: bool,
        /// Event emitted on click, `None` when disabled
        on_click: Option<UiEvent>,
    },
    /// Ordered rows
    List(Vec<Node>),
    /// A row keyed by the todo it shows
    ListItem {
        /// Stable row key
        key: TodoId,
        /// Row text
        text: String,
        /// Decoration for the text
        decoration: TextDecoration,
        /// Event emitted on click
        on_click: UiEvent,
    },
    /// Static text
    Label(String),
}

impl Node {
    /// Keys of every list row, in display order
    #[must_use]
    pub fn row_ids(&self) -> Vec<TodoId> {
        let mut ids = Vec::new();
        self.collect_row_ids(&mut ids);
        ids
    }

    fn collect_row_ids(&self, ids: &mut Vec<TodoId>) {
        match self {
            Self::ListItem { key, .. } => ids.push(*key),
            Self::Column(children)
            | Self::Row(children)
            | Self::List(children)
            | Self::Form { children, .. } => {
                for child in children {
                    child.collect_row_ids(ids);
                }
            },
            Self::Input { .. } | Self::Button { .. } | Self::Label(_) => {},
        }
    }
}

/// Options for [`render_text`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Strike completed rows through with ANSI escapes instead of `~~`
    pub ansi: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { ansi: true }
    }
}

/// Draws a view tree as plain text.
///
/// Columns and lists put each child on its own line; rows and forms keep
/// children on one line. List rows are numbered from 1 so that a row can be
/// addressed by number. Disabled buttons are drawn in brackets. Control
/// characters in user text are escaped so they cannot drive the terminal.
#[must_use]
pub fn render_text(node: &Node, options: &RenderOptions) -> String {
    let mut out = String::new();
    write_node(&mut out, node, options);
    out
}

fn write_node(out: &mut String, node: &Node, options: &RenderOptions) {
    match node {
        Node::Column(children) => {
            let lines: Vec<String> = children
                .iter()
                .map(|child| render_text(child, options))
                .filter(|text| !text.is_empty())
                .collect();
            out.push_str(&lines.join("\n"));
        },
        Node::Row(children) | Node::Form { children, .. } => {
            let parts: Vec<String> = children.iter().map(|child| render_text(child, options)).collect();
            out.push_str(&parts.join(" "));
        },
        Node::Input { value } => {
            out.push('>');
            if !value.is_empty() {
                out.push(' ');
                push_escaped(out, value);
            }
        },
        Node::Button { label, disabled, .. } => {
            if *disabled {
                out.push('[');
                push_escaped(out, label);
                out.push(']');
            } else {
                push_escaped(out, label);
            }
        },
        Node::List(children) => {
            let mut number = 0_usize;
            let lines: Vec<String> = children
                .iter()
                .map(|child| {
                    if matches!(child, Node::ListItem { .. }) {
                        number += 1;
                        format!("{number}. {}", render_text(child, options))
                    } else {
                        render_text(child, options)
                    }
                })
                .collect();
            out.push_str(&lines.join("\n"));
        },
        Node::ListItem { text, decoration, .. } => match decoration {
            TextDecoration::None => push_escaped(out, text),
            TextDecoration::LineThrough if options.ansi => {
                out.push_str(STRIKE_ON);
                push_escaped(out, text);
                out.push_str(STRIKE_OFF);
            },
            TextDecoration::LineThrough => {
                out.push_str("~~");
                push_escaped(out, text);
                out.push_str("~~");
            },
        },
        Node::Label(text) => push_escaped(out, text),
    }
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        if c.is_control() {
            out.extend(c.escape_debug());
        } else {
            out.push(c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn id(n: u128) -> TodoId {
        TodoId::from_uuid(Uuid::from_u128(n))
    }

    fn row(n: u128, text: &str, decoration: TextDecoration) -> Node {
        Node::ListItem {
            key: id(n),
            text: text.to_string(),
            decoration,
            on_click: UiEvent::RowClicked(id(n)),
        }
    }

    fn plain() -> RenderOptions {
        RenderOptions { ansi: false }
    }

    #[test]
    fn list_rows_are_numbered_from_one() {
        let list = Node::List(vec![
            row(1, "Buy milk", TextDecoration::None),
            row(2, "Walk dog", TextDecoration::LineThrough),
        ]);
        assert_eq!(render_text(&list, &plain()), "1. Buy milk\n2. ~~Walk dog~~");
    }

    #[test]
    fn ansi_strikethrough() {
        let node = row(1, "Done", TextDecoration::LineThrough);
        assert_eq!(
            render_text(&node, &RenderOptions { ansi: true }),
            "\x1b[9mDone\x1b[0m"
        );
    }

    #[test]
    fn control_characters_in_text_are_escaped() {
        let list = Node::List(vec![
            row(1, "\x1b[2Jgone", TextDecoration::None),
            row(2, "two\nlines", TextDecoration::LineThrough),
        ]);
        let text = render_text(&list, &RenderOptions { ansi: true });

        assert_eq!(
            text,
            "1. \\u{1b}[2Jgone\n2. \x1b[9mtwo\\nlines\x1b[0m"
        );
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn disabled_buttons_are_bracketed() {
        let footer = Node::Row(vec![
            Node::Label("Show:".to_string()),
            Node::Button {
                label: "All".to_string(),
                disabled: true,
                on_click: None,
            },
            Node::Button {
                label: "Active".to_string(),
                disabled: false,
                on_click: Some(UiEvent::FilterClicked(VisibilityFilter::ShowActive)),
            },
        ]);
        assert_eq!(render_text(&footer, &plain()), "Show: [All] Active");
    }

    #[test]
    fn empty_list_leaves_no_blank_line() {
        let root = Node::Column(vec![
            Node::Label("top".to_string()),
            Node::List(Vec::new()),
            Node::Label("bottom".to_string()),
        ]);
        assert_eq!(render_text(&root, &plain()), "top\nbottom");
    }

    #[test]
    fn row_ids_follow_display_order() {
        let root = Node::Column(vec![
            Node::Form {
                on_submit: UiEvent::Submit,
                children: vec![Node::Input {
                    value: String::new(),
                }],
            },
            Node::List(vec![
                row(3, "c", TextDecoration::None),
                row(1, "a", TextDecoration::None),
            ]),
        ]);
        assert_eq!(root.row_ids(), vec![id(3), id(1)]);
    }
}
