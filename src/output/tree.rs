//! Box-drawing rendering of display trees.

use crate::render::TreeNode;

/// Render `root` and its descendants, one node per line.
pub fn render_tree(root: &TreeNode) -> String {
    let mut output = String::new();
    output.push_str(&root.label);
    output.push('\n');
    render_children(&root.children, "", &mut output);
    output
}

fn render_children(children: &[TreeNode], prefix: &str, output: &mut String) {
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let (branch, continuation) = if last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };

        output.push_str(prefix);
        output.push_str(branch);
        output.push_str(&child.label);
        output.push('\n');

        render_children(&child.children, &format!("{}{}", prefix, continuation), output);
    }
}
