//! Pretty-printing of manifest paths as a tree.
//!
//! Builds a trie over `/`-separated components; BTreeMap keeps the
//! child order deterministic regardless of archive order.

use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct PathNode {
    children: BTreeMap<String, PathNode>,
}

/// Render the manifest paths in tree style.
pub fn render_tree(paths: &[String]) -> String {
    let mut root = PathNode::default();
    for path in paths {
        let mut current = &mut root;
        for part in path.split('/') {
            current = current.children.entry(part.to_string()).or_default();
        }
    }

    let mut out = String::from("File Structure:\n");
    for (name, node) in &root.children {
        render_node(name, node, "", &mut out);
    }
    out
}

/// Print the manifest paths in tree style to stdout.
pub fn print_tree(paths: &[String]) {
    print!("{}", render_tree(paths));
}

fn render_node(name: &str, node: &PathNode, prefix: &str, out: &mut String) {
    out.push_str(prefix);
    out.push_str(name);
    out.push('\n');
    let child_prefix = format!("{prefix}│---");
    for (child_name, child) in &node.children {
        render_node(child_name, child, &child_prefix, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_nested_paths() {
        let paths = vec![
            "top".to_string(),
            "top/sub".to_string(),
            "top/sub/file.txt".to_string(),
            "top/zed.bin".to_string(),
        ];
        let rendered = render_tree(&paths);
        assert_eq!(
            rendered,
            "File Structure:\n\
             top\n\
             │---sub\n\
             │---│---file.txt\n\
             │---zed.bin\n"
        );
    }

    #[test]
    fn test_children_are_sorted() {
        let paths = vec!["r".to_string(), "r/b".to_string(), "r/a".to_string()];
        let rendered = render_tree(&paths);
        let a_pos = rendered.find("│---a").unwrap();
        let b_pos = rendered.find("│---b").unwrap();
        assert!(a_pos < b_pos);
    }

    #[test]
    fn test_single_entry() {
        let rendered = render_tree(&["only".to_string()]);
        assert_eq!(rendered, "File Structure:\nonly\n");
    }
}
