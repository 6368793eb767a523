//! ASCII directory tree rendering.
//!
//! Paths are inserted into an index-addressed arena; children keep the
//! order in which they were first seen, so the output follows the order of
//! the input list rather than any re-sorting.

use std::collections::HashMap;

const BRANCH: &str = "├── ";
const LAST: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

struct TreeNode {
    name: String,
    children: Vec<usize>,
}

struct Tree {
    nodes: Vec<TreeNode>,
    index: HashMap<(usize, String), usize>,
}

impl Tree {
    const ROOT: usize = 0;

    fn new() -> Self {
        Tree {
            nodes: vec![TreeNode {
                name: String::new(),
                children: Vec::new(),
            }],
            index: HashMap::new(),
        }
    }

    fn child(&mut self, parent: usize, name: &str) -> usize {
        if let Some(&id) = self.index.get(&(parent, name.to_string())) {
            return id;
        }

        let id = self.nodes.len();
        self.nodes.push(TreeNode {
            name: name.to_string(),
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        self.index.insert((parent, name.to_string()), id);
        id
    }

    fn insert(&mut self, path: &str) {
        let mut current = Self::ROOT;
        for part in path.split('/').filter(|p| !p.is_empty()) {
            current = self.child(current, part);
        }
    }

    fn draw(&self, node: usize, prefix: &str, out: &mut String) {
        let children = &self.nodes[node].children;
        for (i, &child) in children.iter().enumerate() {
            let is_last = i == children.len() - 1;
            let connector = if is_last { LAST } else { BRANCH };

            out.push_str(prefix);
            out.push_str(connector);
            out.push_str(&self.nodes[child].name);
            out.push('\n');

            if !self.nodes[child].children.is_empty() {
                let new_prefix = format!("{}{}", prefix, if is_last { SPACE } else { PIPE });
                self.draw(child, &new_prefix, out);
            }
        }
    }
}

/// Renders `paths` as a tree. A single top-level entry becomes a header line
/// (the project name) instead of a tree row.
pub fn render<S: AsRef<str>>(paths: &[S]) -> String {
    if paths.is_empty() {
        return String::new();
    }

    let mut tree = Tree::new();
    for path in paths {
        tree.insert(path.as_ref());
    }

    let mut out = String::new();
    let top = &tree.nodes[Tree::ROOT].children;
    if top.len() == 1 {
        let only = top[0];
        out.push_str(&tree.nodes[only].name);
        out.push('\n');
        tree.draw(only, "", &mut out);
    } else {
        tree.draw(Tree::ROOT, "", &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_root_header() {
        let out = render(&["a/b.txt", "a/c.txt"]);
        assert_eq!(out, "a\n├── b.txt\n└── c.txt\n");
    }

    #[test]
    fn test_nested_prefixes() {
        let out = render(&[
            "proj/src/lib.rs",
            "proj/src/util/mod.rs",
            "proj/README.md",
        ]);
        let expected = "proj\n\
                        ├── src\n\
                        │   ├── lib.rs\n\
                        │   └── util\n\
                        │       └── mod.rs\n\
                        └── README.md\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_keeps_insertion_order() {
        let out = render(&["p/z.rs", "p/a.rs", "p/m.rs"]);
        assert_eq!(out, "p\n├── z.rs\n├── a.rs\n└── m.rs\n");
    }

    #[test]
    fn test_multiple_roots_are_tree_rows() {
        let out = render(&["one/a.txt", "two.txt"]);
        assert_eq!(out, "├── one\n│   └── a.txt\n└── two.txt\n");
    }

    #[test]
    fn test_empty_input() {
        let empty: [&str; 0] = [];
        assert_eq!(render(&empty), "");
    }

    #[test]
    fn test_duplicate_segments_share_nodes() {
        let out = render(&["p/src/a.rs", "p/src/a.rs", "p/src/b.rs"]);
        assert_eq!(out, "p\n└── src\n    ├── a.rs\n    └── b.rs\n");
    }

    proptest! {
        #[test]
        fn test_render_is_repeatable(paths in proptest::collection::vec("[a-c]{1,2}(/[a-c]{1,2}){0,3}", 0..12)) {
            prop_assert_eq!(render(&paths), render(&paths));
        }

        #[test]
        fn test_every_leaf_is_printed(paths in proptest::collection::vec("r/[a-d]{1,3}/[a-d]{1,3}\\.txt", 1..10)) {
            let out = render(&paths);
            for path in &paths {
                let leaf = path.rsplit('/').next().unwrap();
                prop_assert!(out.contains(leaf));
            }
        }
    }
}
