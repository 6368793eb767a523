use super::Bundle;

pub const OUTPUT_HEADER: &str =
    "Merged project snapshot: directory tree followed by the contents of each selected file.";

pub fn format(bundle: &Bundle<'_>) -> String {
    let mut out = format!("{}\n\n{}\n\n{}\n\n", OUTPUT_HEADER, bundle.tree, "=".repeat(80));

    for file in bundle.files {
        out.push_str(&format!("// START OF FILE: {}\n\n", file.path));
        out.push_str(&file.content);
        out.push_str(&format!("\n\n// END OF FILE: {}\n\n", file.path));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::AssembledFile;
    use chrono::Utc;

    #[test]
    fn test_text_layout() {
        let files = vec![
            AssembledFile {
                path: "p/a.rs".to_string(),
                size: 2,
                content: "A".to_string(),
            },
            AssembledFile {
                path: "p/b.rs".to_string(),
                size: 2,
                content: "B".to_string(),
            },
        ];
        let bundle = Bundle {
            project_name: "p",
            tree: "p\n├── a.rs\n└── b.rs\n",
            files: &files,
            exported_at: Utc::now(),
        };
        let out = format(&bundle);

        assert!(out.starts_with(OUTPUT_HEADER));
        assert!(out.contains(&"=".repeat(80)));
        assert!(out.contains("// START OF FILE: p/a.rs\n\nA\n\n// END OF FILE: p/a.rs\n\n"));
        let a = out.find("START OF FILE: p/a.rs").unwrap();
        let b = out.find("START OF FILE: p/b.rs").unwrap();
        assert!(a < b);
    }
}
