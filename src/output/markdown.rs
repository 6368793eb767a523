use super::{language_for, Bundle};

pub fn format(bundle: &Bundle<'_>) -> String {
    let mut parts: Vec<String> = vec![
        format!("# Project: {}\n", bundle.project_name),
        "## Directory Tree\n".to_string(),
        "```".to_string(),
        bundle.tree.to_string(),
        "```\n".to_string(),
        "---\n".to_string(),
    ];

    for file in bundle.files {
        parts.push(format!("## File: {}\n", file.path));
        parts.push(format!("```{}", language_for(&file.path)));
        parts.push(file.content.clone());
        parts.push("```\n".to_string());
    }

    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::AssembledFile;
    use chrono::Utc;

    #[test]
    fn test_markdown_fences() {
        let files = vec![
            AssembledFile {
                path: "p/main.py".to_string(),
                size: 5,
                content: "print()".to_string(),
            },
            AssembledFile {
                path: "p/NOTES".to_string(),
                size: 2,
                content: "hi".to_string(),
            },
        ];
        let bundle = Bundle {
            project_name: "p",
            tree: "p\n├── main.py\n└── NOTES\n",
            files: &files,
            exported_at: Utc::now(),
        };
        let out = format(&bundle);

        assert!(out.starts_with("# Project: p\n"));
        assert!(out.contains("## Directory Tree\n\n```\np\n├── main.py"));
        assert!(out.contains("## File: p/main.py\n\n```python\nprint()\n```\n"));
        assert!(out.contains("## File: p/NOTES\n\n```\nhi\n```\n"));
    }
}
