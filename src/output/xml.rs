use super::{AssembledFile, Bundle};
use crate::error::Result;
use chrono::SecondsFormat;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;

pub fn format(bundle: &Bundle<'_>) -> Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let codebase = BytesStart::new("codebase");
    writer.write_event(Event::Start(codebase.borrow()))?;

    write_element(&mut writer, "project", bundle.project_name)?;
    write_element(
        &mut writer,
        "exported_at",
        &bundle
            .exported_at
            .to_rfc3339_opts(SecondsFormat::Millis, true),
    )?;

    writer.write_event(Event::Start(BytesStart::new("tree")))?;
    write_cdata(&mut writer, bundle.tree)?;
    writer.write_event(Event::End(BytesEnd::new("tree")))?;

    write_element(&mut writer, "total_files", &bundle.files.len().to_string())?;

    let files = BytesStart::new("files");
    writer.write_event(Event::Start(files.borrow()))?;

    for file in bundle.files {
        write_file_element(&mut writer, file)?;
    }

    writer.write_event(Event::End(BytesEnd::new("files")))?;
    writer.write_event(Event::End(BytesEnd::new("codebase")))?;

    let result = writer.into_inner().into_inner();
    Ok(String::from_utf8(result)?)
}

fn write_file_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    file: &AssembledFile,
) -> Result<()> {
    let mut elem = BytesStart::new("file");
    elem.push_attribute(("path", file.path.as_str()));
    elem.push_attribute(("size", file.size.to_string().as_str()));
    writer.write_event(Event::Start(elem.borrow()))?;

    writer.write_event(Event::Start(BytesStart::new("content")))?;
    write_cdata(writer, &file.content)?;
    writer.write_event(Event::End(BytesEnd::new("content")))?;

    writer.write_event(Event::End(BytesEnd::new("file")))?;
    Ok(())
}

/// `]]>` cannot appear inside one CDATA section, so it is split across two.
fn write_cdata<W: std::io::Write>(writer: &mut Writer<W>, text: &str) -> Result<()> {
    let mut rest = text;
    while let Some(pos) = rest.find("]]>") {
        writer.write_event(Event::CData(BytesCData::new(&rest[..pos + 2])))?;
        rest = &rest[pos + 2..];
    }
    writer.write_event(Event::CData(BytesCData::new(rest)))?;
    Ok(())
}

fn write_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    content: &str,
) -> Result<()> {
    let elem = BytesStart::new(name);
    writer.write_event(Event::Start(elem.borrow()))?;
    writer.write_event(Event::Text(BytesText::new(content)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn bundle_with(content: &str) -> String {
        let files = vec![AssembledFile {
            path: "p/a.html".to_string(),
            size: content.len() as u64,
            content: content.to_string(),
        }];
        let bundle = Bundle {
            project_name: "p & q",
            tree: "p\n└── a.html\n",
            files: &files,
            exported_at: Utc::now(),
        };
        format(&bundle).unwrap()
    }

    #[test]
    fn test_xml_structure() {
        let out = bundle_with("<b>hi</b>");
        assert!(out.starts_with("<?xml"));
        assert!(out.contains("<codebase>"));
        assert!(out.contains("<project>p &amp; q</project>"));
        assert!(out.contains("<total_files>1</total_files>"));
        assert!(out.contains(r#"<file path="p/a.html" size="9">"#));
        assert!(out.contains("<![CDATA[<b>hi</b>]]>"));
    }

    #[test]
    fn test_cdata_terminator_is_split() {
        let out = bundle_with("a]]>b");
        assert!(out.contains("<![CDATA[a]]]]><![CDATA[>b]]>"));
    }
}
