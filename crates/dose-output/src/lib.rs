//! XML output generation.
//!
//! Serializes a format-neutral [`Element`] tree, the shape produced by
//! `dose_core::document_tree`, as an indented UTF-8 XML document.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use dose_model::{Element, Node};

/// Indentation width of written documents.
const INDENT: usize = 2;

/// Write the XML declaration followed by the tree.
pub fn write_xml<W: Write>(writer: W, root: &Element) -> Result<()> {
    let mut xml = Writer::new_with_indent(writer, b' ', INDENT);
    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_element(&mut xml, root)?;
    xml.get_mut().flush().context("flush xml output")?;
    Ok(())
}

/// Serialize a tree into a string.
pub fn to_xml_string(root: &Element) -> Result<String> {
    let mut buffer = Vec::new();
    write_xml(&mut buffer, root)?;
    String::from_utf8(buffer).context("xml output is not valid UTF-8")
}

/// Write a tree to a file, creating parent directories as needed.
pub fn write_xml_file(output_path: &Path, root: &Element) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let file =
        File::create(output_path).with_context(|| format!("create {}", output_path.display()))?;
    write_xml(BufWriter::new(file), root)
        .with_context(|| format!("write {}", output_path.display()))
}

fn write_element<W: Write>(xml: &mut Writer<W>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (name, value) in &element.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }
    if element.children.is_empty() {
        xml.write_event(Event::Empty(start))?;
        return Ok(());
    }
    xml.write_event(Event::Start(start))?;
    for child in &element.children {
        match child {
            Node::Element(child) => write_element(xml, child)?,
            Node::Text(text) => xml.write_event(Event::Text(BytesText::new(text)))?,
        }
    }
    xml.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    Ok(())
}
