/*!
 * XML writer implementation for vcfilters
 */

use std::fs::File;
use std::io::{BufWriter, Write};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::config::Config;
use crate::error::Result;
use crate::types::ProjectItems;

/// Namespace every MSBuild project document declares on its root
const MSBUILD_NAMESPACE: &str = "http://schemas.microsoft.com/developer/msbuild/2003";

/// XML writer for .filters documents
pub struct FiltersWriter {
    /// Writer configuration
    config: Config,
}

impl FiltersWriter {
    /// Create a new filters writer
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Write the collected items to the output .filters file
    pub fn write(&self, items: &ProjectItems) -> Result<()> {
        let file = File::create(&self.config.output_file).map_err(|e| {
            crate::error!(
                Writer,
                "could not create '{}': {}",
                self.config.output_file.display(),
                e
            )
        })?;
        let writer = BufWriter::new(file);
        let mut xml_writer = Writer::new_with_indent(writer, b' ', 2);

        // Write XML declaration
        xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        // Start Project element with the fixed MSBuild attributes
        let mut start_tag = BytesStart::new("Project");
        start_tag.push_attribute(("ToolsVersion", "4.0"));
        start_tag.push_attribute(("xmlns", MSBUILD_NAMESPACE));
        xml_writer.write_event(Event::Start(start_tag))?;

        // First group: the filter declarations, sorted
        self.write_filters(items, &mut xml_writer)?;

        // Second group: the file entries with their filter assignments
        self.write_entries(items, &mut xml_writer)?;

        // End Project element
        xml_writer.write_event(Event::End(BytesEnd::new("Project")))?;

        Ok(())
    }

    /// Write one self-closing Filter element per distinct filter name
    fn write_filters<W: Write>(&self, items: &ProjectItems, writer: &mut Writer<W>) -> Result<()> {
        writer.write_event(Event::Start(BytesStart::new("ItemGroup")))?;

        for filter in items.filters() {
            let mut filter_tag = BytesStart::new("Filter");
            filter_tag.push_attribute(("Include", filter));
            writer.write_event(Event::Empty(filter_tag))?;
        }

        writer.write_event(Event::End(BytesEnd::new("ItemGroup")))?;

        Ok(())
    }

    /// Write every file entry, nesting a Filter text child where one applies
    fn write_entries<W: Write>(&self, items: &ProjectItems, writer: &mut Writer<W>) -> Result<()> {
        writer.write_event(Event::Start(BytesStart::new("ItemGroup")))?;

        for (kind, entries) in items.groups() {
            let tag: &'static str = kind.into();
            for entry in entries {
                let mut item_tag = BytesStart::new(tag);
                item_tag.push_attribute(("Include", entry.filename.as_str()));

                if entry.filtername.is_empty() {
                    writer.write_event(Event::Empty(item_tag))?;
                } else {
                    writer.write_event(Event::Start(item_tag))?;
                    writer.write_event(Event::Start(BytesStart::new("Filter")))?;
                    writer.write_event(Event::Text(BytesText::new(&entry.filtername)))?;
                    writer.write_event(Event::End(BytesEnd::new("Filter")))?;
                    writer.write_event(Event::End(BytesEnd::new(tag)))?;
                }
            }
        }

        writer.write_event(Event::End(BytesEnd::new("ItemGroup")))?;

        Ok(())
    }
}
