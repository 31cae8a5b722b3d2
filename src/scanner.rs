/*!
 * Project file scanning functionality
 *
 * Walks the project XML once and collects every file reference from the
 * recognized item groups, together with the filter names derived from
 * their paths.
 */

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::str::{self, FromStr};

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::bail;
use crate::config::Config;
use crate::error::Result;
use crate::types::{ItemKind, ProjectItems};

/// Scanner for project file contents
pub struct Scanner {
    /// Scanner configuration
    config: Config,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Read the project file and collect its file entries and filters
    pub fn scan(&self) -> Result<ProjectItems> {
        let file = File::open(&self.config.project_file).map_err(|e| {
            crate::error!(
                Project,
                "could not open '{}': {}",
                self.config.project_file.display(),
                e
            )
        })?;
        let mut reader = Reader::from_reader(BufReader::new(file));
        self.scan_document(&mut reader)
    }

    fn scan_document<R: BufRead>(&self, reader: &mut Reader<R>) -> Result<ProjectItems> {
        let mut items = ProjectItems::default();
        let mut in_project = false;
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    if !in_project && e.name().as_ref() == b"Project" {
                        in_project = true;
                    } else if in_project && e.name().as_ref() == b"ItemGroup" {
                        // Item groups carrying a Label attribute hold project
                        // configurations, not file listings.
                        if attribute_value(&e, b"Label").is_some() {
                            skip_element(reader, &e)?;
                        } else {
                            self.scan_item_group(reader, &mut items)?;
                        }
                    } else {
                        skip_element(reader, &e)?;
                    }
                }
                Event::End(e) if in_project && e.name().as_ref() == b"Project" => break,
                Event::Eof => {
                    if in_project {
                        bail!(Project, "unexpected end of document inside <Project>");
                    }
                    bail!(
                        Project,
                        "no <Project> element found in '{}'",
                        self.config.project_file.display()
                    );
                }
                _ => {}
            }
            buf.clear();
        }

        Ok(items)
    }

    /// Collect the direct children of one unlabeled `ItemGroup`
    fn scan_item_group<R: BufRead>(
        &self,
        reader: &mut Reader<R>,
        items: &mut ProjectItems,
    ) -> Result<()> {
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    self.record_item(&e, items);
                    // Child elements (compile settings etc.) are irrelevant,
                    // and nothing below a direct child counts as an entry.
                    skip_element(reader, &e)?;
                }
                Event::Empty(e) => self.record_item(&e, items),
                Event::End(_) => break,
                Event::Eof => bail!(Project, "unexpected end of document inside <ItemGroup>"),
                _ => {}
            }
            buf.clear();
        }

        Ok(())
    }

    fn record_item(&self, element: &BytesStart, items: &mut ProjectItems) {
        let Some(kind) = item_kind(element) else {
            return;
        };
        // Items without an include path are not file references.
        match attribute_value(element, b"Include") {
            Some(include) if !include.is_empty() => items.insert(kind, &include),
            _ => {}
        }
    }
}

/// Map an element to its item kind, if the tag is one we recognize
fn item_kind(element: &BytesStart) -> Option<ItemKind> {
    str::from_utf8(element.name().as_ref())
        .ok()
        .and_then(|tag| ItemKind::from_str(tag).ok())
}

/// Look up an attribute by name, tolerating malformed neighbors
fn attribute_value(element: &BytesStart, name: &[u8]) -> Option<String> {
    for attr in element.attributes().with_checks(false).flatten() {
        if attr.key.as_ref() == name {
            let value = attr
                .unescape_value()
                .unwrap_or_else(|_| String::from_utf8_lossy(&attr.value));
            return Some(value.into_owned());
        }
    }
    None
}

/// Consume everything up to and including the element's closing tag
fn skip_element<R: BufRead>(reader: &mut Reader<R>, start: &BytesStart) -> Result<()> {
    let mut skipped = Vec::new();
    reader.read_to_end_into(start.name(), &mut skipped)?;
    Ok(())
}
