use std::mem;

use quick_xml::{
    events::{BytesStart, Event},
    Reader
};
use tracing::trace;

use crate::error::{FetchError, Result};

// element depths inside a dblp person document.
const ROOT_DEPTH: usize = 1;
const RECORD_DEPTH: usize = 2;
const DESCRIPTOR_DEPTH: usize = 3;
const FIELD_DEPTH: usize = 4;

const RECORD_TAG: &[u8] = b"r";

pub struct DblpParser;

impl DblpParser {
    /// Parses a dblp person document (`/pid/<id>.xml`).
    ///
    /// Returns one entry per `<r>` child of the root, in document order. The
    /// entry is the first child element of that `<r>`, whatever its tag, or
    /// `None` when the record has no child element at all.
    pub fn parse(xml: &[u8]) -> Result<Vec<Option<Descriptor>>> {
        let mut reader = Reader::from_reader(xml);
        let mut buf = Vec::new();
        let mut state = ParseState::default();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => state.open(&e)?,
                Event::Empty(e) => {
                    state.open(&e)?;
                    state.close();
                }
                Event::End(_) => state.close(),
                Event::Text(e) => state.text(&e.unescape()?)?,
                Event::CData(e) => state.text(&String::from_utf8_lossy(&e))?,
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        let records = state.finish()?;
        trace!(records = records.len(), "parsed dblp person document");
        Ok(records)
    }
}

// dblp raw XML model

/// Bibliographic fields of one descriptor element, untrimmed, as found in the document.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Descriptor {
    pub tag: String,
    pub key: Option<String>,
    pub title: Option<String>,
    pub year: Option<String>,
    pub journal: Option<String>,
    pub booktitle: Option<String>,
}

impl Descriptor {
    fn from_start(start: &BytesStart) -> Result<Self> {
        let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let key = match start.try_get_attribute("key").map_err(quick_xml::Error::from)? {
            Some(attr) => Some(attr.unescape_value()?.into_owned()),
            None => None
        };
        Ok(Descriptor {
            tag,
            key,
            ..Default::default()
        })
    }

    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Title => &mut self.title,
            Field::Year => &mut self.year,
            Field::Journal => &mut self.journal,
            Field::Booktitle => &mut self.booktitle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Field {
    Title,
    Year,
    Journal,
    Booktitle,
}

impl Field {
    fn from_name(name: &[u8]) -> Option<Self> {
        match name {
            b"title" => Some(Field::Title),
            b"year" => Some(Field::Year),
            b"journal" => Some(Field::Journal),
            b"booktitle" => Some(Field::Booktitle),
            _ => None
        }
    }
}

// end dblp raw XML model

#[derive(Debug, Default)]
struct ParseState {
    depth: usize,
    seen_root: bool,
    in_record: bool,
    descriptor_open: bool,
    descriptor: Option<Descriptor>,
    field: Option<Field>,
    // set once the open field has a child element; later text is not part of it.
    field_text_done: bool,
    text: String,
    records: Vec<Option<Descriptor>>,
}

impl ParseState {
    fn open(&mut self, start: &BytesStart) -> Result<()> {
        self.depth += 1;
        match self.depth {
            ROOT_DEPTH => {
                if self.seen_root {
                    return Err(FetchError::parse("junk after document element"));
                }
                self.seen_root = true;
            }
            RECORD_DEPTH => {
                if start.name().as_ref() == RECORD_TAG {
                    self.in_record = true;
                    self.descriptor = None;
                }
            }
            DESCRIPTOR_DEPTH => {
                // only the first child of a record counts.
                if self.in_record && self.descriptor.is_none() {
                    self.descriptor = Some(Descriptor::from_start(start)?);
                    self.descriptor_open = true;
                }
            }
            FIELD_DEPTH => {
                if self.descriptor_open {
                    self.begin_field(start);
                }
            }
            _ => {
                if self.field.is_some() {
                    self.field_text_done = true;
                }
            }
        }
        Ok(())
    }

    fn begin_field(&mut self, start: &BytesStart) {
        let Some(field) = Field::from_name(start.name().as_ref()) else {
            return;
        };
        let unset = self.descriptor.as_mut()
            .map(|descriptor| descriptor.slot(field).is_none())
            .unwrap_or(false);
        if unset {
            self.field = Some(field);
            self.field_text_done = false;
            self.text.clear();
        }
    }

    fn close(&mut self) {
        match self.depth {
            FIELD_DEPTH => {
                if let (Some(field), Some(descriptor)) = (self.field.take(), self.descriptor.as_mut()) {
                    *descriptor.slot(field) = Some(mem::take(&mut self.text));
                }
            }
            DESCRIPTOR_DEPTH => self.descriptor_open = false,
            RECORD_DEPTH => {
                if self.in_record {
                    self.records.push(self.descriptor.take());
                    self.in_record = false;
                }
            }
            _ => {}
        }
        self.depth = self.depth.saturating_sub(1);
    }

    fn text(&mut self, text: &str) -> Result<()> {
        if self.depth == 0 && !text.trim().is_empty() {
            return Err(FetchError::parse("text outside of the document element"));
        }
        // a field's text stops at its first inline element (<i>, <sub>, ...).
        if self.field.is_some() && !self.field_text_done {
            self.text.push_str(text);
        }
        Ok(())
    }

    fn finish(self) -> Result<Vec<Option<Descriptor>>> {
        if !self.seen_root {
            return Err(FetchError::parse("no element found"));
        }
        if self.depth != 0 {
            return Err(FetchError::parse("unexpected end of document: unclosed element"));
        }
        Ok(self.records)
    }
}
