use crate::domain::{Coordinate, CoordinateParseError, Place, PlaceDraft};
use quick_xml::Reader;
use quick_xml::events::Event;
use thiserror::Error;
use tracing::warn;

/// Parses a places document into the valid [`Place`] records it contains, in
/// document order. Places failing validation are skipped with a warning;
/// malformed coordinate text and XML syntax errors abort the whole parse.
pub fn parse_places(xml: &str) -> Result<Vec<Place>, ParseError> {
    let mut reader = Reader::from_str(xml);
    let mut parser = PlaceParser::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(tag)) => parser.open_tag(tag.name().as_ref()),
            Ok(Event::Empty(tag)) => {
                parser.open_tag(tag.name().as_ref());
                parser.close_tag(tag.name().as_ref())?;
            }
            Ok(Event::Text(text)) => {
                let text = text.unescape().map_err(|source| ParseError::Xml {
                    source,
                    position: reader.buffer_position(),
                })?;
                parser.text(&text);
            }
            Ok(Event::CData(text)) => parser.text(&String::from_utf8_lossy(&text)),
            Ok(Event::End(tag)) => parser.close_tag(tag.name().as_ref())?,
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(source) => {
                return Err(ParseError::Xml {
                    source,
                    position: reader.buffer_position(),
                });
            }
        }
    }

    Ok(parser.finish())
}

/// The parsing state machine: a draft is open between `<Place>` and
/// `</Place>`, and the buffer collects character data since the last open
/// tag. Field assignment is keyed on the closing tag name.
#[derive(Default)]
struct PlaceParser {
    places: Vec<Place>,
    draft: Option<PlaceDraft>,
    buffer: String,
}

impl PlaceParser {
    fn open_tag(&mut self, name: &[u8]) {
        self.buffer.clear();
        if name == b"Place" {
            self.draft = Some(PlaceDraft::default());
        }
    }

    fn text(&mut self, text: &str) {
        // Character data can arrive in several chunks, e.g. around comments
        self.buffer.push_str(text);
    }

    fn close_tag(&mut self, name: &[u8]) -> Result<(), ParseError> {
        if name == b"Place" {
            if let Some(draft) = self.draft.take() {
                match draft.build() {
                    Ok(place) => self.places.push(place),
                    Err(draft) => warn!("⚠️ Skipping invalid place: {:?}", draft),
                }
            }
            return Ok(());
        }

        let text = self.buffer.trim();
        if text.is_empty() {
            return Ok(());
        }

        match name {
            b"City" => {
                if let Some(draft) = self.draft.as_mut() {
                    draft.city = Some(text.to_owned());
                }
            }
            b"Address" => {
                if let Some(draft) = self.draft.as_mut() {
                    draft.address = Some(text.to_owned());
                }
            }
            b"Coordinates" => {
                let coordinate = Coordinate::parse(text)?;
                if let Some(draft) = self.draft.as_mut() {
                    draft.coordinates = Some(coordinate);
                }
            }
            _ => {}
        }

        Ok(())
    }

    fn finish(self) -> Vec<Place> {
        self.places
    }
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("xml error at position {position}: {source}")]
    Xml { source: quick_xml::Error, position: usize },
    #[error("malformed coordinates: {0}")]
    Coordinates(#[from] CoordinateParseError),
}
