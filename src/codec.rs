//! Workers document codec
//!
//! Encoding and decoding of the persisted XML document.
//!
//! ## Document Format
//! ```text
//! <?xml version="1.0" encoding="utf-8"?>
//! <workers>
//!   <worker>
//!     <name>Ivanov I.I.</name>
//!     <post>Engineer</post>
//!     <year>2015</year>
//!   </worker>
//!   ...
//! </workers>
//! ```
//!
//! The children of `worker` may appear in any order. Unknown children are
//! skipped; a missing `name`, `post` or `year` rejects the whole document.

use quick_xml::se::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StaffError};
use crate::worker::Worker;

/// Declaration written at the top of every saved document
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// Indentation width used when saving
const INDENT: usize = 2;

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Serialize)]
#[serde(rename = "workers")]
struct WorkersDocument<'a> {
    #[serde(rename = "worker")]
    workers: Vec<WorkerElement<'a>>,
}

#[derive(Serialize)]
struct WorkerElement<'a> {
    name: &'a str,
    post: &'a str,
    year: i32,
}

#[derive(Deserialize)]
struct RawDocument {
    #[serde(rename = "worker", default)]
    workers: Vec<RawWorker>,
}

/// Fields collected from a single `worker` element
#[derive(Deserialize)]
struct RawWorker {
    name: Option<String>,
    post: Option<String>,
    year: Option<String>,
}

impl RawWorker {
    /// Commit the accumulated fields; `index` is 1-based for messages
    fn into_worker(self, index: usize) -> Result<Worker> {
        let name = self.name.ok_or_else(|| missing_field(index, "name"))?;
        let post = self.post.ok_or_else(|| missing_field(index, "post"))?;
        let year = self.year.ok_or_else(|| missing_field(index, "year"))?;

        let year = year.trim().parse::<i32>().map_err(|_| {
            StaffError::Deserialization(format!(
                "worker #{}: year `{}` is not an integer",
                index, year
            ))
        })?;

        Ok(Worker::new(name, post, year))
    }
}

fn missing_field(index: usize, field: &str) -> StaffError {
    StaffError::Deserialization(format!("worker #{} is missing `{}`", index, field))
}

// =============================================================================
// Encoding/Decoding
// =============================================================================

/// Encode workers to a complete XML document, declaration included
pub fn encode_workers(workers: &[Worker]) -> Result<String> {
    let document = WorkersDocument {
        workers: workers
            .iter()
            .map(|w| WorkerElement {
                name: w.name(),
                post: w.post(),
                year: w.year(),
            })
            .collect(),
    };

    let mut xml = String::with_capacity(64 + workers.len() * 96);
    xml.push_str(XML_DECLARATION);
    xml.push('\n');

    let mut serializer = Serializer::new(&mut xml);
    serializer.indent(' ', INDENT);
    document
        .serialize(serializer)
        .map_err(|e| StaffError::Serialization(e.to_string()))?;

    xml.push('\n');
    Ok(xml)
}

/// Decode workers from an XML document
///
/// Returns workers in document order. Every `worker` element is parsed into
/// its own accumulator, so fields never leak from one record to the next.
pub fn decode_workers(xml: &str) -> Result<Vec<Worker>> {
    let document: RawDocument = quick_xml::de::from_str(xml)
        .map_err(|e| StaffError::Deserialization(e.to_string()))?;

    document
        .workers
        .into_iter()
        .enumerate()
        .map(|(i, raw)| raw.into_worker(i + 1))
        .collect()
}
