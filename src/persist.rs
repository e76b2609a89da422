//! Snapshot persistence.
//!
//! Whole-snapshot JSON serialization to a file, optionally pretty-printed.
//! The blocking [`save`] and the awaitable [`save_async`] share the same
//! encoding; the classifier core never suspends, so the async flavor takes a
//! snapshot that was already produced by a completed mutation.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use verdict::analysis::WhitespaceTokenizer;
//! use verdict::classifier::Classifier;
//! use verdict::dataset::Example;
//! use verdict::persist;
//!
//! # fn main() -> verdict::error::Result<()> {
//! let dataset = vec![Example::new("good", true), Example::new("bad", false)];
//! let classifier = Classifier::from_dataset(&dataset, Arc::new(WhitespaceTokenizer::new()))?;
//!
//! persist::save(&classifier.snapshot(), "bayes.json", true)?;
//!
//! let restored = Classifier::from_snapshot(
//!     persist::load("bayes.json")?,
//!     Arc::new(WhitespaceTokenizer::new()),
//! )?;
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::Path;

use crate::classifier::ClassifierSnapshot;
use crate::error::Result;

/// Serialize a snapshot to JSON, compact or pretty-printed.
fn encode(snapshot: &ClassifierSnapshot, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(snapshot)?
    } else {
        serde_json::to_string(snapshot)?
    };
    Ok(json)
}

/// Write a snapshot to a file, blocking until the write completes.
pub fn save<P: AsRef<Path>>(snapshot: &ClassifierSnapshot, path: P, pretty: bool) -> Result<()> {
    let json = encode(snapshot, pretty)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write a snapshot to a file without blocking the caller.
///
/// Completion is signalled through the returned future; awaiting it reports
/// the same errors the blocking variant would.
pub async fn save_async<P: AsRef<Path>>(
    snapshot: &ClassifierSnapshot,
    path: P,
    pretty: bool,
) -> Result<()> {
    let json = encode(snapshot, pretty)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

/// Read a snapshot back from a file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<ClassifierSnapshot> {
    let content = fs::read_to_string(path)?;
    let snapshot: ClassifierSnapshot = serde_json::from_str(&content)?;
    Ok(snapshot)
}
