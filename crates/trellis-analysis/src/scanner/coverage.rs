//! Coverage extraction from JaCoCo-format XML reports (JaCoCo and Kover).

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Errors reading a coverage report. Never fatal to a scan: the coverage
/// fact is left absent and the testing rule reports it.
#[derive(Debug, thiserror::Error)]
pub enum CoverageError {
    #[error("malformed coverage report: {0}")]
    Malformed(String),

    #[error("no report-level {0} counter")]
    MissingCounter(String),

    #[error("invalid {attribute} attribute on {counter} counter")]
    InvalidCounter { counter: String, attribute: String },

    #[error("{0} counter covers no items")]
    EmptyCounter(String),
}

/// Percentage (0-100) of the report-level counter named `counter`.
///
/// Only `<counter>` elements that are direct children of the root `<report>`
/// count; package, class and method counters are nested deeper.
pub fn parse_jacoco(xml: &str, counter: &str) -> Result<f64, CoverageError> {
    let mut reader = Reader::from_str(xml);
    let mut depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => depth = depth.saturating_sub(1),
            Ok(Event::Empty(e)) if depth == 1 && e.name().as_ref() == b"counter" => {
                if let Some(percent) = counter_percent(&e, counter)? {
                    return Ok(percent);
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(CoverageError::Malformed(e.to_string())),
        }
    }

    Err(CoverageError::MissingCounter(counter.to_string()))
}

/// `Some(percent)` when `element` is the wanted counter type.
fn counter_percent(element: &BytesStart<'_>, counter: &str) -> Result<Option<f64>, CoverageError> {
    let mut kind = None;
    let mut missed = None;
    let mut covered = None;

    for attr in element.attributes() {
        let attr = attr.map_err(|e| CoverageError::Malformed(e.to_string()))?;
        let value = std::str::from_utf8(&attr.value)
            .map_err(|e| CoverageError::Malformed(e.to_string()))?
            .to_string();
        match attr.key.as_ref() {
            b"type" => kind = Some(value),
            b"missed" => missed = Some(value),
            b"covered" => covered = Some(value),
            _ => {}
        }
    }

    if kind.as_deref() != Some(counter) {
        return Ok(None);
    }

    let parse = |value: Option<String>, attribute: &str| -> Result<u64, CoverageError> {
        value
            .and_then(|v| v.trim().parse::<u64>().ok())
            .ok_or_else(|| CoverageError::InvalidCounter {
                counter: counter.to_string(),
                attribute: attribute.to_string(),
            })
    };
    let missed = parse(missed, "missed")?;
    let covered = parse(covered, "covered")?;

    let total = missed + covered;
    if total == 0 {
        return Err(CoverageError::EmptyCounter(counter.to_string()));
    }
    Ok(Some(covered as f64 * 100.0 / total as f64))
}
