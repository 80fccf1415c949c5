//! Splicing rendered blocks into existing host files
//!
//! A host file is updated in one of two ways. If it contains a start and an end
//! marker (in that order) the lines between them are replaced. Otherwise the
//! object value of a known key is located structurally and replaced. Both
//! produce byte-identical output when re-applied to their own result.

use log::debug;

use crate::error::LocateError;
use crate::render::{indent_multiline_value, RenderedBlock};
use crate::scanner::find_object_for_key;

pub const START_MARKER: &str = "{{/* PERMISSIONS:START */}}";
pub const END_MARKER: &str = "{{/* PERMISSIONS:END */}}";

/// Splice `block` into `contents`, by markers when present, else under `key`.
pub fn splice_block(
    contents: &str,
    key: &str,
    block: &RenderedBlock,
) -> Result<String, LocateError> {
    match (contents.find(START_MARKER), contents.find(END_MARKER)) {
        (Some(start), Some(end)) if start < end => {
            debug!("Replacing marker block at {}..{}", start, end);
            replace_between_markers(contents, start, end, &block.inner_lines)
        }
        (Some(start), Some(end)) => {
            debug!("Markers out of order, falling back to {:?} object", key);
            replace_object_for_key(contents, key, &block.json).map_err(|err| match err {
                LocateError::KeyNotFound { .. } => LocateError::MarkersOutOfOrder { start, end },
                other => other,
            })
        }
        _ => {
            debug!("No markers found, replacing {:?} object", key);
            replace_object_for_key(contents, key, &block.json)
        }
    }
}

/// Replace everything between the two markers with `lines`, each indented like
/// the start marker. The markers themselves are kept.
pub fn replace_between_markers(
    contents: &str,
    start: usize,
    end: usize,
    lines: &[String],
) -> Result<String, LocateError> {
    let indent = marker_indent(contents, start)?;

    let mut out = String::with_capacity(contents.len());
    out.push_str(&contents[..start]);
    out.push_str(START_MARKER);
    out.push('\n');
    for line in lines {
        out.push_str(indent);
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(indent);
    out.push_str(END_MARKER);
    out.push_str(&contents[end + END_MARKER.len()..]);
    Ok(out)
}

/// Whitespace before the marker on its line. Any other content on that line is an error.
pub fn marker_indent(contents: &str, marker_pos: usize) -> Result<&str, LocateError> {
    let line_start = line_start(contents, marker_pos);
    let marker_end = (marker_pos + START_MARKER.len()).min(contents.len());
    let line_end = contents[marker_end..]
        .find('\n')
        .map_or(contents.len(), |offset| marker_end + offset);

    let indent = &contents[line_start..marker_pos];
    let trailing = &contents[marker_end..line_end];
    if !indent.trim().is_empty() || !trailing.trim().is_empty() {
        return Err(LocateError::MarkerNotAlone {
            line: contents[line_start..line_end].to_string(),
        });
    }
    Ok(indent)
}

/// Replace the `{...}` value of `key` with `json`, re-indented to the key's line.
pub fn replace_object_for_key(
    contents: &str,
    key: &str,
    json: &str,
) -> Result<String, LocateError> {
    let span = find_object_for_key(contents, key)?;
    let indent = &contents[line_start(contents, span.key_pos)..span.key_pos];
    let replacement = indent_multiline_value(json, indent);

    Ok(format!(
        "{}{}{}",
        &contents[..span.value_start],
        replacement,
        &contents[span.value_end + 1..]
    ))
}

fn line_start(contents: &str, pos: usize) -> usize {
    contents[..pos].rfind('\n').map_or(0, |newline| newline + 1)
}
