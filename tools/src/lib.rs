//! Inspection and debugging tools for mcwire frames.
//!
//! This crate turns a captured frame (header plus segments) into a
//! human- or machine-readable report: which magic it carries, its fixed
//! header fields, and how the body splits into extras, key, and value.

use std::fmt::Write as _;
use std::io::Cursor;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use message::{HEADER_SIZE, REQUEST_MAGIC};
use wire::{decode_header, read_segments, Limits};

/// Frame direction, derived from the magic byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameKind {
    Request,
    Response,
}

/// A decoded view of one captured frame.
#[derive(Debug, Serialize)]
pub struct FrameReport {
    pub kind: FrameKind,
    pub opcode: u8,
    /// Status for responses, vbucket id for requests.
    pub status: u16,
    pub opaque: u32,
    pub cas: u64,
    pub extras_len: usize,
    pub key_len: usize,
    pub body_len: usize,
    /// Key bytes rendered lossily as UTF-8, when a key is present.
    pub key: Option<String>,
    /// Bytes left over after the frame's declared end.
    pub trailing_bytes: usize,
}

/// Inspects a single captured frame.
pub fn inspect_frame(bytes: &[u8], limits: &Limits) -> Result<FrameReport> {
    if bytes.len() < HEADER_SIZE {
        bail!(
            "capture too short: {} bytes, a header needs {HEADER_SIZE}",
            bytes.len()
        );
    }

    let mut header = [0u8; HEADER_SIZE];
    header.copy_from_slice(&bytes[..HEADER_SIZE]);
    let kind = if header[0] == REQUEST_MAGIC {
        FrameKind::Request
    } else {
        FrameKind::Response
    };

    let mut record = decode_header(&header, limits).context("decode header")?;
    let mut stream = Cursor::new(&bytes[HEADER_SIZE..]);
    read_segments(&mut stream, &mut record).context("read segments")?;
    let consumed = usize::try_from(stream.position()).context("segment length")?;
    let trailing_bytes = bytes.len() - HEADER_SIZE - consumed;

    Ok(FrameReport {
        kind,
        opcode: record.opcode.raw(),
        status: record.status.raw(),
        opaque: record.opaque,
        cas: record.cas,
        extras_len: record.extras.len(),
        key_len: record.key.len(),
        body_len: record.body.len(),
        key: if record.key.is_empty() {
            None
        } else {
            Some(String::from_utf8_lossy(&record.key).into_owned())
        },
        trailing_bytes,
    })
}

/// Renders a report as indented human-readable text.
#[must_use]
pub fn format_report_pretty(report: &FrameReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:?} frame", report.kind);
    let _ = writeln!(out, "  opcode:  0x{:02x}", report.opcode);
    match report.kind {
        FrameKind::Response => {
            let _ = writeln!(
                out,
                "  status:  {}",
                message::Status::from_raw(report.status)
            );
        }
        FrameKind::Request => {
            let _ = writeln!(out, "  vbucket: {}", report.status);
        }
    }
    let _ = writeln!(out, "  opaque:  0x{:08x}", report.opaque);
    let _ = writeln!(out, "  cas:     0x{:016x}", report.cas);
    let _ = writeln!(
        out,
        "  body:    {} extras + {} key + {} value bytes",
        report.extras_len, report.key_len, report.body_len
    );
    if let Some(key) = &report.key {
        let _ = writeln!(out, "  key:     {key:?}");
    }
    if report.trailing_bytes > 0 {
        let _ = writeln!(out, "  trailing: {} bytes past frame end", report.trailing_bytes);
    }
    out
}
