use crate::domain::model::{CodeRules, SourceCodes};
use crate::utils::error::{EtlError, Result};
use flate2::bufread::MultiGzDecoder;
use std::borrow::Cow;
use std::io::{BufRead, BufReader, Read};

/// Decodes UTF-8, silently dropping any invalid byte sequences.
pub fn decode_permissive(bytes: &[u8]) -> Cow<'_, str> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Cow::Borrowed(text);
    }

    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    Cow::Owned(text)
}

/// Wraps a raw gzip stream so that every member is decoded, line by line.
pub fn open_gzip<R: BufRead>(raw: R) -> BufReader<MultiGzDecoder<R>> {
    BufReader::new(MultiGzDecoder::new(raw))
}

/// Collects the unique codes accepted by `rules` from a decompressed stream.
///
/// `\n`, `\r\n` and a bare `\r` all end a line.
pub fn scan_codes<R: BufRead>(
    name: &str,
    mut reader: R,
    rules: &CodeRules,
    progress_interval: u64,
) -> std::io::Result<SourceCodes> {
    let mut source = SourceCodes {
        name: name.to_string(),
        ..Default::default()
    };
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let text: &str = &decode_permissive(&buf);
        let body = text.strip_suffix('\n').unwrap_or(text);
        let body = body.strip_suffix('\r').unwrap_or(body);

        for line in body.split('\r') {
            source.lines_read += 1;
            if progress_interval > 0 && source.lines_read % progress_interval == 0 {
                tracing::info!(
                    "  {} lines, {} valid codes so far",
                    source.lines_read,
                    source.codes.len()
                );
            }

            if let Some(code) = rules.accept(line) {
                if !source.codes.contains(code) {
                    source.codes.insert(code.to_string());
                }
            }
        }
    }

    Ok(source)
}

/// Decompresses and scans one source, attributing any I/O failure to `name`.
pub fn load_source<R: Read>(
    name: &str,
    raw: R,
    rules: &CodeRules,
    progress_interval: u64,
) -> Result<SourceCodes> {
    tracing::info!("📄 Processing {}...", name);

    let to_source_error = |e| EtlError::SourceError {
        path: name.to_string(),
        source: e,
    };

    let mut raw = BufReader::new(raw);
    // a zero-byte file has no gzip header at all
    if raw.fill_buf().map_err(to_source_error)?.is_empty() {
        tracing::warn!("{} is empty", name);
        return Ok(SourceCodes {
            name: name.to_string(),
            ..Default::default()
        });
    }

    let source =
        scan_codes(name, open_gzip(raw), rules, progress_interval).map_err(to_source_error)?;

    tracing::info!(
        "✅ Completed {}: {} unique valid codes ({} lines)",
        name,
        source.codes.len(),
        source.lines_read
    );
    Ok(source)
}
