//! HTTP Range resolution module
//!
//! Browsers request byte ranges of the clip files when the user seeks
//! within a video. Only single `bytes=` ranges are honored; anything
//! else falls back to the full body.

/// A byte range already resolved against the file size, both ends
/// inclusive. Invariant: `start <= end < file_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

impl ByteRange {
    /// Number of bytes the range covers (for test validation only)
    #[cfg(test)]
    pub const fn len(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Outcome of resolving a Range header against a file
#[derive(Debug)]
pub enum RangeOutcome {
    /// Serve a 206 with this slice
    Satisfiable(ByteRange),
    /// Serve a 416
    NotSatisfiable,
    /// No usable Range header, serve the full file
    Ignored,
}

/// Resolve a Range header value against the total file size.
///
/// Supported forms: `bytes=start-end`, `bytes=start-`, `bytes=-suffix`.
/// Multi-range and non-byte units are ignored rather than rejected.
pub fn resolve_range(range_header: Option<&str>, file_size: usize) -> RangeOutcome {
    let Some(header) = range_header else {
        return RangeOutcome::Ignored;
    };

    let Some(spec) = header.strip_prefix("bytes=") else {
        return RangeOutcome::Ignored;
    };

    if spec.contains(',') || file_size == 0 {
        return RangeOutcome::Ignored;
    }

    let Some((start_str, end_str)) = spec.split_once('-') else {
        return RangeOutcome::Ignored;
    };
    let (start_str, end_str) = (start_str.trim(), end_str.trim());

    if start_str.is_empty() {
        return resolve_suffix(end_str, file_size);
    }

    let Ok(start) = start_str.parse::<usize>() else {
        return RangeOutcome::Ignored;
    };
    if start >= file_size {
        return RangeOutcome::NotSatisfiable;
    }

    let end = if end_str.is_empty() {
        file_size - 1
    } else {
        let Ok(e) = end_str.parse::<usize>() else {
            return RangeOutcome::Ignored;
        };
        e.min(file_size - 1)
    };

    if start > end {
        return RangeOutcome::NotSatisfiable;
    }

    RangeOutcome::Satisfiable(ByteRange { start, end })
}

/// Resolve a suffix form (`bytes=-500`: the last 500 bytes)
fn resolve_suffix(suffix_str: &str, file_size: usize) -> RangeOutcome {
    let Ok(suffix) = suffix_str.parse::<usize>() else {
        return RangeOutcome::Ignored;
    };

    if suffix == 0 {
        return RangeOutcome::NotSatisfiable;
    }

    // A suffix longer than the file just means the whole file
    RangeOutcome::Satisfiable(ByteRange {
        start: file_size.saturating_sub(suffix),
        end: file_size - 1,
    })
}
