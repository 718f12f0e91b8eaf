//! Whitespace-separated value reader with zero-allocation float parsing.

use std::io::{self, BufRead, BufReader, Read};

// --- Helpers ---

/// Replace U+2212 MINUS SIGN with ASCII `-` in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

/// A finite float, or `None` for anything else.
#[inline]
fn parse_value(token: &[u8]) -> Option<f64> {
    lexical_core::parse::<f64>(token)
        .ok()
        .filter(|v| v.is_finite())
}

// --- Ingest ---
const BUF_CAP: usize = 1 << 16; // 64 KiB

/// Read values until the input is exhausted or a token fails to parse as a
/// finite number. Everything after the first bad token is ignored.
pub fn read_values<R: Read>(src: R) -> io::Result<Vec<f64>> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut data = Vec::<f64>::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        if rdr.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;
        normalize_unicode_minus(&mut buf);

        for token in buf
            .split(u8::is_ascii_whitespace)
            .filter(|t| !t.is_empty())
        {
            match parse_value(token) {
                Some(v) => data.push(v),
                None => {
                    log::debug!(
                        "line {line_no}: stopping at non-numeric token {:?}",
                        String::from_utf8_lossy(token)
                    );
                    return Ok(data);
                }
            }
        }
    }

    log::debug!("read {} values from {line_no} lines", data.len());
    Ok(data)
}
