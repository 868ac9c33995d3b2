//! Byte-prefix acquisition from local files and remote URLs.
//!
//! These are the resolver's two external collaborators. Both return either a
//! (possibly short) buffer or an explicit failure, never a silent partial
//! success.

use bytes::Bytes;
use tokio::io::AsyncReadExt;

use crate::error::Result;

/// Number of leading bytes inspected for signature matching.
///
/// The longest built-in signature ends at offset 8 + 4 pattern bytes.
pub const SNIFF_LEN: usize = 12;

/// Read up to the first [`SNIFF_LEN`] bytes of a local file.
///
/// A file shorter than [`SNIFF_LEN`] yields a truncated buffer rather than
/// an error. The handle is closed when the function returns, on success and
/// failure alike.
pub async fn read_file_prefix(path: &str) -> Result<Bytes> {
    let mut file = tokio::fs::File::open(path).await?;
    let mut buf = [0u8; SNIFF_LEN];
    let mut filled = 0;
    while filled < SNIFF_LEN {
        let n = file.read(&mut buf[filled..]).await?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(Bytes::copy_from_slice(&buf[..filled]))
}

/// Fetch the leading bytes of a remote resource.
///
/// Requests `bytes=0-11` so a range-capable server sends only the sniffing
/// prefix; servers that ignore the header return the full body, which is
/// truncated to [`SNIFF_LEN`] before matching. HTTP error statuses count as
/// acquisition failures.
pub async fn fetch_url_prefix(url: &str) -> Result<Bytes> {
    let response = reqwest::Client::new()
        .get(url)
        .header(reqwest::header::RANGE, format!("bytes=0-{}", SNIFF_LEN - 1))
        .send()
        .await?
        .error_for_status()?;

    let mut body = response.bytes().await?;
    body.truncate(SNIFF_LEN);
    Ok(body)
}
