use anyhow::{Context, Result};
use std::io::Read;

/// Reads all of stdin, without a size limit, and drops one trailing newline.
pub fn read_piped_text(input: &mut dyn Read) -> Result<String> {
    let mut buf = Vec::new();
    input
        .read_to_end(&mut buf)
        .context("failed to read standard input")?;
    tracing::debug!(bytes = buf.len(), "read piped input");

    strip_terminator(&mut buf);

    match String::from_utf8(buf) {
        Ok(text) => Ok(text),
        Err(e) => {
            tracing::warn!("piped input is not valid UTF-8, replacing invalid sequences");
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Drops exactly one trailing `\n`, if there is one.
fn strip_terminator(buf: &mut Vec<u8>) {
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piped(input: &[u8]) -> String {
        let mut reader = input;
        read_piped_text(&mut reader).unwrap()
    }

    #[test]
    fn drops_single_trailing_newline() {
        assert_eq!(piped(b"hi\n"), "hi");
    }

    #[test]
    fn keeps_last_byte_when_not_a_newline() {
        // `printf hi | gpaste` keeps both characters.
        assert_eq!(piped(b"hi"), "hi");
    }

    #[test]
    fn drops_only_one_newline() {
        assert_eq!(piped(b"hi\n\n"), "hi\n");
    }

    #[test]
    fn keeps_carriage_return() {
        assert_eq!(piped(b"hi\r\n"), "hi\r");
    }

    #[test]
    fn empty_input_is_empty_text() {
        assert_eq!(piped(b""), "");
        assert_eq!(piped(b"\n"), "");
    }

    #[test]
    fn multiline_input_is_kept_intact() {
        assert_eq!(piped(b"one\ntwo\nthree\n"), "one\ntwo\nthree");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        assert_eq!(piped(b"a\xffb\n"), "a\u{fffd}b");
    }
}
