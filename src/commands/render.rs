use std::io::Write;

use super::{DisplayFlags, Shape};

/// A successful result, ready to be printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    None,
    /// Printed verbatim, no terminator added.
    Text(String),
    /// Printed followed by a newline.
    Line(String),
    /// One item per line, no index.
    List(Vec<String>),
    History {
        items: Vec<String>,
        flags: DisplayFlags,
    },
    Count(u32),
    Indexes(Vec<u32>),
    /// A locally produced acknowledgment, printed verbatim.
    Message(String),
}

impl Reply {
    pub fn shape(&self) -> Shape {
        match self {
            Reply::None | Reply::Message(_) => Shape::None,
            Reply::Text(_) => Shape::Text,
            Reply::Line(_) => Shape::Line,
            Reply::List(_) => Shape::List,
            Reply::History { .. } => Shape::IndexedList,
            Reply::Count(_) => Shape::Count,
            Reply::Indexes(_) => Shape::Indexes,
        }
    }
}

pub fn render(reply: &Reply) -> Vec<u8> {
    let mut out = Vec::new();
    match reply {
        Reply::None => {}
        Reply::Text(text) | Reply::Message(text) => out.extend_from_slice(text.as_bytes()),
        Reply::Line(text) => {
            out.extend_from_slice(text.as_bytes());
            out.push(b'\n');
        }
        Reply::List(items) => {
            for item in items {
                out.extend_from_slice(item.as_bytes());
                out.push(b'\n');
            }
        }
        Reply::History { items, flags } => render_history(&mut out, items, *flags),
        Reply::Count(n) => out.extend_from_slice(format!("{}\n", n).as_bytes()),
        Reply::Indexes(indexes) => {
            if !indexes.is_empty() {
                let joined = indexes
                    .iter()
                    .map(|i| i.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                out.extend_from_slice(joined.as_bytes());
                out.push(b'\n');
            }
        }
    }
    out
}

fn render_history(out: &mut Vec<u8>, items: &[String], flags: DisplayFlags) {
    let terminator = if flags.zero { b'\0' } else { b'\n' };
    for (index, item) in items.iter().enumerate() {
        if !flags.raw {
            out.extend_from_slice(format!("{}: ", index).as_bytes());
        }
        if flags.oneline {
            out.extend_from_slice(item.replace('\n', " ").as_bytes());
        } else {
            out.extend_from_slice(item.as_bytes());
        }
        out.push(terminator);
    }
}

pub fn write_reply(out: &mut dyn Write, reply: &Reply) -> std::io::Result<()> {
    out.write_all(&render(reply))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(items: &[&str], flags: DisplayFlags) -> Reply {
        Reply::History {
            items: items.iter().map(|s| s.to_string()).collect(),
            flags,
        }
    }

    fn rendered(reply: &Reply) -> String {
        String::from_utf8(render(reply)).unwrap()
    }

    #[test]
    fn indexed_history() {
        let reply = history(&["foo", "bar"], DisplayFlags::INDEXED);
        assert_eq!(rendered(&reply), "0: foo\n1: bar\n");
    }

    #[test]
    fn raw_history_has_no_indexes() {
        let reply = history(&["foo", "bar"], DisplayFlags::RAW);
        assert_eq!(rendered(&reply), "foo\nbar\n");
    }

    #[test]
    fn zero_history_uses_nul_terminator() {
        let reply = history(&["foo", "multi\nline"], DisplayFlags::ZERO);
        assert_eq!(rendered(&reply), "0: foo\u{0}1: multi\nline\u{0}");
    }

    #[test]
    fn oneline_history_flattens_newlines() {
        let reply = history(&["a\nb\nc", "d"], DisplayFlags::ONELINE);
        assert_eq!(rendered(&reply), "0: a b c\n1: d\n");
    }

    #[test]
    fn oneline_applies_in_raw_mode_too() {
        let flags = DisplayFlags {
            raw: true,
            zero: true,
            oneline: true,
        };
        let reply = history(&["a\nb", "c"], flags);
        assert_eq!(rendered(&reply), "a b\u{0}c\u{0}");
    }

    #[test]
    fn empty_history_prints_nothing() {
        assert!(render(&history(&[], DisplayFlags::INDEXED)).is_empty());
    }

    #[test]
    fn text_is_verbatim() {
        assert_eq!(rendered(&Reply::Text("line one\nline two\n".into())), "line one\nline two\n");
        assert_eq!(rendered(&Reply::Text("no newline".into())), "no newline");
    }

    #[test]
    fn line_and_list_get_newlines() {
        assert_eq!(rendered(&Reply::Line("3.12".into())), "3.12\n");
        assert_eq!(
            rendered(&Reply::List(vec!["history".into(), "work".into()])),
            "history\nwork\n"
        );
    }

    #[test]
    fn count_is_decimal_line() {
        assert_eq!(rendered(&Reply::Count(42)), "42\n");
        assert_eq!(rendered(&Reply::Count(0)), "0\n");
    }

    #[test]
    fn indexes_space_separated() {
        assert_eq!(rendered(&Reply::Indexes(vec![2, 5])), "2 5\n");
        assert_eq!(rendered(&Reply::Indexes(vec![7])), "7\n");
    }

    #[test]
    fn no_indexes_prints_nothing_at_all() {
        assert!(render(&Reply::Indexes(vec![])).is_empty());
    }

    #[test]
    fn none_prints_nothing() {
        assert!(render(&Reply::None).is_empty());
    }

    #[test]
    fn rendering_is_repeatable() {
        let replies = [
            history(&["x\ny", "z"], DisplayFlags::ONELINE),
            history(&["x", "z"], DisplayFlags::ZERO),
            Reply::Indexes(vec![1, 2, 3]),
            Reply::Text("t".into()),
        ];
        for reply in &replies {
            assert_eq!(render(reply), render(reply));
        }
    }

    #[test]
    fn write_reply_writes_rendered_bytes() {
        let mut buf = Vec::new();
        write_reply(&mut buf, &Reply::Count(3)).unwrap();
        assert_eq!(buf, b"3\n");
    }
}
