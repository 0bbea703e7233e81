//! Row-oriented results sinks.
//!
//! Experiments only produce rows; where the rows go (a CSV file, memory,
//! a progress logger wrapping either) is decided by the caller.

use std::io::Write;
use std::marker::PhantomData;

use crate::error::Result;

/// A flat record of named scalar fields
pub trait Row {
    /// Column names, in field order
    const HEADER: &'static [&'static str];

    /// Field values rendered with `Display`, which is locale independent
    fn fields(&self) -> Vec<String>;
}

pub trait ResultSink<R: Row> {
    fn write_row(&mut self, row: &R) -> Result<()>;

    /// Flush anything buffered. Called once after the last row.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<R: Row, S: ResultSink<R> + ?Sized> ResultSink<R> for &mut S {
    fn write_row(&mut self, row: &R) -> Result<()> {
        (**self).write_row(row)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

/// Comma-separated output with a header line
pub struct CsvSink<W: Write, R: Row> {
    writer: W,
    rows_written: usize,
    _row: PhantomData<fn(&R)>,
}

impl<W: Write, R: Row> CsvSink<W, R> {
    /// Wrap `writer` and emit the header line immediately
    pub fn new(mut writer: W) -> Result<Self> {
        write_record(&mut writer, R::HEADER.iter().copied())?;
        Ok(Self {
            writer,
            rows_written: 0,
            _row: PhantomData,
        })
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write, R: Row> ResultSink<R> for CsvSink<W, R> {
    fn write_row(&mut self, row: &R) -> Result<()> {
        let fields = row.fields();
        write_record(&mut self.writer, fields.iter().map(String::as_str))?;
        self.rows_written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

fn write_record<'a, W: Write>(
    writer: &mut W,
    fields: impl Iterator<Item = &'a str>,
) -> std::io::Result<()> {
    for (i, field) in fields.enumerate() {
        if i > 0 {
            writer.write_all(b",")?;
        }
        if field.contains([',', '"', '\n']) {
            write!(writer, "\"{}\"", field.replace('"', "\"\""))?;
        } else {
            writer.write_all(field.as_bytes())?;
        }
    }
    writer.write_all(b"\n")
}

/// Keeps rows in memory
#[derive(Debug, Clone)]
pub struct MemorySink<R> {
    pub rows: Vec<R>,
}

impl<R> Default for MemorySink<R> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<R> MemorySink<R> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: Row + Clone> ResultSink<R> for MemorySink<R> {
    fn write_row(&mut self, row: &R) -> Result<()> {
        self.rows.push(row.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Pair {
        label: String,
        value: f64,
    }

    impl Row for Pair {
        const HEADER: &'static [&'static str] = &["label", "value"];

        fn fields(&self) -> Vec<String> {
            vec![self.label.clone(), self.value.to_string()]
        }
    }

    #[test]
    fn test_csv_header_and_rows() {
        let mut sink = CsvSink::<_, Pair>::new(Vec::new()).unwrap();
        sink.write_row(&Pair {
            label: "a".into(),
            value: 0.5,
        })
        .unwrap();
        sink.write_row(&Pair {
            label: "b".into(),
            value: 1e-7,
        })
        .unwrap();
        sink.finish().unwrap();
        assert_eq!(sink.rows_written(), 2);

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "label,value\na,0.5\nb,0.0000001\n");
    }

    #[test]
    fn test_csv_quotes_separators() {
        let mut sink = CsvSink::<_, Pair>::new(Vec::new()).unwrap();
        sink.write_row(&Pair {
            label: "x,\"y\"".into(),
            value: 2.0,
        })
        .unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text.lines().nth(1), Some("\"x,\"\"y\"\"\",2"));
    }

    fn write_one(mut sink: impl ResultSink<Pair>) {
        sink.write_row(&Pair {
            label: "z".into(),
            value: 3.0,
        })
        .unwrap();
        sink.finish().unwrap();
    }

    #[test]
    fn test_memory_sink_through_mut_ref() {
        let mut memory = MemorySink::new();
        write_one(&mut memory);
        assert_eq!(memory.rows.len(), 1);
        assert_eq!(memory.rows[0].label, "z");
    }
}
