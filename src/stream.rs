//! Several JSON values back to back in one byte stream.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::de::IoRead;
use serde_json::StreamDeserializer;
use std::io;

/// Writes each value as compact JSON followed by a newline.
///
/// ```
/// use json_recipes::stream::Encoder;
///
/// let mut encoder = Encoder::new(Vec::new());
/// encoder.encode(&[1, 2]).unwrap();
/// encoder.encode("three").unwrap();
/// assert_eq!(encoder.into_inner(), b"[1,2]\n\"three\"\n");
/// ```
pub struct Encoder<W> {
    writer: W,
}

impl<W> Encoder<W>
where
    W: io::Write,
{
    /// Creates an encoder that writes into `writer`.
    pub fn new(writer: W) -> Self {
        Encoder { writer }
    }

    /// Serializes `value` and terminates it with `\n`.
    pub fn encode<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        serde_json::to_writer(&mut self.writer, value).map_err(Error::json)?;
        self.writer.write_all(b"\n").map_err(Error::io)
    }

    /// Gets a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Unwraps this `Encoder`, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Iterator that decodes consecutive whitespace-separated values of type `T`
/// from a reader.
///
/// Iteration ends with `None` once only whitespace is left. Malformed or
/// truncated trailing content is reported as one error, after which the
/// iterator is exhausted.
pub struct Decoder<R, T>
where
    R: io::Read,
{
    inner: StreamDeserializer<'static, IoRead<R>, T>,
}

impl<R, T> Decoder<R, T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    /// Creates a decoder reading from `reader`. Nothing is read until the
    /// first call to `next`.
    pub fn new(reader: R) -> Self {
        Decoder {
            inner: serde_json::Deserializer::from_reader(reader).into_iter(),
        }
    }

    /// Number of bytes consumed so far, including whitespace after the last
    /// value returned.
    pub fn byte_offset(&self) -> usize {
        self.inner.byte_offset()
    }
}

impl<R, T> Iterator for Decoder<R, T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    type Item = Result<T>;

    fn next(&mut self) -> Option<Result<T>> {
        let next = self.inner.next()?;
        if let Err(err) = &next {
            tracing::debug!(offset = self.byte_offset(), %err, "stream decode failed");
        }
        Some(next.map_err(Error::json))
    }
}

/// Decode every value of type `T` from `reader` and re-encode it into
/// `writer`, one per line. Returns how many values were copied.
///
/// ```
/// use json_recipes::{stream, Person};
///
/// let input = r#"
///     {"name": "Fred", "age": 40}
///     {"name": "Mary", "age": 21}
/// "#;
/// let mut out = Vec::new();
/// let count = stream::transcode::<Person, _, _>(input.as_bytes(), &mut out).unwrap();
/// assert_eq!(count, 2);
/// assert_eq!(out, b"{\"name\":\"Fred\",\"age\":40}\n{\"name\":\"Mary\",\"age\":21}\n");
/// ```
pub fn transcode<T, R, W>(reader: R, writer: W) -> Result<usize>
where
    T: DeserializeOwned + Serialize,
    R: io::Read,
    W: io::Write,
{
    let mut encoder = Encoder::new(writer);
    let mut count = 0;
    for value in Decoder::<R, T>::new(reader) {
        encoder.encode(&value?)?;
        count += 1;
    }
    encoder.writer.flush().map_err(Error::io)?;
    tracing::debug!(count, "transcoded stream");
    Ok(count)
}
