//! One record to and from a file or any other byte sink or source.

use crate::error::{Error, Result};
use crate::stream::Encoder;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

/// Serialize `value` as one line of JSON into `writer`.
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let mut encoder = Encoder::new(writer);
    encoder.encode(value)?;
    encoder.into_inner().flush().map_err(Error::io)
}

/// Deserialize exactly one value from `reader`. Anything but whitespace after
/// the value is an error.
pub fn from_reader<R, T>(reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    serde_json::from_reader(reader).map_err(Error::json)
}

/// Create or truncate the file at `path` and write `value` into it.
///
/// ```
/// use json_recipes::{file, Person};
///
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("fred.json");
/// let fred = Person { name: "Fred".to_owned(), age: 40 };
///
/// file::to_path(&path, &fred).unwrap();
/// assert_eq!(file::from_path::<_, Person>(&path).unwrap(), fred);
/// ```
pub fn to_path<P, T>(path: P, value: &T) -> Result<()>
where
    P: AsRef<Path>,
    T: ?Sized + Serialize,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(Error::io)?;
    to_writer(BufWriter::new(file), value)?;
    tracing::debug!(path = %path.display(), "wrote record");
    Ok(())
}

/// Read one value back from the file at `path`.
pub fn from_path<P, T>(path: P) -> Result<T>
where
    P: AsRef<Path>,
    T: DeserializeOwned,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(Error::io)?;
    let value = from_reader(BufReader::new(file))?;
    tracing::debug!(path = %path.display(), "read record");
    Ok(value)
}
