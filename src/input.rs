use crate::{Error, Result};
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

/// Input text file read line by line.
pub struct InputFile {
    path: PathBuf,
    reader: BufReader<File>,
}

impl InputFile {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| Error::FileAccess {
            path: path.clone(),
            source,
        })?;

        tracing::debug!("Opened input file: {}", path.display());

        Ok(Self {
            path,
            reader: BufReader::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Iterate lines in file order, each keeping its trailing `\n`.
    pub fn lines(self) -> Lines {
        Lines {
            path: self.path,
            reader: self.reader,
            done: false,
        }
    }
}

/// Iterator over the lines of an [`InputFile`].
///
/// `\n`, `\r\n` and a lone `\r` all end a line and are yielded as `\n`.
/// The last line keeps no terminator if the file does not end with one.
pub struct Lines {
    path: PathBuf,
    reader: BufReader<File>,
    done: bool,
}

impl Lines {
    fn read_error(&mut self, source: io::Error) -> Error {
        self.done = true;
        Error::Read {
            path: self.path.clone(),
            source,
        }
    }
}

impl Iterator for Lines {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut bytes = Vec::new();
        match read_text_line(&mut self.reader, &mut bytes) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => match String::from_utf8(bytes) {
                Ok(line) => Some(Ok(line)),
                Err(e) => {
                    let source = io::Error::new(io::ErrorKind::InvalidData, e);
                    Some(Err(self.read_error(source)))
                }
            },
            Err(source) => Some(Err(self.read_error(source))),
        }
    }
}

/// Read one line into `buf`, writing its terminator as `\n`.
///
/// Returns the number of bytes consumed from `reader`, 0 at end of input.
fn read_text_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<usize> {
    let mut consumed = 0;

    loop {
        let available = match reader.fill_buf() {
            Ok(available) => available,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        if available.is_empty() {
            return Ok(consumed);
        }

        match available.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(i) => {
                let terminator = available[i];
                buf.extend_from_slice(&available[..i]);
                buf.push(b'\n');
                reader.consume(i + 1);
                consumed += i + 1;

                // CRLF counts as one terminator
                if terminator == b'\r' && peek_byte(reader)? == Some(b'\n') {
                    reader.consume(1);
                    consumed += 1;
                }

                return Ok(consumed);
            }
            None => {
                let len = available.len();
                buf.extend_from_slice(available);
                reader.consume(len);
                consumed += len;
            }
        }
    }
}

fn peek_byte<R: BufRead>(reader: &mut R) -> io::Result<Option<u8>> {
    loop {
        match reader.fill_buf() {
            Ok(available) => return Ok(available.first().copied()),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}
