use std::{
    fs,
    io::{self, Read},
};

use serde_json::Value;
use tracing::debug;

use crate::catalog::{InputError, InputLoader};

/// Reads calculation input from a file, or from piped standard input when
/// the path is empty or `-`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileInputLoader;

impl InputLoader for FileInputLoader {
    fn load(&self, path: &str) -> Result<Value, InputError> {
        let data = if path.is_empty() || path == "-" {
            read_stdin()?
        } else {
            debug!(path, "reading input file");
            fs::read_to_string(path).map_err(|source| InputError::Read {
                path: path.to_string(),
                source,
            })?
        };
        Ok(serde_json::from_str(&data)?)
    }
}

fn read_stdin() -> Result<String, InputError> {
    if atty::is(atty::Stream::Stdin) {
        return Err(InputError::Terminal);
    }
    debug!("reading input from stdin");
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(InputError::Stdin)?;
    Ok(buffer)
}
