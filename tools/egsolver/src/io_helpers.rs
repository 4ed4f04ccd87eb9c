use std::fs;
use std::io::Read;
use std::io::Write;
use std::path::Path;

use egame_util::EgameError;

/// Reads from the given path, or from stdin if no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String, EgameError> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Writes to the given path, or to stdout if no path is given.
pub fn write_output(text: &str, path: Option<&Path>) -> Result<(), EgameError> {
    match path {
        Some(path) => fs::write(path, text)?,
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(text.as_bytes())?;
            if !text.ends_with('\n') {
                lock.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}
