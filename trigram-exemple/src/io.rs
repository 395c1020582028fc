use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::io;

/// Reads a UTF-8 text file into a single `String`.
///
/// The whole corpus is handed to `fit` at once, so no line splitting here.
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> io::Result<String> {
    let filename = filename.as_ref();
    let mut contents = String::new();
    File::open(filename)
        .and_then(|mut file| file.read_to_string(&mut contents))
        .map_err(|err| io::Error::new(err.kind(), format!("{}: {err}", filename.display())))?;
    Ok(contents)
}
