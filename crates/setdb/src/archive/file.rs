use std::{
    fs::File,
    io::{BufReader, BufWriter, IntoInnerError},
    path::Path,
};

use log::debug;

use crate::{Header, IoSink, IoSource, Options, Persist, Result};

/// Writes a [`Header`] followed by `value` to a new file at `path`.
///
/// The file is synced before returning.
pub fn save_to_path<T: Persist>(path: impl AsRef<Path>, value: &T, options: Options) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut sink = IoSink::new(BufWriter::new(file), options);

    Header::new(&options).write(&mut sink)?;
    value.save(&mut sink)?;

    let written = sink.written();
    let file = sink
        .into_inner()
        .into_inner()
        .map_err(IntoInnerError::into_error)?;
    file.sync_all()?;

    debug!("{}: saved {written} bytes", path.display());
    Ok(())
}

/// Verifies the [`Header`] of the file at `path` and loads `value` in place.
pub fn load_from_path<T: Persist>(
    path: impl AsRef<Path>,
    value: &mut T,
    options: Options,
) -> Result<()> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let len = file.metadata()?.len();
    let mut source = IoSource::new(BufReader::new(file), options).with_len(len);

    Header::read_and_verify(&mut source)?;
    value.load(&mut source)?;

    debug!("{}: loaded {len} bytes", path.display());
    Ok(())
}
