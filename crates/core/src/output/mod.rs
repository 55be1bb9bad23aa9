//! Writing generated units to disk.
//!
//! Units go through a temporary file in the destination directory and are
//! renamed into place once fully flushed, so a destination is either absent,
//! its previous contents, or the complete new unit.
//!
//! A replaced destination keeps its permissions; a new one gets the usual
//! `0o666` minus umask, like a plain `fs::write`.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tempfile::{Builder, NamedTempFile};
use tracing::debug;

use crate::error::{EmbedError, EmbedResult};
use crate::model::GeneratedUnit;

/// Atomically write `unit` to `destination`, replacing any existing file.
///
/// The parent directory must already exist.
pub fn write_unit(unit: &GeneratedUnit, destination: impl AsRef<Path>) -> EmbedResult<()> {
    let destination = destination.as_ref();
    write_atomic(destination, unit.text.as_bytes())
        .map_err(|err| EmbedError::WriteOutput { path: destination.to_path_buf(), source: err })?;
    debug!(path = %destination.display(), bytes = unit.text.len(), "wrote unit");
    Ok(())
}

fn write_atomic(destination: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let tmp = temp_file_in(dir)?;
    if let Ok(existing) = fs::metadata(destination) {
        tmp.as_file().set_permissions(existing.permissions())?;
    }
    let mut writer = BufWriter::new(tmp);
    writer.write_all(contents)?;
    let tmp = writer.into_inner().map_err(io::IntoInnerError::into_error)?;
    tmp.as_file().sync_all()?;
    tmp.persist(destination).map_err(|err| err.error)?;
    Ok(())
}

fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".embedgen");
    // open(2) applies the umask to this mode.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(text: &str) -> GeneratedUnit {
        GeneratedUnit { name: "x".into(), source: "x.bin".into(), size: 0, text: text.into() }
    }

    #[test]
    fn leaves_no_temp_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("x_data.c");
        write_unit(&unit("hello\n"), &dest).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "hello\n");
    }

    #[test]
    fn replaces_existing_destination() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("x_data.c");
        std::fs::write(&dest, "old").unwrap();
        write_unit(&unit("new\n"), &dest).unwrap();
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "new\n");
    }

    #[cfg(unix)]
    #[test]
    fn new_destination_gets_default_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let reference = dir.path().join("reference.c");
        std::fs::write(&reference, "ref").unwrap();
        let dest = dir.path().join("hello_elf_data.c");
        write_unit(&unit("hello\n"), &dest).unwrap();

        let mode = |p: &Path| std::fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&dest), mode(&reference));
    }

    #[cfg(unix)]
    #[test]
    fn replaced_destination_keeps_its_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("hello_elf_data.c");
        std::fs::write(&dest, "old").unwrap();
        std::fs::set_permissions(&dest, std::fs::Permissions::from_mode(0o644)).unwrap();

        write_unit(&unit("new\n"), &dest).unwrap();
        let mode = std::fs::metadata(&dest).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }
}
