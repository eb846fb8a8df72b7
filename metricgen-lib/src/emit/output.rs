use camino::{Utf8Path, Utf8PathBuf};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("unable to open output file '{path}'")]
    OutputTargetUnavailable {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to write output file '{path}'")]
    WriteFailed {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A rendered artifact and the file it goes to.
#[derive(Debug)]
pub struct Artifact<'a> {
    pub path: &'a Utf8Path,
    pub contents: String,
}

/// Write rendered artifacts to disk.
///
/// Every target is opened before any of them is truncated, so a target that cannot be opened
/// leaves the contents of all the others untouched. Targets this call created are removed
/// again in that case.
pub fn write_artifacts(artifacts: &[Artifact<'_>]) -> Result<(), EmitError> {
    let mut files: Vec<File> = Vec::with_capacity(artifacts.len());
    let mut created: Vec<&Utf8Path> = Vec::new();

    for artifact in artifacts {
        match open_target(artifact.path) {
            Ok((file, is_new)) => {
                if is_new {
                    created.push(artifact.path);
                }
                files.push(file);
            }
            Err(source) => {
                drop(files);
                for path in created {
                    if let Err(e) = fs::remove_file(path) {
                        log::warn!("unable to remove '{path}' after a failed run: {e}");
                    }
                }

                return Err(EmitError::OutputTargetUnavailable {
                    path: artifact.path.to_path_buf(),
                    source,
                });
            }
        }
    }

    for (artifact, mut file) in artifacts.iter().zip(files) {
        file.set_len(0)
            .and_then(|()| file.write_all(artifact.contents.as_bytes()))
            .and_then(|()| file.flush())
            .map_err(|source| EmitError::WriteFailed {
                path: artifact.path.to_path_buf(),
                source,
            })?;

        log::info!("wrote {} ({} bytes)", artifact.path, artifact.contents.len());
    }

    Ok(())
}

/// Open `path` for writing without truncating it, reporting whether the file had to be created.
fn open_target(path: &Utf8Path) -> io::Result<(File, bool)> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => Ok((file, true)),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            let file = OpenOptions::new().write(true).open(path)?;
            Ok((file, false))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_writes_all_artifacts() {
        let tmp = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let header = root.join("m.h");
        let source = root.join("m.c");

        write_artifacts(&[
            Artifact {
                path: &header,
                contents: "header\n".to_string(),
            },
            Artifact {
                path: &source,
                contents: "source\n".to_string(),
            },
        ])
        .unwrap();

        assert_eq!(std::fs::read_to_string(&header).unwrap(), "header\n");
        assert_eq!(std::fs::read_to_string(&source).unwrap(), "source\n");
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_unopenable_target_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let header = root.join("m.h");
        let missing = root.join("no_such_dir").join("m.c");
        std::fs::write(&header, "previous\n").unwrap();

        let err = write_artifacts(&[
            Artifact {
                path: &header,
                contents: "header\n".to_string(),
            },
            Artifact {
                path: &missing,
                contents: "source\n".to_string(),
            },
        ])
        .unwrap_err();

        assert!(matches!(err, EmitError::OutputTargetUnavailable { ref path, .. } if *path == missing));
        assert_eq!(std::fs::read_to_string(&header).unwrap(), "previous\n");
        assert!(!missing.exists());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_unopenable_target_removes_created_files() {
        let tmp = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let header = root.join("m.h");
        let missing = root.join("no_such_dir").join("m.c");

        let err = write_artifacts(&[
            Artifact {
                path: &header,
                contents: "header\n".to_string(),
            },
            Artifact {
                path: &missing,
                contents: "source\n".to_string(),
            },
        ])
        .unwrap_err();

        assert!(matches!(err, EmitError::OutputTargetUnavailable { .. }));
        assert!(!header.exists());
        assert!(!missing.exists());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_existing_target_is_replaced() {
        let tmp = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let header = root.join("m.h");
        std::fs::write(&header, "a much longer previous header\n").unwrap();

        write_artifacts(&[Artifact {
            path: &header,
            contents: "header\n".to_string(),
        }])
        .unwrap();

        assert_eq!(std::fs::read_to_string(&header).unwrap(), "header\n");
    }
}
