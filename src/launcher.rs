//! Writes rendered pages to disk and hands them to the operating system.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::Builder as TempFileBuilder;

use crate::error::MapError;

const TEMP_PREFIX: &str = "map-";
const TEMP_SUFFIX: &str = ".html";

const NO_ARGS: &[&str] = &[];
// The empty argument is the window title consumed by `start`.
const WINDOWS_START_ARGS: &[&str] = &["/C", "start", ""];

/// Opens a file with whatever application the host associates with it.
pub trait Launcher {
    /// Fails early when this launcher cannot work on the current host.
    fn ensure_supported(&self) -> Result<(), MapError> {
        Ok(())
    }

    fn open(&self, path: &Path) -> Result<(), MapError>;
}

/// Launches the platform's "open" command and waits for it to exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl SystemLauncher {
    /// Builds the command that opens `path` on the current target.
    pub fn command_for(path: &Path) -> Result<Command, MapError> {
        let (program, leading_args) = open_program(std::env::consts::OS)?;
        let mut command = Command::new(program);
        command.args(leading_args).arg(path);
        Ok(command)
    }
}

impl Launcher for SystemLauncher {
    fn ensure_supported(&self) -> Result<(), MapError> {
        open_program(std::env::consts::OS).map(|_| ())
    }

    fn open(&self, path: &Path) -> Result<(), MapError> {
        let mut command = Self::command_for(path)?;
        let description = describe(&command);
        log::info!("Opening {} with '{}'", path.display(), description);

        let status = command.status().map_err(|source| MapError::Launch {
            command: description.clone(),
            source,
        })?;

        if !status.success() {
            return Err(MapError::LaunchStatus {
                command: description,
                status,
            });
        }
        Ok(())
    }
}

/// Returns the program and its leading arguments for a given `std::env::consts::OS` value.
fn open_program(os: &str) -> Result<(&'static str, &'static [&'static str]), MapError> {
    match os {
        "macos" => Ok(("open", NO_ARGS)),
        "linux" | "freebsd" | "openbsd" | "netbsd" | "dragonfly" => Ok(("xdg-open", NO_ARGS)),
        "windows" => Ok(("cmd", WINDOWS_START_ARGS)),
        other => Err(MapError::UnsupportedPlatform(other.to_string())),
    }
}

fn describe(command: &Command) -> String {
    let mut parts: Vec<OsString> = vec![command.get_program().to_os_string()];
    parts.extend(command.get_args().map(|arg| arg.to_os_string()));
    parts
        .iter()
        .map(|part| part.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Writes `contents` to a new `map-*.html` file in the system temp directory.
///
/// The file is kept after the process exits so the browser can still load it.
pub fn write_temp_page(contents: &[u8]) -> Result<PathBuf, MapError> {
    write_temp_page_in(&std::env::temp_dir(), contents)
}

/// Like [`write_temp_page`], but inside `dir`.
pub fn write_temp_page_in(dir: &Path, contents: &[u8]) -> Result<PathBuf, MapError> {
    let mut temp_file = TempFileBuilder::new()
        .prefix(TEMP_PREFIX)
        .suffix(TEMP_SUFFIX)
        .tempfile_in(dir)
        .map_err(MapError::TempFile)?;

    temp_file
        .write_all(contents)
        .and_then(|()| temp_file.flush())
        .map_err(|source| MapError::Write {
            path: temp_file.path().to_path_buf(),
            source,
        })?;

    let (_file, path) = temp_file
        .keep()
        .map_err(|err| MapError::TempFile(err.error))?;
    Ok(path)
}

/// Writes `contents` to `path`, replacing any existing file.
pub fn write_page(path: &Path, contents: &[u8]) -> Result<(), MapError> {
    fs::write(path, contents).map_err(|source| MapError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_page_matches_name_pattern_and_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp_page_in(dir.path(), b"<html></html>").unwrap();

        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("map-"));
        assert!(name.ends_with(".html"));
        assert_eq!(fs::read(&path).unwrap(), b"<html></html>");
    }

    #[test]
    fn temp_pages_get_unique_names() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_temp_page_in(dir.path(), b"a").unwrap();
        let second = write_temp_page_in(dir.path(), b"b").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn temp_page_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = write_temp_page_in(&missing, b"x").unwrap_err();
        assert!(matches!(err, MapError::TempFile(_)));
    }

    #[test]
    fn write_page_reports_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing").join("map.html");

        let err = write_page(&target, b"x").unwrap_err();
        match err {
            MapError::Write { path, .. } => assert_eq!(path, target),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn open_program_per_platform() {
        assert_eq!(open_program("macos").unwrap().0, "open");
        assert_eq!(open_program("linux").unwrap().0, "xdg-open");

        let (program, args) = open_program("windows").unwrap();
        assert_eq!(program, "cmd");
        assert_eq!(args, &["/C", "start", ""]);

        assert!(matches!(
            open_program("haiku"),
            Err(MapError::UnsupportedPlatform(os)) if os == "haiku"
        ));
    }

    #[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
    #[test]
    fn system_launcher_supports_common_hosts() {
        assert!(SystemLauncher.ensure_supported().is_ok());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn command_for_appends_path() {
        let command = SystemLauncher::command_for(Path::new("/tmp/map-x.html")).unwrap();

        assert_eq!(describe(&command), "xdg-open /tmp/map-x.html");
    }
}
