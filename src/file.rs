// src/file.rs
//
// Local side of "download latest file": the bytes come from the backend,
// we only decide where they land and how the user opens them.

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

/// Write `bytes` into `dir` as `name`, never overwriting an existing file.
/// Returns the final path written to.
pub fn save_download(dir: &Path, name: &str, bytes: &[u8]) -> io::Result<PathBuf> {
    ensure_directory(dir)?;
    for n in 1usize.. {
        let path = dir.join(numbered_name(name, n));
        // create_new fails instead of truncating whatever got there first
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(bytes)?;
                return Ok(path);
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e),
        }
    }
    Err(io::Error::other(format!("No free file name for {name}")))
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// `n`th candidate for `name`:
///   1 → "<stem>.<ext>", 2 → "<stem> (2).<ext>", 3 → "<stem> (3).<ext>", …
pub fn numbered_name(name: &str, n: usize) -> String {
    if n <= 1 {
        return s!(name);
    }
    let p = Path::new(name);
    let stem = p.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_else(|| s!(name));
    match p.extension() {
        Some(ext) => format!("{stem} ({n}).{}", ext.to_string_lossy()),
        None => format!("{stem} ({n})"),
    }
}

/// Hand `path` to the OS default application.
pub fn open_with_default_app(path: &Path) -> io::Result<()> {
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd").args(["/C", "start", ""]).arg(path).spawn()?;
        Ok(())
    }

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(path).spawn()?;
        Ok(())
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(path).spawn()?;
        Ok(())
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
    {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            format!("Opening files not supported on this platform: {}", path.display()),
        ))
    }
}
