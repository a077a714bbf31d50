//! Input checks run before any subtitle is parsed

use anyhow::{bail, Context, Result};
use fontmerge_core::fonts::contains_font_files;
use std::{
    ffi::OsStr,
    fs::{self, File, OpenOptions},
    io::Read,
    path::{Path, PathBuf},
};

/// EBML header magic opening every Matroska file
pub const MATROSKA_MAGIC: [u8; 4] = [0x1A, 0x45, 0xDF, 0xA3];

/// Whether the file starts with the EBML magic
pub fn is_matroska(path: &Path) -> Result<bool> {
    let mut file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let mut magic = [0u8; 4];
    match file.read_exact(&mut magic) {
        Ok(()) => Ok(magic == MATROSKA_MAGIC),
        Err(err) if err.kind() == std::io::ErrorKind::UnexpectedEof => Ok(false),
        Err(err) => Err(err).with_context(|| format!("cannot read {}", path.display())),
    }
}

/// Fail unless `path` is a Matroska file
pub fn check_matroska(path: &Path) -> Result<()> {
    if !is_matroska(path)? {
        bail!("{} is not a Matroska file", path.display());
    }
    Ok(())
}

/// Fail unless every subtitle has the `.ass` extension
pub fn check_subtitles(paths: &[PathBuf]) -> Result<()> {
    for path in paths {
        let is_ass = path
            .extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| ext.eq_ignore_ascii_case("ass"));
        if !is_ass {
            bail!("{} is not an ASS subtitle file", path.display());
        }
    }
    Ok(())
}

/// Directory an output file is written to
pub fn output_dir(output: &Path) -> &Path {
    match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Fail unless a file can be created in `dir`
pub fn check_writable(dir: &Path) -> Result<()> {
    let probe = dir.join(format!(".fontmerge-probe-{}", std::process::id()));
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&probe)
        .with_context(|| format!("unable to create files in {}", dir.display()))?;
    fs::remove_file(&probe).with_context(|| format!("cannot remove {}", probe.display()))?;
    Ok(())
}

/// Font folder to load, if usable
///
/// A path that is not a directory is an error. A directory without any font
/// file is reported and ignored.
pub fn font_folder(dir: Option<&Path>) -> Result<Option<&Path>> {
    let Some(dir) = dir else {
        return Ok(None);
    };
    if !dir.is_dir() {
        bail!("font path {} is not a directory", dir.display());
    }
    if !contains_font_files(dir)? {
        log::error!("font path {} does not contain any fonts; ignoring it", dir.display());
        return Ok(None);
    }
    Ok(Some(dir))
}

/// Locate `program` on `PATH`
pub fn find_in_path(program: &str) -> Option<PathBuf> {
    let paths = std::env::var_os("PATH")?;
    let file_name = format!("{program}{}", std::env::consts::EXE_SUFFIX);
    std::env::split_paths(&paths)
        .map(|dir| dir.join(&file_name))
        .find(|candidate| candidate.is_file())
}

/// Program to run for merging: the explicit path or `mkvmerge` from `PATH`
pub fn mkvmerge_program(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    find_in_path("mkvmerge").context(
        "mkvmerge is not on PATH; add it or give its location with --mkvmerge",
    )
}
