//! Font discovery through `fontdb` and name-table reading with `ttf-parser`

use super::{FontCatalog, InstalledFont};
use crate::{utils::CoreError, Result};
use fontdb::{Database as FontDatabase, Source};
use std::path::{Path, PathBuf};
use ttf_parser::{name_id, Face};

/// File extensions treated as font files (compared case-insensitively)
pub const FONT_EXTENSIONS: [&str; 3] = ["ttf", "otf", "ttc"];

/// Whether the path has a font file extension
#[must_use]
pub fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| FONT_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
}

/// Whether a directory directly contains at least one font file
///
/// # Errors
///
/// Returns [`CoreError::NotADirectory`] when `dir` is not a directory and
/// [`CoreError::FontSource`] when it cannot be listed.
pub fn contains_font_files(dir: &Path) -> Result<bool> {
    if !dir.is_dir() {
        return Err(CoreError::NotADirectory(dir.to_path_buf()));
    }

    for entry in std::fs::read_dir(dir).map_err(|err| CoreError::font_source(dir, err))? {
        let entry = entry.map_err(|err| CoreError::font_source(dir, err))?;
        if is_font_file(&entry.path()) {
            return Ok(true);
        }
    }
    Ok(false)
}

impl FontCatalog {
    /// Catalog of the fonts installed on the host, optionally followed by a
    /// font directory
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotADirectory`] when `font_dir` is given but is
    /// not a directory.
    pub fn load(font_dir: Option<&Path>) -> Result<Self> {
        let mut database = FontDatabase::new();
        database.load_system_fonts();
        log::debug!("{} system font faces", database.len());

        if let Some(dir) = font_dir {
            if !dir.is_dir() {
                return Err(CoreError::NotADirectory(dir.to_path_buf()));
            }
            database.load_fonts_dir(dir);
            log::debug!("{} font faces after loading {}", database.len(), dir.display());
        }

        Ok(Self::from_database(&database))
    }

    /// Catalog of the file-backed faces of a font database
    ///
    /// Faces loaded from memory have no file to attach and are skipped, as
    /// are faces whose data cannot be parsed.
    #[must_use]
    pub fn from_database(database: &FontDatabase) -> Self {
        database
            .faces()
            .filter_map(|face| {
                let path = face_path(&face.source)?;
                let names = database.with_face_data(face.id, read_face_names).flatten();
                let Some((full_name, family)) = names else {
                    log::debug!("skipping unreadable font face {}", path.display());
                    return None;
                };
                Some(InstalledFont {
                    path,
                    index: face.index,
                    full_name,
                    family,
                })
            })
            .collect()
    }
}

/// File backing a face, if any
fn face_path(source: &Source) -> Option<PathBuf> {
    match source {
        Source::File(path) | Source::SharedFile(path, _) => Some(path.clone()),
        Source::Binary(_) => None,
    }
}

/// Full name (ID 4) and family (ID 1) of a face; the first record of each wins
fn read_face_names(data: &[u8], index: u32) -> Option<(Option<String>, Option<String>)> {
    let face = Face::parse(data, index).ok()?;
    let mut full_name = None;
    let mut family = None;

    for record in face.names() {
        let slot = match record.name_id {
            name_id::FULL_NAME => &mut full_name,
            name_id::FAMILY => &mut family,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(decode_name(record.to_string(), record.name));
        }
        if full_name.is_some() && family.is_some() {
            break;
        }
    }

    Some((full_name, family))
}

/// Decoded name record, falling back to Latin-1 for non-Unicode encodings
fn decode_name(unicode: Option<String>, raw: &[u8]) -> String {
    unicode.unwrap_or_else(|| raw.iter().copied().map(char::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_extensions() {
        assert!(is_font_file(Path::new("/fonts/Arial.TTF")));
        assert!(is_font_file(Path::new("msgothic.ttc")));
        assert!(is_font_file(Path::new("a.otf")));
        assert!(!is_font_file(Path::new("readme.txt")));
        assert!(!is_font_file(Path::new("ttf")));
    }

    #[test]
    fn latin1_fallback() {
        assert_eq!(decode_name(None, b"Caf\xe9"), "Café");
        assert_eq!(decode_name(Some("Kept".to_string()), b"ignored"), "Kept");
    }

    #[test]
    fn garbage_is_not_a_face() {
        assert_eq!(read_face_names(b"not a font", 0), None);
    }

    #[test]
    fn memory_faces_have_no_path() {
        let data: std::sync::Arc<dyn AsRef<[u8]> + Send + Sync> = std::sync::Arc::new(vec![0u8; 4]);
        assert_eq!(face_path(&Source::Binary(data)), None);
        assert_eq!(
            face_path(&Source::File(PathBuf::from("/f/a.ttf"))),
            Some(PathBuf::from("/f/a.ttf"))
        );
    }

    #[test]
    fn directory_checks() {
        let missing = Path::new("/definitely/not/a/font/dir");
        assert!(matches!(
            contains_font_files(missing),
            Err(CoreError::NotADirectory(_))
        ));
    }

    #[test]
    fn empty_directory_has_no_fonts() {
        let dir = std::env::temp_dir().join(format!("fontmerge-empty-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        assert!(!contains_font_files(&dir).unwrap());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
