//! Installed font catalog and used-font matching
//!
//! Font names in subtitles rarely match installed metadata byte for byte:
//! authors write `Comic Sans MS`, `comic sans ms` or `ComicSansMS` for the
//! same face. Matching therefore compares normalized identifiers (uppercase,
//! whitespace removed) against the full name and the family of every
//! installed face.
//!
//! # Example
//!
//! ```rust
//! use fontmerge_core::analysis::UsedFontSet;
//! use fontmerge_core::fonts::{FontCatalog, InstalledFont};
//!
//! let mut catalog = FontCatalog::new();
//! catalog.push(InstalledFont::new("/fonts/verdana.ttf", Some("Verdana"), Some("Verdana")));
//!
//! let used: UsedFontSet = ["verdana", "Missing Sans"].into_iter().collect();
//! let resolution = catalog.resolve(&used);
//! assert_eq!(resolution.paths.len(), 1);
//! assert_eq!(resolution.missing, ["Missing Sans"]);
//! ```

mod system;

pub use system::{contains_font_files, is_font_file, FONT_EXTENSIONS};

use crate::{analysis::UsedFontSet, utils::create_hash_set_with_capacity};
use std::path::{Path, PathBuf};

/// Normalize a font identifier for matching: uppercase, whitespace removed
///
/// # Example
///
/// ```rust
/// use fontmerge_core::fonts::normalize_font_name;
///
/// assert_eq!(normalize_font_name("Comic Sans MS"), "COMICSANSMS");
/// ```
#[must_use]
pub fn normalize_font_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// One face of an installed font file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledFont {
    /// Font file on disk
    pub path: PathBuf,
    /// Face index inside a collection file (0 for single-face files)
    pub index: u32,
    /// Name table full name (ID 4)
    pub full_name: Option<String>,
    /// Name table family (ID 1)
    pub family: Option<String>,
}

impl InstalledFont {
    /// Create entry for the first face of a font file
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, full_name: Option<&str>, family: Option<&str>) -> Self {
        Self {
            path: path.into(),
            index: 0,
            full_name: full_name.map(ToOwned::to_owned),
            family: family.map(ToOwned::to_owned),
        }
    }

    /// Normalized full name and family, skipping absent or blank ones
    fn match_keys(&self) -> [Option<String>; 2] {
        let key = |name: &Option<String>| {
            name.as_deref()
                .map(normalize_font_name)
                .filter(|key| !key.is_empty())
        };
        [key(&self.full_name), key(&self.family)]
    }
}

/// Outcome of matching used fonts against a catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontResolution {
    /// Font files to attach, without duplicates, in catalog order
    pub paths: Vec<PathBuf>,
    /// Used fonts no installed face provides, in first-use order
    pub missing: Vec<String>,
}

impl FontResolution {
    /// Whether every used font was found
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Installed font faces in load order
#[derive(Debug, Clone, Default)]
pub struct FontCatalog {
    /// Known faces
    fonts: Vec<InstalledFont>,
}

impl FontCatalog {
    /// Create empty catalog
    #[must_use]
    pub const fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Append a face
    pub fn push(&mut self, font: InstalledFont) {
        self.fonts.push(font);
    }

    /// Known faces in load order
    #[must_use]
    pub fn fonts(&self) -> &[InstalledFont] {
        &self.fonts
    }

    /// Number of known faces
    #[must_use]
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// Whether the catalog knows no face
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Match used fonts against the catalog
    ///
    /// Faces are visited in load order. A face whose normalized full name or
    /// family is still wanted contributes its file, unless that file was
    /// already chosen, and satisfies one wanted identifier (the full name
    /// when both are wanted). Identifiers left over are reported missing.
    #[must_use]
    pub fn resolve(&self, used: &UsedFontSet<'_>) -> FontResolution {
        let mut wanted: Vec<(String, &str)> = Vec::with_capacity(used.len());
        for &font in used {
            let key = normalize_font_name(font);
            if !wanted.iter().any(|(existing, _)| *existing == key) {
                wanted.push((key, font));
            }
        }

        let mut chosen = create_hash_set_with_capacity::<&Path>(wanted.len());
        let mut paths = Vec::new();

        for font in &self.fonts {
            if wanted.is_empty() {
                break;
            }
            if chosen.contains(font.path.as_path()) {
                continue;
            }

            let satisfied = font
                .match_keys()
                .iter()
                .flatten()
                .find_map(|key| wanted.iter().position(|(wanted_key, _)| wanted_key == key));

            if let Some(position) = satisfied {
                let (_, name) = wanted.remove(position);
                log::debug!("{name} provided by {}", font.path.display());
                chosen.insert(font.path.as_path());
                paths.push(font.path.clone());
            }
        }

        FontResolution {
            paths,
            missing: wanted.into_iter().map(|(_, name)| name.to_owned()).collect(),
        }
    }
}

impl Extend<InstalledFont> for FontCatalog {
    fn extend<I: IntoIterator<Item = InstalledFont>>(&mut self, fonts: I) {
        self.fonts.extend(fonts);
    }
}

impl FromIterator<InstalledFont> for FontCatalog {
    fn from_iter<I: IntoIterator<Item = InstalledFont>>(fonts: I) -> Self {
        Self {
            fonts: fonts.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn font(path: &str, full_name: &str, family: &str) -> InstalledFont {
        InstalledFont::new(path, Some(full_name), Some(family))
    }

    fn used<'a>(fonts: &[&'a str]) -> UsedFontSet<'a> {
        fonts.iter().copied().collect()
    }

    #[test]
    fn normalization() {
        assert_eq!(normalize_font_name(" Arial  Black\t"), "ARIALBLACK");
        assert_eq!(normalize_font_name("ComicSansMS"), "COMICSANSMS");
        assert_eq!(normalize_font_name(""), "");
    }

    #[test]
    fn matches_full_name_or_family() {
        let catalog: FontCatalog = [
            font("/f/arialbd.ttf", "Arial Bold", "Arial"),
            font("/f/georgia.ttf", "Georgia", "Georgia"),
            font("/f/impact.ttf", "Impact", "Impact"),
        ]
        .into_iter()
        .collect();

        let resolution = catalog.resolve(&used(&["arial", "Georgia"]));
        assert_eq!(
            resolution.paths,
            [PathBuf::from("/f/arialbd.ttf"), PathBuf::from("/f/georgia.ttf")]
        );
        assert!(resolution.is_complete());
    }

    #[test]
    fn one_face_satisfies_one_identifier_preferring_full_name() {
        let catalog: FontCatalog = [
            font("/f/arialbd.ttf", "Arial Bold", "Arial"),
            font("/f/arial.ttf", "Arial", "Arial"),
        ]
        .into_iter()
        .collect();

        let resolution = catalog.resolve(&used(&["Arial", "Arial Bold"]));
        assert_eq!(
            resolution.paths,
            [PathBuf::from("/f/arialbd.ttf"), PathBuf::from("/f/arial.ttf")]
        );
        assert!(resolution.missing.is_empty());
    }

    #[test]
    fn same_file_is_chosen_once() {
        let catalog: FontCatalog = [
            InstalledFont {
                index: 0,
                ..font("/f/msgothic.ttc", "MS Gothic", "MS Gothic")
            },
            InstalledFont {
                index: 1,
                ..font("/f/msgothic.ttc", "MS PGothic", "MS PGothic")
            },
        ]
        .into_iter()
        .collect();

        let resolution = catalog.resolve(&used(&["MS Gothic", "MS PGothic"]));
        assert_eq!(resolution.paths, [PathBuf::from("/f/msgothic.ttc")]);
        assert_eq!(resolution.missing, ["MS PGothic"]);
    }

    #[test]
    fn missing_fonts_keep_first_use_order() {
        let catalog: FontCatalog = [font("/f/impact.ttf", "Impact", "Impact")]
            .into_iter()
            .collect();
        let resolution = catalog.resolve(&used(&["Zeta", "Impact", "Alpha", "ZETA"]));
        assert_eq!(resolution.missing, ["Zeta", "Alpha"]);
        assert!(!resolution.is_complete());
    }

    #[test]
    fn faces_without_names_never_match() {
        let mut catalog = FontCatalog::new();
        catalog.push(InstalledFont::new("/f/broken.ttf", None, Some("  ")));
        let resolution = catalog.resolve(&used(&["Arial"]));
        assert!(resolution.paths.is_empty());
        assert_eq!(catalog.len(), 1);
    }
}
