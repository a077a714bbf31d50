//! mkvmerge invocation that remuxes a video with font attachments

use anyhow::{bail, Context, Result};
use std::{
    ffi::{OsStr, OsString},
    fmt,
    path::{Path, PathBuf},
    process::Command,
};

const TRUETYPE_MIME: &str = "application/x-truetype-font";
const OPENTYPE_MIME: &str = "application/vnd.ms-opentype";

/// MIME type announced for an attached font file
pub fn mime_type(font: &Path) -> &'static str {
    let is_otf = font
        .extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("otf"));
    if is_otf {
        OPENTYPE_MIME
    } else {
        TRUETYPE_MIME
    }
}

/// Default output name: `<stem>.fontmerge.mkv` in the current directory
pub fn default_output(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_else(|| OsStr::new("output"));
    let mut name = stem.to_os_string();
    name.push(".fontmerge.mkv");
    PathBuf::from(name)
}

/// One mkvmerge run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeCommand {
    program: PathBuf,
    input: PathBuf,
    output: PathBuf,
    attachments: Vec<PathBuf>,
}

impl MergeCommand {
    pub fn new(program: PathBuf, input: PathBuf, output: PathBuf) -> Self {
        Self {
            program,
            input,
            output,
            attachments: Vec::new(),
        }
    }

    /// Attach a font file
    pub fn attach(&mut self, font: PathBuf) {
        self.attachments.push(font);
    }

    pub fn attachments(&self) -> &[PathBuf] {
        &self.attachments
    }

    /// Arguments after the program name
    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-q".into(),
            "-o".into(),
            self.output.clone().into(),
            self.input.clone().into(),
        ];
        for font in &self.attachments {
            let name = font.file_name().unwrap_or(font.as_os_str());
            args.push("--attachment-name".into());
            args.push(name.to_os_string());
            args.push("--attachment-mime-type".into());
            args.push(mime_type(font).into());
            args.push("--attach-file".into());
            args.push(font.clone().into());
        }
        args
    }

    /// Run mkvmerge and wait for it
    ///
    /// # Errors
    ///
    /// Fails when the program cannot be started or exits unsuccessfully.
    pub fn run(&self) -> Result<()> {
        log::debug!("running {self}");
        let status = Command::new(&self.program)
            .args(self.args())
            .status()
            .with_context(|| format!("failed to start {}", self.program.display()))?;
        if !status.success() {
            bail!("mkvmerge failed with {status}");
        }
        Ok(())
    }
}

impl fmt::Display for MergeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(self.program.as_os_str()))?;
        for arg in self.args() {
            write!(f, " {}", quote(&arg))?;
        }
        Ok(())
    }
}

/// Shell-style quoting for display
fn quote(arg: &OsStr) -> String {
    let text = arg.to_string_lossy();
    let plain = !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | '+' | ':'));
    if plain {
        text.into_owned()
    } else {
        format!("'{}'", text.replace('\'', r"'\''"))
    }
}
