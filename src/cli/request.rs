use crate::alphabet::Language;
use crate::cipher::{Intent, LevelRequest, ShiftRequest, TransformationContext};
use crate::cli::prompt::Prompter;
use crate::error::{CaesarError, Result};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where the text to transform comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Text(String),
    File(PathBuf),
}

/// What the command line supplied. Missing pieces are asked for or defaulted
/// by [`complete_request`].
#[derive(Debug, Clone, Default)]
pub struct Request {
    pub intent: Option<Intent>,
    pub language: Option<Language>,
    pub source: Option<Source>,
    /// Raw level value, checked once the language is known
    pub level: Option<String>,
}

/// A fully resolved transformation
#[derive(Debug, Clone)]
pub struct Job {
    pub context: TransformationContext,
    pub shift: ShiftRequest,
    pub source: Source,
}

/// Fill the gaps of `request`.
///
/// In interactive mode every missing piece is asked for. Otherwise only the
/// intent and the source are asked for; the language defaults to English and a
/// missing level means a bulk run.
pub fn complete_request<R: BufRead, W: Write>(
    request: Request,
    prompter: &mut Prompter<R, W>,
    interactive: bool,
) -> Result<Job> {
    let intent = match request.intent {
        Some(intent) => intent,
        None => prompter.ask_intent()?,
    };

    let language = match request.language {
        Some(language) => language,
        None if interactive => prompter.ask_language()?,
        None => Language::default(),
    };
    let context = TransformationContext::new(language);

    let source = match request.source {
        Some(source) => source,
        None => prompter.ask_source()?,
    };

    let level = match request.level {
        Some(value) => LevelRequest::Specific(context.parse_level(&value)?),
        None if interactive => prompter.ask_level(&context)?,
        None => LevelRequest::Bulk,
    };

    debug!(?intent, language = language.code(), ?level, "request complete");

    Ok(Job {
        context,
        shift: ShiftRequest { intent, level },
        source,
    })
}

/// Reject paths that do not exist or are not regular files
pub fn check_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(CaesarError::NoSuchFile(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(CaesarError::NotARegularFile(path.to_path_buf()));
    }
    Ok(())
}

/// Text to transform, reading the whole file for file sources
pub fn load_source(source: &Source) -> Result<String> {
    match source {
        Source::Text(text) => Ok(text.clone()),
        Source::File(path) => {
            check_path(path)?;
            let bytes = std::fs::read(path)?;
            info!(path = %path.display(), bytes = bytes.len(), "loaded input file");
            String::from_utf8(bytes).map_err(|_| CaesarError::InvalidEncoding(path.clone()))
        }
    }
}
