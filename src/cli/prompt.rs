use crate::alphabet::Language;
use crate::cipher::{Intent, LevelRequest, TransformationContext};
use crate::cli::request::{check_path, Source};
use crate::error::{CaesarError, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

/// Question/answer dialogue over any line reader and writer.
///
/// Every question is repeated until the answer is acceptable. Running out of
/// input while a question is pending is an error.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Encrypt or decrypt
    pub fn ask_intent(&mut self) -> Result<Intent> {
        let answer = self.choose("Do you want encrypt or decrypt?: [e/d]", ['e', 'd'])?;
        Ok(if answer == 'e' { Intent::Encrypt } else { Intent::Decrypt })
    }

    /// English unless a specific alphabet is wanted
    pub fn ask_language(&mut self) -> Result<Language> {
        let specific = self.choose(
            "Do you want specific characters?: [y/n]. English characters are used otherwise.",
            ['y', 'n'],
        )?;
        if specific == 'n' {
            return Ok(Language::English);
        }

        loop {
            self.say("Type the characters you want to use: (en=ENGLISH/sp=SPANISH):")?;
            let answer = self.read_line()?;
            match answer.parse::<Language>() {
                Ok(language) => return Ok(language),
                Err(e) => self.reject(&e)?,
            }
        }
    }

    /// A text string, or the path of a regular file
    pub fn ask_source(&mut self) -> Result<Source> {
        let kind = self.choose("Is it a file or a string?: [f/s]", ['f', 's'])?;
        if kind == 's' {
            self.say("Write the value of the string:")?;
            return Ok(Source::Text(self.read_line()?));
        }

        loop {
            self.say("Write the path (including regular file):")?;
            let path = PathBuf::from(self.read_line()?);
            match check_path(&path) {
                Ok(()) => return Ok(Source::File(path)),
                Err(e @ (CaesarError::NoSuchFile(_) | CaesarError::NotARegularFile(_))) => {
                    self.reject(&e)?
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// A specific level, or bulk
    pub fn ask_level(&mut self, ctx: &TransformationContext) -> Result<LevelRequest> {
        let specific = self.choose("Do you want a specific level?: [y/n]", ['y', 'n'])?;
        if specific == 'n' {
            return Ok(LevelRequest::Bulk);
        }

        loop {
            self.say(&format!(
                "Write the level: [MIN: {} - MAX: {}]",
                ctx.min_level(),
                ctx.max_level()
            ))?;
            let answer = self.read_line()?;
            match ctx.parse_level(&answer) {
                Ok(level) => return Ok(LevelRequest::Specific(level)),
                Err(e) => self.reject(&e)?,
            }
        }
    }

    /// Ask until the first letter of the answer is one of `options`
    fn choose(&mut self, question: &str, options: [char; 2]) -> Result<char> {
        loop {
            self.say(question)?;
            let answer = self.read_line()?;
            let choice = answer.trim().chars().next().map(|c| c.to_ascii_lowercase());
            match choice {
                Some(c) if options.contains(&c) => return Ok(c),
                _ => debug!(answer = %answer, "rejected answer"),
            }
        }
    }

    fn reject(&mut self, reason: &CaesarError) -> Result<()> {
        debug!(%reason, "rejected answer");
        self.say(&reason.to_string())?;
        self.say("")
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "[+] {}", line)?;
        self.output.flush()?;
        Ok(())
    }

    /// One line without its terminator
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CaesarError::PromptClosed);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}
