use crate::alphabet::Language;
use crate::cipher::{run_request, Intent, LevelOutput, LevelRequest};
use crate::cli::request::{load_source, Job};
use crate::error::{CaesarError, Result};
use serde::{Deserialize, Serialize};

const RULE_WIDTH: usize = 70;

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = CaesarError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(CaesarError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Machine readable result of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub language: Language,
    pub intent: Intent,
    pub outputs: Vec<LevelOutput>,
}

/// Load the job's source, transform it and render the result
pub fn execute(job: &Job, format: OutputFormat) -> Result<String> {
    let input = load_source(&job.source)?;
    let outputs = run_request(&input, &job.context, job.shift);

    match format {
        OutputFormat::Text => Ok(render_text(&outputs, job.shift.level)),
        OutputFormat::Json => {
            let report = Report {
                language: job.context.language(),
                intent: job.shift.intent,
                outputs: outputs
                    .into_iter()
                    .map(|o| LevelOutput {
                        level: o.level,
                        text: o.text.strip_suffix('\n').unwrap_or(&o.text).to_string(),
                    })
                    .collect(),
            };
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Plain text: the bare line for a specific level, a framed section per
/// level for bulk runs
pub fn render_text(outputs: &[LevelOutput], level: LevelRequest) -> String {
    match level {
        LevelRequest::Specific(_) => outputs.iter().map(|o| o.text.as_str()).collect(),
        LevelRequest::Bulk => {
            let mut output = String::new();
            for o in outputs {
                output.push_str(&format!("[+]--- Level: {} ---\n", o.level));
                output.push_str("[+] \n");
                output.push_str(&o.text);
                output.push_str(&format!("[+]{}\n", "-".repeat(RULE_WIDTH)));
                output.push_str("[+] \n");
            }
            output
        }
    }
}
