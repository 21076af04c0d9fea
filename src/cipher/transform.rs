use crate::cipher::classify::{classify, CharClass};
use crate::cipher::context::TransformationContext;
use crate::cipher::utf8::char_at;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Direction of the transformation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Encrypt,
    Decrypt,
}

impl Intent {
    /// Signed shift for `level`: positive to encrypt, negative to decrypt
    pub fn effective_shift(self, level: u32) -> i64 {
        match self {
            Self::Encrypt => i64::from(level),
            Self::Decrypt => -i64::from(level),
        }
    }
}

/// A single level or every level of the alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelRequest {
    Specific(u32),
    Bulk,
}

/// Intent plus level selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftRequest {
    pub intent: Intent,
    pub level: LevelRequest,
}

/// Transformed text at one level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelOutput {
    pub level: u32,
    pub text: String,
}

/// Shift every letter of `input` by `level` places in the direction of
/// `intent`. Characters outside the alphabet are copied unchanged. The result
/// ends with a line break.
///
/// `level` must lie within the context's level range.
pub fn transform(input: &str, ctx: &TransformationContext, intent: Intent, level: u32) -> String {
    debug_assert!(
        level >= ctx.min_level() && level <= ctx.max_level(),
        "level {} outside {}..={}",
        level,
        ctx.min_level(),
        ctx.max_level()
    );

    let shift = intent.effective_shift(level);
    let mut output = String::with_capacity(input.len() + 1);
    let mut cursor = 0;

    while cursor < input.len() {
        let character = char_at(input, cursor);
        let classified = classify(character, ctx);

        // case is preserved: letters are shifted within the alphabet they matched
        match classified.class {
            CharClass::Uppercase(position) => {
                output.push_str(ctx.strategy().apply(ctx.uppercase(), position, shift))
            }
            CharClass::Lowercase(position) => {
                output.push_str(ctx.strategy().apply(ctx.lowercase(), position, shift))
            }
            CharClass::Other => output.push_str(character),
        }

        cursor += character.len();
    }

    output.push('\n');
    output
}

/// Run [`transform`] once per level from the minimum to the maximum, in
/// ascending order
pub fn transform_bulk(input: &str, ctx: &TransformationContext, intent: Intent) -> Vec<LevelOutput> {
    debug!(
        ?intent,
        levels = ctx.max_level(),
        bytes = input.len(),
        "bulk transformation"
    );

    (ctx.min_level()..=ctx.max_level())
        .map(|level| LevelOutput {
            level,
            text: transform(input, ctx, intent, level),
        })
        .collect()
}

/// Dispatch a shift request to a single or bulk run
pub fn run_request(input: &str, ctx: &TransformationContext, request: ShiftRequest) -> Vec<LevelOutput> {
    match request.level {
        LevelRequest::Specific(level) => {
            debug!(intent = ?request.intent, level, bytes = input.len(), "transformation");
            vec![LevelOutput {
                level,
                text: transform(input, ctx, request.intent, level),
            }]
        }
        LevelRequest::Bulk => transform_bulk(input, ctx, request.intent),
    }
}
