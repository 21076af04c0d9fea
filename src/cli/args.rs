//! Short-flag clusters such as `-eksl sp word 5`.
//!
//! Every value-taking flag of a cluster (`-s`, `-f`, `-k`, `-l`) is queued and
//! receives the next free argument, in the order the flags were written. The
//! result is the same command line spelled out flag by flag
//! (`-e -k sp -s word -l 5`), ready for clap.

use std::collections::VecDeque;
use std::ffi::{OsStr, OsString};

/// Flags that take no value
const SWITCHES: [char; 7] = ['h', 'i', 'w', 'c', 'e', 'd', 'V'];

/// Flags whose value is a separate argument
const VALUE_FLAGS: [char; 4] = ['s', 'f', 'k', 'l'];

/// One parsed command line element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    Switch(char),
    Value(char, OsString),
    /// Anything clap should see untouched (long options and their values)
    Raw(OsString),
}

/// Letters of `-xyz` when every one is a known short flag
fn cluster_letters(arg: &OsStr) -> Option<Vec<char>> {
    let text = arg.to_str()?;
    let letters = text.strip_prefix('-')?;
    if letters.is_empty() || letters.starts_with('-') {
        return None;
    }
    let known = letters
        .chars()
        .all(|c| SWITCHES.contains(&c) || VALUE_FLAGS.contains(&c));
    known.then(|| letters.chars().collect())
}

/// Pair every queued value flag with the next argument that is not itself a
/// flag cluster. Value flags left without an argument are kept bare so clap
/// reports the missing value.
pub fn parse_args<I, T>(args: I) -> Vec<Arg>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut parsed = Vec::new();
    let mut pending: VecDeque<char> = VecDeque::new();

    for arg in args.into_iter().map(Into::into) {
        if let Some(letters) = cluster_letters(&arg) {
            for c in letters {
                if VALUE_FLAGS.contains(&c) {
                    pending.push_back(c);
                } else {
                    parsed.push(Arg::Switch(c));
                }
            }
        } else if let Some(flag) = pending.pop_front() {
            parsed.push(Arg::Value(flag, arg));
        } else {
            parsed.push(Arg::Raw(arg));
        }
    }

    parsed.extend(pending.into_iter().map(Arg::Switch));
    parsed
}

/// Rewrite a full command line (program name first) with clusters spelled
/// out flag by flag
pub fn expand_clusters<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut expanded: Vec<OsString> = args.next().into_iter().collect();

    for arg in parse_args(args) {
        match arg {
            Arg::Switch(c) => expanded.push(format!("-{}", c).into()),
            Arg::Value(c, value) => {
                expanded.push(format!("-{}", c).into());
                expanded.push(value);
            }
            Arg::Raw(raw) => expanded.push(raw),
        }
    }

    expanded
}
