//! Command-line options, parsed getopt style.
//!
//! Options take their value either attached (`-n500`) or as the next argument
//! (`-n 500`). Value-less flags may be clustered (`-lv`).

use std::path::PathBuf;

use crate::config::MAX_PARTICLE_COUNT;
use crate::error::{Error, Result};

pub const USAGE: &str = "\
Usage: coulomb_surface [-n count] [-s seed] [-c config.toml] [-l] [-v] [-h]

Options:
  -n <count>   Electrons on the surface (1 to 2000000000, default 1000)
  -s <seed>    Seed for the position generator (default 1)
  -c <path>    Load settings from a TOML file; -n and -s override it
  -l           One line per electron instead of a block
  -v           Debug logging on stderr
  -h           Show this help
";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Args {
    pub count: Option<usize>,
    pub seed: Option<u64>,
    pub config_path: Option<PathBuf>,
    pub line_layout: bool,
    pub verbose: bool,
    pub help: bool,
}

pub fn parse<I>(args: I) -> Result<Args>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = Args::default();
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        let flags = match arg.strip_prefix('-') {
            Some(flags) if !flags.is_empty() => flags,
            _ => {
                return Err(Error::InvalidArgument(format!(
                    "Unexpected argument '{}'.",
                    arg
                )))
            }
        };

        for (idx, flag) in flags.char_indices() {
            match flag {
                'n' | 's' | 'c' => {
                    let attached = &flags[idx + flag.len_utf8()..];
                    let value = if attached.is_empty() {
                        iter.next().ok_or_else(|| {
                            Error::InvalidArgument(format!(
                                "Option '-{}' requires an argument.",
                                flag
                            ))
                        })?
                    } else {
                        attached.to_string()
                    };
                    match flag {
                        'n' => parsed.count = Some(parse_count(&value)?),
                        's' => parsed.seed = Some(parse_seed(&value)?),
                        _ => parsed.config_path = Some(PathBuf::from(value)),
                    }
                    break;
                }
                'l' => parsed.line_layout = true,
                'v' => parsed.verbose = true,
                'h' => parsed.help = true,
                other => {
                    return Err(Error::InvalidArgument(format!(
                        "Unknown option '-{}'.",
                        other
                    )))
                }
            }
        }
    }

    Ok(parsed)
}

/// Read an integer the way C `atoi` does: skip leading whitespace, take an
/// optional sign and as many digits as follow. Anything else reads as zero.
/// Saturates instead of wrapping.
pub fn atoi(text: &str) -> i64 {
    let s = text.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

pub fn parse_count(value: &str) -> Result<usize> {
    let n = atoi(value);
    if n == 0 {
        return Err(Error::InvalidCount(
            "Invalid value for option '-n'.".to_string(),
        ));
    }
    if n < 1 {
        return Err(Error::InvalidCount(
            "Value for option '-n' cannot be a negative number.".to_string(),
        ));
    }
    if n > MAX_PARTICLE_COUNT as i64 {
        return Err(Error::InvalidCount(format!(
            "Value for option '-n' cannot be more than {}.",
            MAX_PARTICLE_COUNT
        )));
    }
    Ok(n as usize)
}

fn parse_seed(value: &str) -> Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidArgument("Invalid value for option '-s'.".to_string()))
}
