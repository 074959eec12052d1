use std::collections::{HashMap, HashSet};

use super::CliError;

const SWITCHES: &[&str] = &["yes"];

/// Positional arguments plus `--name value` options and bare `--switch` flags.
#[derive(Debug, Default)]
pub struct Flags {
    pub positional: Vec<String>,
    options: HashMap<String, String>,
    switches: HashSet<String>,
}

impl Flags {
    pub fn parse<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut flags = Flags::default();
        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            let Some(name) = arg.strip_prefix("--") else {
                flags.positional.push(arg);
                continue;
            };
            if let Some((key, value)) = name.split_once('=') {
                flags.options.insert(key.to_string(), value.to_string());
            } else if SWITCHES.contains(&name) {
                flags.switches.insert(name.to_string());
            } else {
                let value = iter
                    .next()
                    .ok_or_else(|| CliError::Usage(format!("missing value for --{name}")))?;
                flags.options.insert(name.to_string(), value);
            }
        }
        Ok(flags)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }

    pub fn has(&self, switch: &str) -> bool {
        self.switches.contains(switch)
    }

    /// Rejects options outside `allowed`, catching typos before anything is saved.
    pub fn expect_only(&self, allowed: &[&str]) -> Result<(), CliError> {
        match self.options.keys().find(|key| !allowed.contains(&key.as_str())) {
            Some(unknown) => Err(CliError::Usage(format!("unknown option --{unknown}"))),
            None => Ok(()),
        }
    }
}
