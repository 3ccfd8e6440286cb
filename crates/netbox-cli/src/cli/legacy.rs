//! `<verb><Resource>[ById]` command names.
//!
//! Older scripts call `getSites`, `getSiteById`, `createSite`, `updateSite`
//! or `deleteSite`. These are rewritten into `list sites`, `get sites`,
//! `create sites`, ... before clap sees the arguments.

use std::ffi::OsString;

use crate::resources::{Resource, RESOURCES};

const VERBS: [&str; 4] = ["get", "create", "update", "delete"];

/// Translate one legacy command name into `(subcommand, resource slug)`.
pub fn translate(name: &str) -> Option<(&'static str, &'static str)> {
    let (verb, rest) = VERBS
        .iter()
        .find_map(|verb| name.strip_prefix(*verb).map(|rest| (*verb, rest)))?;

    if !rest.starts_with(|c: char| c.is_ascii_uppercase()) {
        return None;
    }

    let (rest, by_id) = rest
        .strip_suffix("ById")
        .map_or((rest, false), |stripped| (stripped, true));

    let wanted = rest.to_ascii_lowercase();
    let is_named = |r: &Resource, plural: bool| {
        let name = if plural { r.pascal_plural() } else { r.pascal_singular() };
        name.to_ascii_lowercase() == wanted
    };

    let (resource, plural) = RESOURCES.iter().find_map(|r| {
        if is_named(r, true) {
            Some((r, true))
        } else if is_named(r, false) {
            Some((r, false))
        } else {
            None
        }
    })?;

    let command = match (verb, by_id, plural) {
        ("get", false, true) => "list",
        ("get", true, _) => "get",
        ("create", false, _) => "create",
        ("update", _, _) => "update",
        ("delete", _, _) => "delete",
        _ => return None,
    };

    Some((command, resource.slug))
}

/// Global options that consume the following argument as their value.
const VALUE_OPTIONS: [&str; 7] = ["-e", "--env", "-c", "--config", "--token", "-o", "--output"];

/// Rewrite the command name if it is a legacy one.
///
/// Only the first positional argument is considered: option values and
/// arguments of a modern subcommand are left alone.
pub fn expand<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    let mut index = 1;
    while let Some(arg) = args.get(index).and_then(|a| a.to_str()) {
        if arg == "--" {
            break;
        }
        if !arg.starts_with('-') {
            if let Some((command, slug)) = translate(arg) {
                args[index] = OsString::from(command);
                args.insert(index + 1, OsString::from(slug));
            }
            break;
        }
        index += if VALUE_OPTIONS.contains(&arg) { 2 } else { 1 };
    }

    args
}
