//! Accepts the single-dash long flags (`-add`, `-file x.md`) the tools have
//! always taken, by rewriting them into the `--name` form clap parses.

use std::ffi::OsString;

use clap::Parser;

/// A flag the tool understands, as written after the dash.
#[derive(Debug, Clone, Copy)]
pub struct Flag {
    pub name: &'static str,
    pub takes_value: bool,
}

impl Flag {
    pub const fn switch(name: &'static str) -> Self {
        Self {
            name,
            takes_value: false,
        }
    }

    pub const fn value(name: &'static str) -> Self {
        Self {
            name,
            takes_value: true,
        }
    }
}

/// Rewrites known long flags to double-dash form.
///
/// Flag processing stops at the first positional argument or at `--`; what
/// follows is passed through untouched.
pub fn normalize<I, T>(args: I, flags: &[Flag]) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut out: Vec<OsString> = args.next().into_iter().collect();
    let mut expecting_value = false;

    while let Some(arg) = args.next() {
        if expecting_value {
            expecting_value = false;
            out.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            out.push(arg);
            out.extend(args.by_ref());
            break;
        };
        if text == "--" || !text.starts_with('-') || text == "-" {
            out.push(arg);
            out.extend(args.by_ref());
            break;
        }

        let bare = text.trim_start_matches('-');
        let (name, inline_value) = match bare.split_once('=') {
            Some((name, _)) => (name, true),
            None => (bare, false),
        };
        match flags.iter().find(|flag| flag.name == name) {
            Some(flag) => {
                expecting_value = flag.takes_value && !inline_value;
                if name.len() > 1 {
                    out.push(format!("--{bare}").into());
                } else {
                    out.push(arg);
                }
            }
            None => out.push(arg),
        }
    }

    out
}

/// Parses the process arguments. Usage errors exit with status 1; help
/// output exits with status 0.
pub fn parse_or_exit<P: Parser>(flags: &[Flag]) -> P {
    match P::try_parse_from(normalize(std::env::args_os(), flags)) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            if let Err(error) = err.print() {
                tracing::warn!(%error, "failed to print usage error");
            }
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const FLAGS: &[Flag] = &[
        Flag::switch("add"),
        Flag::value("complete"),
        Flag::switch("v"),
        Flag::value("t"),
    ];

    fn run(args: &[&str]) -> Vec<String> {
        normalize(args.iter().copied(), FLAGS)
            .into_iter()
            .map(|a| a.into_string().unwrap())
            .collect()
    }

    #[test]
    fn rewrites_single_dash_long_flags() {
        assert_eq!(run(&["todo", "-add", "x"]), ["todo", "--add", "x"]);
        assert_eq!(run(&["todo", "--add"]), ["todo", "--add"]);
        assert_eq!(run(&["todo", "-complete=3"]), ["todo", "--complete=3"]);
    }

    #[test]
    fn value_after_flag_is_not_rewritten() {
        assert_eq!(
            run(&["todo", "-complete", "-1", "-v"]),
            ["todo", "--complete", "-1", "-v"]
        );
        assert_eq!(run(&["mdp", "-t", "-add"]), ["mdp", "-t", "-add"]);
    }

    #[test]
    fn stops_at_first_positional() {
        assert_eq!(
            run(&["todo", "-add", "buy", "-add", "milk"]),
            ["todo", "--add", "buy", "-add", "milk"]
        );
    }

    #[test]
    fn stops_at_double_dash() {
        assert_eq!(
            run(&["todo", "-add", "--", "-add"]),
            ["todo", "--add", "--", "-add"]
        );
    }

    #[test]
    fn unknown_flags_pass_through() {
        assert_eq!(run(&["todo", "-bogus", "-v"]), ["todo", "-bogus", "-v"]);
    }
}
