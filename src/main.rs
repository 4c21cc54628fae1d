// SPDX-License-Identifier: MPL-2.0
use iced_notifier::app::{self, Flags};
use iced_notifier::logging;
use std::fmt::Display;
use std::str::FromStr;

const HELP: &str = "\
iced_notifier

USAGE:
  iced_notifier [OPTIONS]

OPTIONS:
  --config-dir <DIR>     Directory holding settings.toml
  --theme <MODE>         light, dark or system
  --message <TEXT>       Notification shown at startup
  --category <TAG>       Category of the startup notification [default: success]
  --log-level <FILTER>   Tracing filter used when RUST_LOG is unset
  -h, --help             Print help
";

/// Option values that failed to parse, reported once logging is up.
#[derive(Debug, Default)]
struct Rejected(Vec<(&'static str, String)>);

impl Rejected {
    /// Reads an optional value, recording a parse failure instead of dropping it.
    fn opt_value<T>(&mut self, args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        match args.opt_value_from_str(key) {
            Ok(value) => value,
            Err(err) => {
                self.0.push((key, err.to_string()));
                None
            }
        }
    }

    fn report(&self) {
        for (flag, error) in &self.0 {
            tracing::warn!(flag, error = %error, "ignoring malformed option");
        }
    }
}

fn parse_flags(args: &mut pico_args::Arguments, rejected: &mut Rejected) -> Flags {
    Flags {
        config_dir: rejected.opt_value(args, "--config-dir"),
        theme: rejected.opt_value(args, "--theme"),
        message: rejected.opt_value(args, "--message"),
        category: rejected.opt_value(args, "--category"),
    }
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let mut rejected = Rejected::default();
    let log_level: Option<String> = rejected.opt_value(&mut args, "--log-level");
    logging::init(log_level.as_deref());

    let flags = parse_flags(&mut args, &mut rejected);
    rejected.report();

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    app::run(flags)
}
