// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Completable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Completable CLI entrypoint.
//!
//! Runs the interactive dictionary completion TUI over a word list file, or over the built-in
//! demo word list when no file is given.

use std::error::Error;
use std::path::PathBuf;

use completable::model::{Setting, Settings};
use completable::tui::DictionarySource;
use completable::ui::Theme;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<dictionary>] [--borders-disabled]\n  {program} [--dictionary <file>] [--borders-disabled]\n  {program} --demo [--borders-disabled]\n\nA dictionary is either a `.json` thesaurus or a plain word list, one word per line.\nWithout a dictionary the built-in demo word list is used; --demo cannot be combined with one.\n\nEnvironment:\n  COMPLETABLE_PALETTE   fg,bg,accent colors as #RRGGBB\n  COMPLETABLE_LOG       log filter (default `info`)\n  COMPLETABLE_LOG_FILE  file receiving the log; no logging without it"
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    dictionary: Option<String>,
    borders_disabled: bool,
}

impl CliOptions {
    fn source(&self) -> DictionarySource {
        match &self.dictionary {
            Some(path) => DictionarySource::File(PathBuf::from(path)),
            None => DictionarySource::Demo,
        }
    }

    fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        if self.borders_disabled {
            settings.set(Setting::Borders, false);
        }
        settings
    }
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--dictionary" => {
                if options.dictionary.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.dictionary = Some(path);
            }
            "--borders-disabled" => {
                if options.borders_disabled {
                    return Err(());
                }
                options.borders_disabled = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.dictionary.is_some() {
                    return Err(());
                }
                options.dictionary = Some(arg);
            }
        }
    }

    if options.demo && options.dictionary.is_some() {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "completable".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let log_file = completable::logging::init_from_env()?;
        tracing::info!(log_file = ?log_file, ?options, "starting");

        let theme = Theme::from_env()?;
        completable::tui::run(options.source(), options.settings(), theme)
    })();

    if let Err(err) = result {
        eprintln!("completable: {err}");
        std::process::exit(1);
    }
}
