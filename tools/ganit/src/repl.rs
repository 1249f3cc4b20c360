//! Interactive keypad REPL
//!
//! Each input line is a list of keys fed to [`Keypad::press`]. Words that are
//! not keys themselves are split into keys (`12×(3+4)` → `1 2 × ( 3 + 4 )`).
//! Lines starting with `:` are meta commands.

use anyhow::{Context, Result};
use std::path::Path;
use colored::*;
use ganit_session::{
    localize, CalcState, GanitConfig, Keypad, Language, Tab, CALCULATOR_KEYS, CONVERTER_KEYS,
};
use ganit_units::{Category, Unit};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Editor, Helper};
use tracing::info;

use crate::commands::category_label;

const META_COMMANDS: &[&str] = &[
    ":history",
    ":load",
    ":clear-history",
    ":tab",
    ":category",
    ":units",
    ":swap",
    ":lang",
    ":save-config",
    ":help",
    ":quit",
];

/// ASCII spellings accepted in addition to the keypad glyphs
const KEY_ALIASES: &[(&str, &str)] = &[
    ("*", "×"),
    ("**", "xʸ"),
    ("/", "÷"),
    ("pi", "π"),
    ("sqrt(", "√("),
    // The √ key opens its own parenthesis
    ("√(", "√"),
];

// ============================================================================
// Tab Completion Helper
// ============================================================================

/// REPL helper providing Tab completion for keys and meta commands
struct KeypadHelper;

impl Helper for KeypadHelper {}

impl Hinter for KeypadHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for KeypadHelper {}

impl Validator for KeypadHelper {}

impl Completer for KeypadHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        let word_start = line.rfind(' ').map(|i| i + 1).unwrap_or(0);
        let word = &line[word_start..];

        let candidates: Vec<String> = if line.starts_with(':') {
            let command = line.split_whitespace().next().unwrap_or("");
            if word_start == 0 {
                META_COMMANDS.iter().map(|c| c.to_string()).collect()
            } else {
                match command {
                    ":tab" => vec!["calc".into(), "conv".into()],
                    ":category" => Category::ALL.iter().map(|c| c.to_string()).collect(),
                    ":units" => Unit::ALL.iter().map(|u| u.to_string()).collect(),
                    ":lang" => Language::ALL.iter().map(|l| l.to_string()).collect(),
                    _ => Vec::new(),
                }
            }
        } else {
            CALCULATOR_KEYS.iter().map(|k| k.to_string()).collect()
        };

        let matches = candidates
            .into_iter()
            .filter(|c| c.starts_with(word))
            .map(|c| Pair {
                display: c.clone(),
                replacement: c,
            })
            .collect();

        Ok((word_start, matches))
    }
}

/// Split one whitespace-separated word into keypad keys, longest key first
pub fn split_keys(word: &str) -> Vec<String> {
    let mut keys = Vec::new();
    let mut rest = word;

    while !rest.is_empty() {
        let known = CALCULATOR_KEYS
            .iter()
            .map(|k| (*k, *k))
            .chain(KEY_ALIASES.iter().copied())
            .filter(|(spelling, _)| rest.starts_with(spelling))
            .max_by_key(|(spelling, _)| spelling.len());

        match known {
            Some((spelling, key)) => {
                keys.push(key.to_string());
                rest = &rest[spelling.len()..];
            },
            None => {
                let len = rest.chars().next().map(char::len_utf8).unwrap_or(1);
                keys.push(rest[..len].to_string());
                rest = &rest[len..];
            },
        }
    }

    keys
}

/// Interactive REPL loop
pub fn run(config: &GanitConfig) -> Result<()> {
    let mut config = config.clone();
    let mut keypad = Keypad::new(&config);

    // Create editor with Tab completion helper
    let rl_config = rustyline::Config::builder()
        .completion_type(rustyline::CompletionType::List)
        .build();
    let mut rl = Editor::with_config(rl_config).context("Failed to initialize readline")?;
    rl.set_helper(Some(KeypadHelper));

    let labels = keypad.language().labels();
    println!(
        "{}",
        format!("Ganit {} / {}", labels.calculator, labels.converter)
            .bright_cyan()
            .bold()
    );
    println!(
        "Type '{}' for commands, {} for completion\n",
        ":help".bright_yellow(),
        "Tab".bright_cyan()
    );
    info!(language = %keypad.language(), "repl started");

    loop {
        let prompt = match keypad.tab() {
            Tab::Calculator => "calc> ",
            Tab::Converter => "conv> ",
        };

        match rl.readline(prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                // Add to history (ignore errors)
                let _ = rl.add_history_entry(line);

                if line.starts_with(':') {
                    match execute_meta_command(&mut keypad, &mut config, line) {
                        Ok(true) => {},
                        Ok(false) => break,
                        Err(e) => eprintln!("{} {}", "Error:".red(), e),
                    }
                } else {
                    for key in line.split_whitespace().flat_map(split_keys) {
                        keypad.press(&key);
                    }
                    print_display(&keypad);
                }
            },
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C - ignore and continue
                println!("^C");
                continue;
            },
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                break;
            },
            Err(e) => {
                eprintln!("{} {}", "Readline error:".red(), e);
                break;
            },
        }
    }

    println!("Bye!");
    Ok(())
}

/// Execute a meta command
/// Returns Ok(true) to continue, Ok(false) to quit
fn execute_meta_command(keypad: &mut Keypad, config: &mut GanitConfig, input: &str) -> Result<bool> {
    let parts: Vec<&str> = input.split_whitespace().collect();

    match parts.as_slice() {
        [":history"] => print_history(keypad),
        [":load", index] => {
            let index: usize = index.parse().context("Usage: :load <n>")?;
            keypad.set_tab(Tab::Calculator);
            keypad.calculator_mut().load_history_index(index)?;
            print_display(keypad);
        },
        [":clear-history"] => {
            keypad.calculator_mut().clear_history();
            println!("{}", "History cleared".bright_green());
        },
        [":tab", tab] => {
            keypad.set_tab(tab.parse()?);
            print_display(keypad);
        },
        [":category", category] => {
            keypad.converter_mut().set_category(category.parse()?);
            keypad.set_tab(Tab::Converter);
            print_display(keypad);
        },
        [":units", from, to] => {
            keypad
                .converter_mut()
                .set_units(from.parse()?, to.parse()?)?;
            keypad.set_tab(Tab::Converter);
            print_display(keypad);
        },
        [":swap"] => {
            keypad.converter_mut().swap_units();
            print_display(keypad);
        },
        [":lang", code] => {
            let language: Language = code.parse()?;
            keypad.set_language(language);
            println!("{}", language.native_name().bright_green());
        },
        [":save-config", path] => {
            save_settings(keypad, config, Path::new(path))?;
            println!("{} {}", "Saved".bright_green(), path);
        },
        [":help"] => print_help(),
        [":quit"] | [":q"] | [":exit"] => return Ok(false),
        _ => {
            println!(
                "Unknown command '{}'. Type '{}' for available commands.",
                input.red(),
                ":help".bright_yellow()
            );
        },
    }

    Ok(true)
}

/// Write the startup settings, with the session's language and converter
/// category, to a `.toml`, `.yaml` or `.json` file
fn save_settings(keypad: &Keypad, config: &mut GanitConfig, path: &Path) -> Result<()> {
    config.language = keypad.language();
    config.default_category = keypad.converter().category();
    ganit_common::save_config_to_file(config, path)
        .with_context(|| format!("Failed to save config to {}", path.display()))?;
    info!(path = %path.display(), "configuration saved");
    Ok(())
}

fn print_display(keypad: &Keypad) {
    let lang = keypad.language();

    match keypad.tab() {
        Tab::Calculator => {
            let calc = keypad.calculator();
            println!("  {}", localize(calc.expression(), lang));
            match calc.state() {
                CalcState::Idle if !calc.preview().is_empty() => {
                    println!("  {}", localize(calc.preview(), lang).dimmed());
                },
                CalcState::ShowingResult => {
                    println!("  = {}", localize(calc.result(), lang).bright_green().bold());
                },
                CalcState::ShowingError => println!("  {}", calc.result().red().bold()),
                CalcState::Idle => {},
            }
        },
        Tab::Converter => {
            let conv = keypad.converter();
            let input = if conv.input().is_empty() {
                "0"
            } else {
                conv.input()
            };
            println!(
                "  [{}] {} {} = {} {}",
                category_label(conv.category(), lang.labels()).bright_yellow(),
                localize(input, lang),
                conv.unit_from().to_string().bright_cyan(),
                localize(&conv.result(), lang).bright_green().bold(),
                conv.unit_to().to_string().bright_cyan()
            );
        },
    }
}

fn print_history(keypad: &Keypad) {
    let lang = keypad.language();
    let history = keypad.calculator().history();

    println!("{}", format!("=== {} ===", lang.labels().history).bright_cyan());
    if history.is_empty() {
        println!("  (empty)");
        return;
    }
    for (index, entry) in history.iter().enumerate() {
        println!(
            "  {:>3}  {} = {}  {}",
            index,
            localize(&entry.expression, lang),
            localize(&entry.result, lang).bright_green(),
            entry.timestamp.format("%H:%M:%S").to_string().dimmed()
        );
    }
}

/// Print help message
fn print_help() {
    println!("{}", "=== Keys ===".bright_cyan());
    println!();
    println!("  {}", CALCULATOR_KEYS.join(" "));
    println!("  Keys may be typed together: 12×(3+4) =");
    println!("  ASCII * ** / pi sqrt( are accepted for × ^ ÷ π √(");
    println!("  Converter tab: {}", CONVERTER_KEYS.join(" "));
    println!();
    println!("{}", "=== Commands ===".bright_cyan());
    println!();
    println!("  {}              Show calculation history", ":history".bright_yellow());
    println!("  {}             Load history entry n into the calculator", ":load <n>".bright_yellow());
    println!("  {}        Empty the history", ":clear-history".bright_yellow());
    println!("  {}     Switch tab", ":tab calc|conv".bright_yellow());
    println!("  {}         Select converter category", ":category <c>".bright_yellow());
    println!("  {}    Select converter units", ":units <from> <to>".bright_yellow());
    println!("  {}                 Swap converter units", ":swap".bright_yellow());
    println!("  {}          Display language", ":lang <code>".bright_yellow());
    println!("  {}  Save current settings (.toml/.yaml/.json)", ":save-config <path>".bright_yellow());
    println!("  {}                 Exit", ":quit".bright_yellow());
    println!();
}
