use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};

use wordshare::config::{ColorChoice, Config};
use wordshare::highlight::common_spans;
use wordshare::output::terminal;
use wordshare::stats::ComparisonStats;
use wordshare::{Comparator, StopWordList};

/// Wordshare: find the words two texts share and how similar they are.
///
/// Similarity is the multiset Jaccard score over non-stop-word tokens,
/// reported as a whole percentage.
#[derive(Parser)]
#[command(name = "wordshare", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two texts given inline, as files, or on stdin
    Compare {
        /// Inline texts, filling whichever sides have no --file1/--file2
        texts: Vec<String>,

        /// Read the first text from a file ("-" for stdin)
        #[arg(long)]
        file1: Option<PathBuf>,

        /// Read the second text from a file ("-" for stdin)
        #[arg(long)]
        file2: Option<PathBuf>,

        /// Print the result and stats as JSON
        #[arg(long)]
        json: bool,

        /// Use the extended English stop-word list
        #[arg(long)]
        extended: bool,

        /// Don't echo the texts with common words highlighted
        #[arg(long)]
        no_highlight: bool,
    },

    /// Check whether words are stop words
    StopWord {
        /// Words to check
        #[arg(required = true)]
        words: Vec<String>,

        /// Use the extended English stop-word list
        #[arg(long)]
        extended: bool,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wordshare=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    config.color.apply();

    match cli.command {
        Commands::Compare {
            texts,
            file1,
            file2,
            json,
            extended,
            no_highlight,
        } => {
            for setting in ignored_settings(&config, json) {
                warn!(setting, "Setting has no effect with --json");
            }

            let (text1, text2) = resolve_inputs(texts, file1.as_deref(), file2.as_deref())?;
            config.check_input_size("Text 1", &text1)?;
            config.check_input_size("Text 2", &text2)?;

            let comparator = Comparator::new(stop_word_list(&config, extended));
            debug!(
                stop_words = %comparator.stop_words(),
                bytes_1 = text1.len(),
                bytes_2 = text2.len(),
                "Comparing texts"
            );

            let result = comparator.compare(&text1, &text2);
            let stats = ComparisonStats::measure(&text1, &text2, &result);

            info!(
                similarity = result.similarity,
                common = result.count,
                "Comparison complete"
            );

            if json {
                let report = serde_json::json!({
                    "result": result,
                    "stats": stats,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }

            terminal::display_comparison(&result, &stats);
            if !no_highlight {
                terminal::display_highlighted("Text 1", &text1, &common_spans(&text1, &result));
                terminal::display_highlighted("Text 2", &text2, &common_spans(&text2, &result));
            }
        }

        Commands::StopWord { words, extended } => {
            let list = stop_word_list(&config, extended);
            let answers: Vec<(String, bool)> = words
                .into_iter()
                .map(|word| {
                    let is_stop = list.is_stop_word(&word);
                    (word, is_stop)
                })
                .collect();
            terminal::display_stop_words(list.as_str(), &answers);
        }
    }

    Ok(())
}

/// The --extended flag wins over WORDSHARE_STOP_WORDS.
fn stop_word_list(config: &Config, extended: bool) -> StopWordList {
    if extended {
        StopWordList::Extended
    } else {
        config.stop_words
    }
}

/// Settings from the environment that the chosen output mode ignores.
fn ignored_settings(config: &Config, json: bool) -> Vec<&'static str> {
    let mut ignored = Vec::new();
    if json && config.color != ColorChoice::Auto {
        ignored.push("WORDSHARE_COLOR");
    }
    ignored
}

/// Work out both texts from the positional arguments and file flags.
///
/// File flags claim their side first; positional texts fill the remaining
/// sides in order. Exactly two texts must result.
fn resolve_inputs(
    texts: Vec<String>,
    file1: Option<&Path>,
    file2: Option<&Path>,
) -> Result<(String, String)> {
    if file1.is_some_and(is_stdin) && file2.is_some_and(is_stdin) {
        anyhow::bail!("Only one side can be read from stdin");
    }

    let mut inline = texts.into_iter();
    let mut side = |file: Option<&Path>, label: &str| -> Result<String> {
        match file {
            Some(path) => read_input(path),
            None => inline.next().with_context(|| {
                format!("{label} missing: pass it inline or with --file1/--file2")
            }),
        }
    };

    let text1 = side(file1, "Text 1")?;
    let text2 = side(file2, "Text 2")?;

    let extra = inline.count();
    if extra > 0 {
        anyhow::bail!("Got {extra} more inline text(s) than there are sides to compare");
    }

    Ok((text1, text2))
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_input(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read text from stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_color_ignored_only_for_json() {
        let config = Config {
            color: ColorChoice::Always,
            ..Config::default()
        };
        assert_eq!(ignored_settings(&config, true), vec!["WORDSHARE_COLOR"]);
        assert!(ignored_settings(&config, false).is_empty());
        assert!(ignored_settings(&Config::default(), true).is_empty());
    }

    #[test]
    fn test_resolve_inline_pair() {
        let (a, b) = resolve_inputs(strings(&["one", "two"]), None, None).unwrap();
        assert_eq!((a.as_str(), b.as_str()), ("one", "two"));
    }

    #[test]
    fn test_resolve_missing_side() {
        let err = resolve_inputs(strings(&["one"]), None, None).unwrap_err();
        assert!(err.to_string().contains("Text 2 missing"));
    }

    #[test]
    fn test_resolve_too_many() {
        assert!(resolve_inputs(strings(&["a", "b", "c"]), None, None).is_err());
    }

    #[test]
    fn test_resolve_file_claims_side() {
        let path = std::env::temp_dir().join(format!("wordshare-test-{}.txt", std::process::id()));
        fs::write(&path, "from file").unwrap();
        let (a, b) = resolve_inputs(strings(&["inline"]), None, Some(path.as_path())).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(a, "inline");
        assert_eq!(b, "from file");
    }

    #[test]
    fn test_resolve_unreadable_file() {
        let missing = Path::new("/nonexistent/wordshare/input.txt");
        let err = resolve_inputs(strings(&["inline"]), Some(missing), None).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_both_sides_stdin_rejected() {
        let dash = Path::new("-");
        assert!(resolve_inputs(Vec::new(), Some(dash), Some(dash)).is_err());
    }
}
