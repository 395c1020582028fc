mod download;
mod gutenberg;
mod io;

use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use trigram_core::{Framing, ModelConfig, PredictionInput, TrigramModel};

/// Train a word trigram model on a text and print generated samples.
#[derive(Debug, Parser)]
#[command(name = "trigram-exemple", version, about)]
#[command(group(ArgGroup::new("source").required(true).args(["corpus", "gutenberg_id"])))]
struct Cli {
    /// UTF-8 training corpus
    #[arg(short, long)]
    corpus: Option<PathBuf>,

    /// Download this Project Gutenberg book and train on it
    #[arg(short, long)]
    gutenberg_id: Option<u64>,

    /// Root of the Gutenberg file tree
    #[arg(long, hide = true, default_value = download::DEFAULT_BASE_URL)]
    gutenberg_url: String,

    /// Corpus used when the download fails
    #[arg(long, default_value = "data/example_corpus.txt")]
    fallback_corpus: PathBuf,

    /// Unknown threshold for the fallback corpus (small corpora need 0)
    #[arg(long, default_value_t = 0)]
    fallback_unk_threshold: usize,

    /// Strip Project Gutenberg header, footer and license text from --corpus
    #[arg(long)]
    gutenberg: bool,

    /// Words seen this many times or fewer become <unk>
    #[arg(short, long, default_value_t = trigram_core::config::DEFAULT_UNK_THRESHOLD)]
    unk_threshold: usize,

    /// Frame every sentence separately instead of the whole text
    #[arg(long)]
    sentences: bool,

    /// Maximum number of words per sample
    #[arg(short, long, default_value_t = trigram_core::model::prediction_input::DEFAULT_MAX_LENGTH)]
    max_length: usize,

    /// Number of samples to print
    #[arg(short = 'n', long, default_value_t = 3)]
    count: usize,

    /// Starting context, two words used as given
    #[arg(long, num_args = 2, value_names = ["W1", "W2"])]
    seed: Option<Vec<String>>,

    /// Seed the random generator for reproducible output
    #[arg(long)]
    rng_seed: Option<u64>,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

/// Returns the training text and the unknown threshold to train it with.
///
/// A failed download falls back to the local corpus and its own threshold;
/// an unreadable local file is an error.
fn load_corpus(cli: &Cli) -> Result<(String, usize), Box<dyn std::error::Error>> {
    if let Some(book_id) = cli.gutenberg_id {
        return match download::download_book(&cli.gutenberg_url, book_id) {
            Ok(text) => {
                let text = gutenberg::strip_boilerplate(&text);
                info!("book {book_id}: {} words after stripping", text.split_whitespace().count());
                Ok((text, cli.unk_threshold))
            }
            Err(err) => {
                warn!(
                    "download of book {book_id} failed ({err}), falling back to {}",
                    cli.fallback_corpus.display()
                );
                Ok((io::read_corpus(&cli.fallback_corpus)?, cli.fallback_unk_threshold))
            }
        };
    }

    // The group makes one of the two sources mandatory
    let path = cli.corpus.as_ref().ok_or("no corpus given")?;
    let mut text = io::read_corpus(path)?;
    if cli.gutenberg {
        let before = text.len();
        text = gutenberg::strip_boilerplate(&text);
        info!("stripped boilerplate: {} -> {} bytes", before, text.len());
    }
    Ok((text, cli.unk_threshold))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_filter = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    // Generation parameters; max_length == 0 is rejected before any I/O
    let mut input = PredictionInput::new(cli.max_length)?;
    if let Some(seed) = &cli.seed {
        input = input.with_seed(&seed[0], &seed[1]);
    }

    let (text, unk_threshold) = load_corpus(&cli)?;

    // Train
    let framing = if cli.sentences { Framing::Sentences } else { Framing::WholeText };
    let config = ModelConfig::builder()
        .unk_threshold(unk_threshold)
        .framing(framing)
        .build();
    let mut model = TrigramModel::with_config(config);
    let summary = model.fit(&text);
    if summary.trigrams == 0 {
        warn!("corpus produced no trigrams, output will be empty");
    }

    let mut rng = match cli.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    for _ in 0..cli.count {
        println!("{}", model.generate_with_rng(&input, &mut rng));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn seed_takes_two_words() {
        let cli = Cli::try_parse_from(["trigram-exemple", "-c", "x.txt", "--seed", "the", "cat"]).unwrap();
        assert_eq!(cli.seed, Some(vec!["the".to_owned(), "cat".to_owned()]));
        assert!(Cli::try_parse_from(["trigram-exemple", "-c", "x.txt", "--seed", "the"]).is_err());
    }

    #[test]
    fn negative_threshold_is_rejected() {
        assert!(Cli::try_parse_from(["trigram-exemple", "-c", "x.txt", "-u", "-1"]).is_err());
    }

    #[test]
    fn exactly_one_source_is_required() {
        assert!(Cli::try_parse_from(["trigram-exemple"]).is_err());
        assert!(Cli::try_parse_from(["trigram-exemple", "-c", "x.txt", "-g", "11"]).is_err());

        let cli = Cli::try_parse_from(["trigram-exemple", "-g", "11"]).unwrap();
        assert_eq!(cli.gutenberg_id, Some(11));
        assert_eq!(cli.fallback_corpus, PathBuf::from("data/example_corpus.txt"));
        assert_eq!(cli.fallback_unk_threshold, 0);
        assert_eq!(cli.gutenberg_url, download::DEFAULT_BASE_URL);
    }

    #[test]
    fn failed_download_falls_back_to_local_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let fallback = dir.path().join("fallback.txt");
        std::fs::write(&fallback, "local words").unwrap();

        let cli = Cli::try_parse_from([
            "trigram-exemple",
            "-g",
            "11",
            "-u",
            "1",
            "--gutenberg-url",
            "http://127.0.0.1:1",
            "--fallback-corpus",
            fallback.to_str().unwrap(),
        ])
        .unwrap();

        let (text, threshold) = load_corpus(&cli).unwrap();
        assert_eq!(text, "local words");
        assert_eq!(threshold, 0);
    }
}
