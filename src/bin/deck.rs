use clap::Parser;
use deck_rs::cards::{Rank, Suit};
use deck_rs::config::DeckConfig;
use std::io::{self, BufWriter, Write};
use tracing_subscriber::EnvFilter;

/// Build a customized deck of playing cards and print it, one card per line.
#[derive(Parser, Debug)]
#[command(name = "deck-rs", version, about, long_about = None)]
struct Cli {
    /// Number of copies of the base deck (negative counts as zero)
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    decks: i64,

    /// Number of jokers to append (negative counts as zero)
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    jokers: i64,

    /// Remove every card of this rank, e.g. "two" or "2" (repeatable)
    #[arg(long = "exclude-rank", value_name = "RANK")]
    exclude_ranks: Vec<Rank>,

    /// Remove every card of this suit, e.g. "hearts" or "h" (repeatable)
    #[arg(long = "exclude-suit", value_name = "SUIT")]
    exclude_suits: Vec<Suit>,

    /// Sort into canonical order
    #[arg(long)]
    sort: bool,

    /// Shuffle the final deck
    #[arg(long)]
    shuffle: bool,

    /// Seed for a reproducible shuffle (implies --shuffle)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print only the number of cards
    #[arg(short, long)]
    count: bool,
}

impl From<&Cli> for DeckConfig {
    fn from(cli: &Cli) -> Self {
        DeckConfig {
            decks: cli.decks,
            jokers: cli.jokers,
            exclude_ranks: cli.exclude_ranks.clone(),
            exclude_suits: cli.exclude_suits.clone(),
            sort: cli.sort,
            shuffle: cli.shuffle || cli.seed.is_some(),
            seed: cli.seed,
        }
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "deck_rs=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = DeckConfig::from(&cli);
    tracing::info!(version = deck_rs::VERSION, ?config, "building deck");

    let cards = config.build();
    tracing::info!(cards = cards.len(), "deck built");

    let mut out = BufWriter::new(io::stdout().lock());
    if cli.count {
        writeln!(out, "{}", cards.len())?;
    } else {
        for card in &cards {
            writeln!(out, "{card}")?;
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("deck-rs").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn defaults_describe_the_standard_deck() {
        let config = DeckConfig::from(&parse(&[]));
        assert_eq!(config, DeckConfig::default());
        assert_eq!(config.build().len(), 52);
    }

    #[test]
    fn seed_turns_on_shuffle() {
        let cli = parse(&["--seed", "3"]);
        assert!(!cli.shuffle);
        let config = DeckConfig::from(&cli);
        assert!(config.shuffle);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.build(), config.build());
    }

    #[test]
    fn negative_jokers_parse_and_clamp() {
        let cli = parse(&["--jokers", "-2", "-d", "-1"]);
        assert_eq!(cli.jokers, -2);
        assert_eq!(cli.decks, -1);
        assert!(DeckConfig::from(&cli).build().is_empty());

        let cli = parse(&["-j", "-2"]);
        assert_eq!(DeckConfig::from(&cli).build().len(), 52);
    }

    #[test]
    fn repeated_exclusions_use_library_parsers() {
        let cli = parse(&[
            "--exclude-rank",
            "two",
            "--exclude-rank",
            "3",
            "--exclude-suit",
            "h",
            "--sort",
            "--count",
        ]);
        assert!(cli.count);
        let config = DeckConfig::from(&cli);
        assert_eq!(config.exclude_ranks, vec![Rank::Two, Rank::Three]);
        assert_eq!(config.exclude_suits, vec![Suit::Heart]);
        assert!(config.sort);
        assert!(!config.shuffle);
        // 39 non-heart cards minus six twos and threes
        assert_eq!(config.build().len(), 33);
    }

    #[test]
    fn invalid_rank_or_suit_is_rejected() {
        assert!(Cli::try_parse_from(["deck-rs", "--exclude-rank", "zed"]).is_err());
        assert!(Cli::try_parse_from(["deck-rs", "--exclude-suit", "cups"]).is_err());
        assert!(Cli::try_parse_from(["deck-rs", "--decks", "many"]).is_err());
    }
}
