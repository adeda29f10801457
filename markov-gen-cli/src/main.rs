use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use markov_gen_core::model::builder::{ChainBuilder, tokenize};
use markov_gen_core::model::generator::TextGenerator;

/// Generate pseudo-random text that statistically mimics a corpus.
#[derive(Debug, Parser)]
#[command(name = "markov-gen", version, about)]
struct Args {
	/// Corpus text file to imitate.
	corpus: PathBuf,

	/// Window size: number of tokens per n-gram key.
	#[arg(short = 'n', long, default_value_t = 2)]
	ngram: usize,

	/// Number of texts to generate against the same table.
	#[arg(short, long, default_value_t = 1)]
	count: usize,

	/// Seed for reproducible output; drawn from the OS when omitted.
	#[arg(short, long)]
	seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
	env_logger::init();

	let args = Args::parse();
	let mut rng = match args.seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_os_rng(),
	};

	for text in run(&args, &mut rng)? {
		println!("{text}");
	}
	Ok(())
}

/// Reads the corpus, builds the chain table once, and walks it `count`
/// times with the injected RNG.
fn run<R: Rng + ?Sized>(args: &Args, rng: &mut R) -> anyhow::Result<Vec<String>> {
	let text = fs::read_to_string(&args.corpus)
		.with_context(|| format!("failed to read corpus file '{}'", args.corpus.display()))?;

	let tokens = tokenize(&text);
	info!("corpus '{}': {} tokens", args.corpus.display(), tokens.len());

	let builder = ChainBuilder::new(args.ngram)?;
	let table = builder.build(&tokens);
	debug!("chain table: {} keys of window size {}", table.len(), table.n());

	let generator = TextGenerator::new(&table);
	let mut texts = Vec::with_capacity(args.count);
	for _ in 0..args.count {
		texts.push(generator.generate(rng)?);
	}

	Ok(texts)
}
