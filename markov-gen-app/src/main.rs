use std::fs;

use anyhow::Result;
use markov_gen_core::model::chain::MarkovChain;
use markov_gen_core::model::generator::Generator;

mod config;

use config::AppConfig;

/// Builds a Markov chain from the configured corpus and logs one generated
/// sentence.
///
/// Configuration comes from the JSON file named by `MARKOV_GEN_CONFIG`, or
/// falls back to the built-in defaults (see `config.rs`). The corpus is read
/// fully into memory before any model work starts.
fn main() -> Result<()> {
    env_logger::init();

    let config = match std::env::var("MARKOV_GEN_CONFIG") {
        Ok(path) => AppConfig::load(path)?,
        Err(_) => {
            let config = AppConfig::default();
            config.validate()?;
            config
        }
    };

    log::info!("Reading corpus from {}", config.corpus_file.display());
    let text = fs::read_to_string(&config.corpus_file)?;

    let chain = MarkovChain::from_text(&text, config.prefix_length)?;
    log::info!("Built a chain of {} prefixes", chain.len());

    let generator = Generator::new(chain);
    let sentence = generator.generate(config.word_length)?;
    log::info!("{}", sentence);

    Ok(())
}
