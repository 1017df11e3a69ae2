use std::path::PathBuf;

use serde::Deserialize;

const CARGO_MANIFEST_DIR: &str = env!("CARGO_MANIFEST_DIR");

/// Runtime configuration of the sentence generator application.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Text file the chain is built from.
    #[serde(default = "default_corpus_file")]
    pub corpus_file: PathBuf,
    /// Number of words forming each chain prefix.
    #[serde(default = "default_prefix_length")]
    pub prefix_length: usize,
    /// Number of words in the generated sentence.
    #[serde(default = "default_word_length")]
    pub word_length: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            corpus_file: default_corpus_file(),
            prefix_length: default_prefix_length(),
            word_length: default_word_length(),
        }
    }
}

fn default_corpus_file() -> PathBuf {
    std::env::var("MARKOV_CORPUS_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(CARGO_MANIFEST_DIR).join("data").join("corpus.txt"))
}

fn default_prefix_length() -> usize {
    2
}

fn default_word_length() -> usize {
    10
}

impl AppConfig {
    /// Loads the configuration from a JSON file and validates it.
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str::<Self>(&content)?;

        config.validate()?;
        log::info!("Loaded config: {:?}", config);

        Ok(config)
    }

    /// Checks the settings before any model work happens.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.corpus_file.exists() {
            log::error!("config.corpus_file doesn't exist: {}", self.corpus_file.display());
            anyhow::bail!("Corpus file doesn't exist")
        }

        if self.prefix_length < 1 {
            log::error!("config.prefix_length must be at least 1");
            anyhow::bail!("config.prefix_length is invalid")
        }

        if self.word_length < self.prefix_length + 1 {
            log::error!(
                "config.word_length must hold a full prefix plus one word ({} minimum)",
                self.prefix_length + 1
            );
            anyhow::bail!("config.word_length is invalid")
        }

        Ok(())
    }
}
