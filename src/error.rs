use std::io;

use camino::Utf8PathBuf;

/// One variant per step of the generation pipeline. Every failure is
/// terminal: the caller reports it and exits.
#[derive(thiserror::Error, Debug)]
pub enum SetupError {
    #[error("could not read {name} from {path}: {source}")]
    SecretRead {
        name: &'static str,
        path: Utf8PathBuf,
        source: io::Error,
    },

    #[error("could not create config file {path}: {source}")]
    OutputCreate {
        path: Utf8PathBuf,
        source: io::Error,
    },

    #[error("could not encode config: {source}")]
    Serialize { source: serde_json::Error },

    #[error("could not close config file {path}: {source}")]
    OutputClose {
        path: Utf8PathBuf,
        source: io::Error,
    },
}
