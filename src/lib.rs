//! Writes the configuration file consumed by the companion ssh-proxy
//! service: fixed defaults plus two secrets provisioned on the
//! filesystem, serialized as a single JSON object at the conventional
//! location.

pub mod config;
pub mod error;
pub mod logging;

use std::fs;
use std::fs::File;
use std::io::Write;

use camino::Utf8Path;

use crate::config::SetupPaths;
use crate::config::SshProxyConfig;
use crate::error::SetupError;

/// Run the whole pipeline: read both secrets, assemble the record and
/// write it to `paths.output`.
///
/// The output file is only created once both secrets have been read, so
/// a secret-read failure leaves the destination untouched. A close
/// failure is reported but may leave a partially written file behind.
pub fn generate(paths: &SetupPaths) -> Result<(), SetupError> {
    let uaa_password = read_secret("UAA client password", &paths.uaa_password)?;
    let host_key = read_secret("SSH host key", &paths.host_key)?;

    let config = SshProxyConfig::new(uaa_password, host_key);

    let mut output = File::create(&paths.output).map_err(|source| SetupError::OutputCreate {
        path: paths.output.clone(),
        source,
    })?;

    serde_json::to_writer(&mut output, &config)
        .map_err(|source| SetupError::Serialize { source })?;

    // Terminate the object with a newline and make sure the content
    // reached the disk, so delayed write errors surface now rather than
    // silently on drop.
    output
        .write_all(b"\n")
        .and_then(|()| output.sync_all())
        .map_err(|source| SetupError::OutputClose {
            path: paths.output.clone(),
            source,
        })?;

    Ok(())
}

fn read_secret(name: &'static str, path: &Utf8Path) -> Result<String, SetupError> {
    fs::read_to_string(path).map_err(|source| SetupError::SecretRead {
        name,
        path: path.to_owned(),
        source,
    })
}
