use camino::Utf8PathBuf;
use serde::Serialize;

pub const UAA_PASSWORD_PATH: &str = "/run/secrets/uaa-client-password";
pub const HOST_KEY_PATH: &str = "/run/secrets/ssh-proxy-host-key.key";
pub const OUTPUT_PATH: &str = "/run/secrets/config/eirini-ssh-proxy.json";

const CC_API_URL: &str = "https://cloud-controller-ng.service.cf.internal:9024";
const UAA_USERNAME: &str = "ssh-proxy";
const UAA_TOKEN_URL: &str = "https://uaa.service.cf.internal:8443/oauth/token";
const LISTEN_ADDRESS: &str = "0.0.0.0:2222";
const LOG_LEVEL: &str = "info";
const UAA_CA_CERT_PATH: &str = "/run/secrets/uaa-ca.crt";
const CC_API_CA_CERT_PATH: &str = "/run/secrets/cc-api-ca.crt";

/// The locations the pipeline reads from and writes to.
///
/// The defaults are the conventional paths provisioned by the
/// orchestrator; tests substitute their own.
#[derive(Debug, Clone)]
pub struct SetupPaths {
    pub uaa_password: Utf8PathBuf,
    pub host_key: Utf8PathBuf,
    pub output: Utf8PathBuf,
}

impl Default for SetupPaths {
    fn default() -> Self {
        Self {
            uaa_password: UAA_PASSWORD_PATH.into(),
            host_key: HOST_KEY_PATH.into(),
            output: OUTPUT_PATH.into(),
        }
    }
}

/// The configuration record consumed by the ssh-proxy service.
///
/// Field declaration order is the key order of the emitted JSON object,
/// so the output is byte-stable across runs.
#[derive(Serialize, Debug)]
pub struct SshProxyConfig {
    pub enable_cf_auth: bool,
    pub cc_api_url: String,
    pub skip_cert_verify: bool,
    pub uaa_username: String,
    pub uaa_password: String,
    pub uaa_token_url: String,
    pub address: String,
    pub log_level: String,
    pub host_key: String,
    pub uaa_ca_cert: String,
    pub cc_api_ca_cert: String,
}

impl SshProxyConfig {
    /// Fill the record from the fixed defaults plus the two secrets.
    pub fn new(uaa_password: String, host_key: String) -> Self {
        Self {
            enable_cf_auth: true,
            cc_api_url: CC_API_URL.into(),
            skip_cert_verify: false,
            uaa_username: UAA_USERNAME.into(),
            uaa_password,
            uaa_token_url: UAA_TOKEN_URL.into(),
            address: LISTEN_ADDRESS.into(),
            log_level: LOG_LEVEL.into(),
            host_key,
            uaa_ca_cert: UAA_CA_CERT_PATH.into(),
            cc_api_ca_cert: CC_API_CA_CERT_PATH.into(),
        }
    }
}
