use ssh_proxy_setup::config::SetupPaths;
use tracing::error;
use tracing::info;

fn main() {
    ssh_proxy_setup::logging::initialise_tracing_subscriber();

    let paths = SetupPaths::default();
    match ssh_proxy_setup::generate(&paths) {
        Ok(()) => info!("Wrote ssh-proxy configuration to {}", paths.output),
        Err(err) => {
            error!("Error writing configuration: {err}");
            std::process::exit(1);
        }
    }
}
