//! Log output setup. Logs go to stderr so they stay out of the chat.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "rsvp=info";

pub fn init(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
