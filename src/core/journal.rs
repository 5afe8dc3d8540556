use crate::db::log::journal;
use crate::provider::DataProvider;
use crate::ui::messages::warning;

/// Journal a CLI-initiated operation. A failure here never fails the
/// command that triggered it.
pub fn record(provider: &mut DataProvider, operation: &str, target: &str, message: &str) {
    let res = provider
        .pool()
        .writable()
        .and_then(|conn| journal(conn, operation, target, message));

    if let Err(e) = res {
        warning(format!("Failed to write internal log: {}", e));
    }
}
