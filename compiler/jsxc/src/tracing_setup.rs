//! Log output for the driver.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber, once.
///
/// Filter directives come from `JSXC_LOG`, falling back to `RUST_LOG`. With
/// neither set nothing is installed and logging stays disabled. Output is
/// an indented span tree on stderr.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let filter = if let Ok(directives) = std::env::var("JSXC_LOG") {
            EnvFilter::new(directives)
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let tree = tracing_tree::HierarchicalLayer::new(2)
            .with_targets(true)
            .with_bracketed_fields(true);
        // Another subscriber may already be installed (e.g. by an embedder).
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tree)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_tracing();
        init_tracing();
    }
}
