//! Tracing subscriber for the CLI.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical tracing subscriber on stderr.
///
/// The filter comes from `MINIPL_LOG`, falling back to `RUST_LOG`. With
/// neither set nothing is installed and the stages' spans cost nothing.
/// Safe to call more than once.
///
/// ```text
/// MINIPL_LOG=minipl_parse=trace minipl run prog.mpl
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let Ok(filter) = EnvFilter::try_from_env("MINIPL_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
        else {
            return;
        };

        let tree = tracing_tree::HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true)
            .with_bracketed_fields(true);

        // Another subscriber may already be installed when embedded.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tree)
            .try_init();
    });
}
