use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber; call once at the top of a demo's `main`.
/// `RUST_LOG` overrides the default filter.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "oop_labs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
