//! Tracing setup shared by the binaries.

/// Installs a stderr subscriber filtered by `env_var`, `warn` when unset.
pub fn init_tracing(env_var: &str) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env(env_var)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
