use tracing_subscriber::EnvFilter;

/// Initialize tracing from the `-v` count.
///
/// 0 -> warn, 1 -> info, 2 -> debug, 3+ -> trace. `RUST_LOG` wins when set.
/// Events go to stderr so the date list on stdout stays clean.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    // A second init (e.g. from tests) is harmless; keep the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn default_directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("friday_finder={level},friday_finder_lib={level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_mapping() {
        assert_eq!(
            default_directive(0),
            "friday_finder=warn,friday_finder_lib=warn"
        );
        assert!(default_directive(2).ends_with("=debug"));
        assert!(default_directive(7).ends_with("=trace"));
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(0);
        init(3);
    }
}
