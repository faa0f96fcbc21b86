//! The pinmap command-line executable.

fn main() -> anyhow::Result<()> {
    pinmap::run()
}
