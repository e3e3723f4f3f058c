#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Silent,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}

impl Verbosity {
    /// Install the global `tracing` subscriber used by the binaries. Logs go
    /// to stderr so that plans printed on stdout stay machine-readable.
    pub fn init_tracing(self, colour: bool) {
        let level: tracing::Level = self.into();
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(colour)
            .with_line_number(true)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }
}
