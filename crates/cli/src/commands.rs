use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Run one replay tick: emit every configured engine at the current
    /// cursor position, then advance the cursor by one.
    Tick,

    /// Provision the cursor blob with an initial position. The tick command
    /// refuses to run without it, so a missing cursor always points at a
    /// provisioning gap rather than restarting replay from zero.
    Init {
        /// Position to start replaying from.
        #[arg(long, default_value_t = 0)]
        position: u64,
    },

    /// Print the current cursor state as JSON.
    Cursor,
}
