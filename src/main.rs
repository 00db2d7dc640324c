use clap::Parser;
use miette::Result;
use aligni::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    aligni::core::logging::init(global.verbose, global.quiet);

    match cli.command {
        Commands::Part(cmd) => aligni::cli::commands::part::run(cmd, &global),
        Commands::Subpart(cmd) => aligni::cli::commands::subpart::run(cmd, &global),
        Commands::Mfr(cmd) => aligni::cli::commands::mfr::run(cmd, &global),
        Commands::Unit(cmd) => aligni::cli::commands::unit::run(cmd, &global),
        Commands::Parttype(cmd) => aligni::cli::commands::parttype::run(cmd, &global),
        Commands::Config(cmd) => aligni::cli::commands::config::run(cmd, &global),
        Commands::Completions(args) => aligni::cli::commands::completions::run(args),
    }
}
