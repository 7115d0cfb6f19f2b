use std::path::PathBuf;

use argh::FromArgs;
use miette::WrapErr;
use tokio::io::BufReader;
use tracing::trace;

use repeat::{Bot, Config, Packet, consts};

/// Look up amateur radio repeaters near a station, the way the APRS bot answers them.
#[derive(Debug, FromArgs)]
struct Opts {
    /// path to config file
    #[argh(option, short = 'c', default = "PathBuf::from(consts::DEFAULT_CONFIG_PATH)")]
    config: PathBuf,
    /// callsign of the station sending the message
    #[argh(option, short = 'f')]
    from: String,
    /// print the help lines of all commands and exit
    #[argh(switch)]
    help_commands: bool,
    /// the message to process; stdin is read line by line when omitted
    #[argh(positional, greedy)]
    message: Vec<String>,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Parse command-line arguments
    let opts: Opts = argh::from_env();

    let config = Config::load(&opts.config)
        .map_err(repeat::Error::from)
        .wrap_err_with(|| format!("loading {}", opts.config.display()))?;

    let provider = repeat::tracing::try_init(&config.tracing)?;

    trace!(path = ?opts.config, "loaded config");

    let result = run(opts, config).await;

    // Export whatever is still buffered, even when processing failed.
    if let Some(provider) = provider {
        repeat::tracing::shutdown(provider)?;
    }

    result
}

/// Answers the message given on the command line, or every line read from stdin.
async fn run(opts: Opts, config: Config) -> miette::Result<()> {
    let bot = Bot::new(config)?;

    if opts.help_commands {
        for line in bot.help() {
            println!("{line}");
        }

        return Ok(());
    }

    if opts.message.is_empty() {
        let stdin = BufReader::new(tokio::io::stdin());

        bot.run(&opts.from, stdin, |reply| println!("{reply}")).await?;
    } else {
        let packet = Packet::new(opts.from, opts.message.join(" "));

        for reply in bot.handle(&packet).await {
            println!("{reply}");
        }
    }

    Ok(())
}
