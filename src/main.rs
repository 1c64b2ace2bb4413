use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dwm_config::{buttons, config::Config, keys, modifiers::NUMLOCK, rules::WindowProps, validate};

mod args;

fn main() -> Result<()> {
    let cli = args::Args::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let path = cli.config_path().context("Failed to expand config path")?;
    let config = Config::load(&path)?;

    match cli.command {
        Some(args::Commands::Check) => check(&config),
        Some(args::Commands::Dump) => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        Some(args::Commands::Keys) => {
            config.keys.iter().for_each(|key| println!("{}", key));
            Ok(())
        }
        Some(args::Commands::Buttons) => {
            config.buttons.iter().for_each(|button| println!("{}", button));
            Ok(())
        }
        Some(args::Commands::ResolveKey { chord }) => {
            let (mods, keysym) = keys::parse_chord(&chord)?;
            let key = config
                .keys
                .lookup(mods, keysym, NUMLOCK)
                .ok_or_else(|| anyhow!("`{}` is not bound", chord))?;
            println!("{}", key.action);
            Ok(())
        }
        Some(args::Commands::ResolveButton { click, chord }) => {
            let click: buttons::Click = click.parse()?;
            let (mods, button) = buttons::parse_chord(&chord)?;
            let binding = config
                .buttons
                .lookup(click, mods, button, NUMLOCK)
                .ok_or_else(|| anyhow!("`{}` on {} is not bound", chord, click))?;
            println!("{}", binding.action);
            Ok(())
        }
        Some(args::Commands::MatchRule {
            class,
            instance,
            title,
        }) => {
            let props = WindowProps {
                class,
                instance,
                title,
            };
            match config.rules.first_match(&props) {
                Some(rule) => println!("{}", serde_json::to_string(rule)?),
                None => println!("no rule matches"),
            }
            Ok(())
        }
        Some(args::Commands::Autostart { dry_run: true }) => {
            config.autostart.iter().for_each(|command| println!("{}", command));
            Ok(())
        }
        Some(args::Commands::Autostart { dry_run: false }) => {
            let started = config.autostart.run();
            tracing::info!(started, total = config.autostart.0.len(), "autostart done");
            Ok(())
        }
        None => Ok(()),
    }
}

fn check(config: &Config) -> Result<()> {
    let issues = validate::check(config);
    for issue in &issues {
        match issue.severity() {
            validate::Severity::Error => println!("error: {}", issue),
            validate::Severity::Warning => println!("warning: {}", issue),
        }
    }

    if validate::has_errors(&issues) {
        return Err(anyhow!("configuration has errors"));
    }
    println!("ok");
    Ok(())
}
