// src/cli.rs
use color_eyre::eyre::{Result, eyre};

use crate::{
    api::ApiClient,
    commands::{self, Intent},
    config::{
        options::PanelOptions,
        state::{ActiveView, PanelState},
    },
    core::{FilterRange, filter},
    view::PanelView,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Status,
    Login,
    Scrape(Option<FilterRange>),
    Latest,
    /// `open`: hand the saved copy to the default app afterwards.
    Download { open: bool },
    OpenFolder,
    Filters,
    Help,
}

pub fn run() -> Result<()> {
    let (options, rest) = PanelOptions::from_args(std::env::args().skip(1))
        .map_err(|e| eyre!("{e}"))?;
    let cmd = parse_command(&rest)?;

    match cmd {
        Command::Help => {
            eprintln!(include_str!("cli_help.txt"));
            return Ok(());
        }
        Command::Filters => {
            for f in filter::filter_options(filter::current_year()) {
                println!("{}\t{}", f.value(), f.label());
            }
            return Ok(());
        }
        _ => {}
    }

    let client = ApiClient::new(&options)?;
    crate::log::session_start("cli", client.base_url());
    logf!("CLI: {cmd:?}");

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(execute(&client, cmd))
}

/// Page load, then the command's intents, printing transcript lines as they appear.
pub async fn execute(client: &ApiClient, cmd: Command) -> Result<()> {
    let mut state = PanelState::new();
    let mut printed = 0;

    step(client, &mut state, Intent::init(), &mut printed).await?;

    match cmd {
        Command::Status => {
            println!("状态: {}", PanelView::project(&state).status);
        }
        Command::Login => {
            step(client, &mut state, Intent::Login, &mut printed).await?;
        }
        Command::Scrape(f) => {
            if let Some(f) = f {
                if !state.filter_options.contains(&f) {
                    return Err(eyre!("Filter {f} is not offered (see `cli filters`)"));
                }
                step(client, &mut state, Intent::SelectFilter(f), &mut printed).await?;
            }
            step(client, &mut state, Intent::Scrape, &mut printed).await?;
            println!("订单数: {}", PanelView::project(&state).order_count);
        }
        Command::Latest => {
            step(client, &mut state, Intent::SwitchView(ActiveView::Data), &mut printed).await?;
            for (k, v) in PanelView::project(&state).meta.rows() {
                println!("{k}: {v}");
            }
        }
        Command::Download { open } => {
            step(client, &mut state, Intent::SwitchView(ActiveView::Data), &mut printed).await?;
            if !PanelView::project(&state).download.enabled {
                return Err(eyre!("No export file on the backend yet"));
            }
            step(client, &mut state, Intent::Download, &mut printed).await?;
            if open {
                if state.downloaded.is_none() {
                    return Err(eyre!("Download failed; nothing to open"));
                }
                step(client, &mut state, Intent::OpenFile, &mut printed).await?;
            }
        }
        Command::OpenFolder => {
            step(client, &mut state, Intent::OpenFolder, &mut printed).await?;
        }
        Command::Filters | Command::Help => {}
    }
    Ok(())
}

async fn step(
    client: &ApiClient,
    state: &mut PanelState,
    intent: Intent,
    printed: &mut usize,
) -> Result<()> {
    commands::run(client, state, intent).await;

    for line in state.transcript.since(*printed) {
        println!("{line}");
    }
    *printed = state.transcript.len();

    match state.dismiss_alert() {
        Some(msg) => Err(eyre!(msg)),
        None => Ok(()),
    }
}

pub fn parse_command(args: &[String]) -> Result<Command> {
    let mut args = args.iter();
    let Some(first) = args.next() else {
        return Ok(Command::Help);
    };

    let cmd = match first.as_str() {
        "status" | "check-auth" => Command::Status,
        "login" => Command::Login,
        "scrape" => {
            let mut filter = None;
            while let Some(a) = args.next() {
                match a.as_str() {
                    "-f" | "--filter" => {
                        let v = args.next().ok_or_else(|| eyre!("Missing value for --filter"))?;
                        filter = Some(v.parse::<FilterRange>().map_err(|e| eyre!(e))?);
                    }
                    other => return Err(eyre!("Unknown arg: {other}")),
                }
            }
            return Ok(Command::Scrape(filter));
        }
        "latest" => Command::Latest,
        "download" => match args.next().map(String::as_str) {
            None => Command::Download { open: false },
            Some("-o" | "--open") => Command::Download { open: true },
            Some(other) => return Err(eyre!("Unknown arg: {other}")),
        },
        "open-folder" => Command::OpenFolder,
        "filters" => Command::Filters,
        "-h" | "--help" | "help" => Command::Help,
        other => return Err(eyre!("Unknown command: {other}")),
    };

    if let Some(extra) = args.next() {
        return Err(eyre!("Unexpected argument: {extra}"));
    }
    Ok(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_scrape_filter() {
        assert_eq!(
            parse_command(&args(&["scrape", "--filter", "2020"])).unwrap(),
            Command::Scrape(Some(FilterRange::Year(2020)))
        );
        assert_eq!(parse_command(&args(&["scrape"])).unwrap(), Command::Scrape(None));
    }

    #[test]
    fn parses_download_open() {
        assert_eq!(parse_command(&args(&["download"])).unwrap(), Command::Download { open: false });
        assert_eq!(
            parse_command(&args(&["download", "--open"])).unwrap(),
            Command::Download { open: true }
        );
        assert!(parse_command(&args(&["download", "--open", "x"])).is_err());
    }

    #[test]
    fn empty_is_help() {
        assert_eq!(parse_command(&[]).unwrap(), Command::Help);
    }

    #[test]
    fn rejects_unknown() {
        assert!(parse_command(&args(&["frobnicate"])).is_err());
        assert!(parse_command(&args(&["login", "now"])).is_err());
        assert!(parse_command(&args(&["scrape", "--filter", "1999"])).is_err());
    }
}
