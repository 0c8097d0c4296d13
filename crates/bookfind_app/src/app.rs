use std::sync::Arc;

use anyhow::Context;
use bookfind_core::{parse_query, update, Msg, SearchConfig, SearchState};
use bookfind_engine::{
    FileQueryStore, QueryStore, ReqwestSearchClient, ResultsPipeline, SearchSettings,
};
use bookfind_logging::app_info;
use tokio::io::AsyncBufReadExt;
use tokio::sync::watch;

use crate::effects::EffectRunner;
use crate::render;
use crate::Args;

pub async fn run(args: Args) -> anyhow::Result<()> {
    let client = ReqwestSearchClient::new(SearchSettings {
        endpoint: args.endpoint.clone(),
    })
    .context("building the search client")?;

    let store = FileQueryStore::new(&args.session_file);
    let persisted = store.load().and_then(|raw| parse_query(&raw));

    let (search_tx, search_rx) = watch::channel(None);
    let pipeline = ResultsPipeline::spawn(Arc::new(client), search_rx);
    let mut results_rx = pipeline.subscribe();

    let mut state = SearchState::new(SearchConfig {
        default_page_size: args.page_size,
    });
    let runner = EffectRunner::new(search_tx, Box::new(store));

    println!("bookfind: search books from your terminal.");
    println!("{}", render::USAGE);

    if persisted.is_some() {
        app_info!("Restoring the previous session's search");
    }
    dispatch(&mut state, &runner, Msg::RestoreFromQuery(persisted));
    render_if_dirty(&mut state);

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    break;
                };
                match parse_command(&line) {
                    Command::Search(text) => {
                        dispatch(&mut state, &runner, Msg::SearchTextChanged(text));
                        dispatch(&mut state, &runner, Msg::SearchSubmitted);
                    }
                    Command::Page(page) => {
                        dispatch(&mut state, &runner, Msg::PageSelected(page));
                    }
                    Command::Next => {
                        let page = state.page().saturating_add(1);
                        dispatch(&mut state, &runner, Msg::PageSelected(page));
                    }
                    Command::Prev => {
                        // Backing out of page 1 is not a navigation.
                        if state.page() > 1 {
                            let page = state.page() - 1;
                            dispatch(&mut state, &runner, Msg::PageSelected(page));
                        }
                    }
                    Command::Help => println!("{}", render::USAGE),
                    Command::Quit => break,
                    Command::Unknown(command) => {
                        println!("Unknown command '{command}'.");
                        println!("{}", render::USAGE);
                    }
                    Command::Empty => {}
                }
                render_if_dirty(&mut state);
            }
            changed = results_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = results_rx.borrow_and_update().clone();
                println!("{}", render::results(&snapshot, state.current_search()));
            }
        }
    }

    app_info!("bookfind exiting");
    Ok(())
}

fn dispatch(state: &mut SearchState, runner: &EffectRunner, msg: Msg) {
    let taken = std::mem::take(state);
    let (next, effects) = update(taken, msg);
    *state = next;
    runner.run(effects);
}

fn render_if_dirty(state: &mut SearchState) {
    if state.consume_dirty() {
        println!("{}", render::status_line(&state.view()));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Search(String),
    Page(u32),
    Next,
    Prev,
    Help,
    Quit,
    Unknown(String),
    Empty,
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }

    let Some(rest) = line.strip_prefix(':') else {
        return Command::Search(line.to_string());
    };

    let mut parts = rest.split_whitespace();
    match parts.next().unwrap_or("") {
        "page" => match parts.next().and_then(|raw| raw.parse::<u32>().ok()) {
            Some(page) if page >= 1 => Command::Page(page),
            _ => Command::Unknown(line.to_string()),
        },
        "next" => Command::Next,
        "prev" => Command::Prev,
        "help" => Command::Help,
        "quit" | "q" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_text_is_a_search() {
        assert_eq!(
            parse_command("  The Hobbit  "),
            Command::Search("The Hobbit".to_string())
        );
    }

    #[test]
    fn page_command_parses_its_number() {
        assert_eq!(parse_command(":page 3"), Command::Page(3));
    }

    #[test]
    fn page_command_rejects_a_missing_or_bad_number() {
        assert_eq!(parse_command(":page"), Command::Unknown(":page".to_string()));
        assert_eq!(
            parse_command(":page abc"),
            Command::Unknown(":page abc".to_string())
        );
        assert_eq!(
            parse_command(":page 0"),
            Command::Unknown(":page 0".to_string())
        );
    }

    #[test]
    fn navigation_and_session_commands_parse() {
        assert_eq!(parse_command(":next"), Command::Next);
        assert_eq!(parse_command(":prev"), Command::Prev);
        assert_eq!(parse_command(":help"), Command::Help);
        assert_eq!(parse_command(":quit"), Command::Quit);
        assert_eq!(parse_command(":q"), Command::Quit);
    }

    #[test]
    fn blank_lines_do_nothing() {
        assert_eq!(parse_command(""), Command::Empty);
        assert_eq!(parse_command("   "), Command::Empty);
    }

    #[test]
    fn unknown_commands_are_reported_verbatim() {
        assert_eq!(
            parse_command(":frobnicate"),
            Command::Unknown(":frobnicate".to_string())
        );
    }
}
