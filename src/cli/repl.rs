use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::fetch::StorySource;
use crate::persist::KeyValueStore;
use crate::session::Session;

use super::command::{Command, HELP};
use super::render::{render_history, render_screen};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Print(String),
    Quit,
}

/// Runs one command against the session, waiting for any request it starts.
pub async fn execute<S: StorySource, K: KeyValueStore>(
    session: &mut Session<S, K>,
    command: Command,
) -> Outcome {
    let result = match command {
        Command::Type(term) => {
            session.set_search_term(term);
            return Outcome::Print(format!("Searching for {}.\n", session.search_term()));
        }
        Command::Search(term) => {
            if let Some(term) = term {
                session.set_search_term(term);
            }
            session.submit()
        }
        Command::More => session.more(),
        Command::Sort(key) => {
            session.sort_by(key);
            Ok(())
        }
        Command::Remove(id) => session.remove(&id),
        Command::History => return Outcome::Print(render_history(&session.last_searches())),
        Command::Last(n) => {
            let term = n
                .checked_sub(1)
                .and_then(|i| session.last_searches().get(i).cloned());
            match term {
                Some(term) => {
                    session.search_last(term);
                    Ok(())
                }
                None => return Outcome::Print(format!("No last search #{n}.\n")),
            }
        }
        Command::Show => {
            session.poll();
            Ok(())
        }
        Command::Help => return Outcome::Print(format!("{HELP}\n")),
        Command::Quit => return Outcome::Quit,
    };

    if let Err(e) = result {
        return Outcome::Print(format!("{e}\n"));
    }

    session.settle().await;
    Outcome::Print(screen(session))
}

fn screen<S: StorySource, K: KeyValueStore>(session: &Session<S, K>) -> String {
    render_screen(
        session.search_term(),
        session.state(),
        &session.visible_stories(),
        session.sort(),
    )
}

/// Reads commands line by line until `quit` or end of input.
pub async fn run_repl<S, K, R, W>(
    session: &mut Session<S, K>,
    input: R,
    mut output: W,
) -> std::io::Result<()>
where
    S: StorySource,
    K: KeyValueStore,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    loop {
        output.write_all(b"> ").await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(super::CommandError::Empty) => continue,
            Err(e) => {
                output.write_all(format!("{e}\n").as_bytes()).await?;
                continue;
            }
        };

        tracing::debug!(?command, "Executing command");
        match execute(session, command).await {
            Outcome::Print(text) => output.write_all(text.as_bytes()).await?,
            Outcome::Quit => break,
        }
    }
    output.flush().await
}
