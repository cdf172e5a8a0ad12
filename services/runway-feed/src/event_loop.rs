use anyhow::Result;
use feed::{Completion, FeedSession, SearchBackend};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::console::{self, Command};

/// Drives one feed session from `input` until `/quit`, EOF or cancellation.
pub async fn run<B, R>(
    mut session: FeedSession<B>,
    initial_query: String,
    input: R,
    cancel: CancellationToken,
) -> Result<()>
where
    B: SearchBackend + 'static,
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();

    info!(backend=?session.backend().info(), "event_loop: started");
    println!("{}", console::HELP);
    session.submit(initial_query);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,

            Some(done) = session.next_completion(), if session.in_flight() > 0 => {
                on_completion(&mut session, done);
            }

            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match console::parse(&line) {
                    Ok(Some(Command::Quit)) => {
                        cancel.cancel();
                        break;
                    }
                    Ok(Some(cmd)) => on_command(&mut session, cmd),
                    Ok(None) => {}
                    Err(e) => println!("{e}"),
                }
            }
        }
    }

    info!(pending=session.in_flight(), "event_loop: stopped");
    Ok(())
}

fn on_completion<B: SearchBackend + 'static>(session: &mut FeedSession<B>, done: Completion) {
    match done {
        Completion::Stale { .. } => return,
        Completion::Failed { error, .. } => println!("search failed: {error}"),
        Completion::Merged { .. } | Completion::Exhausted { .. } => {}
    }
    println!("{}", console::render(session.controller()));
    // Fresh cards push the sentinel off screen until the next /more.
    session.sentinel_visibility(false);
}

fn on_command<B: SearchBackend + 'static>(session: &mut FeedSession<B>, cmd: Command) {
    match cmd {
        Command::Search(query) => {
            println!("searching {query:?}...");
            session.submit(query);
        }
        Command::More => {
            if session.sentinel_visibility(true) {
                println!("loading page {}...", session.controller().state().page);
            } else if session.controller().is_exhausted() {
                println!("end of results");
            } else if session.controller().is_loading() {
                println!("still loading...");
            }
        }
        Command::Designer(wanted) => {
            let label = console::resolve_designer(session.controller(), &wanted);
            if let Some(note) = console::unknown_designer(session.controller(), &label) {
                println!("{note}");
            }
            session.controller_mut().select_designer(&label);
            println!("{}", console::render(session.controller()));
        }
        Command::Category(category) => {
            session.controller_mut().set_category(category);
            println!("{}", console::render(session.controller()));
        }
        Command::Season(season) => {
            session.controller_mut().set_season(season);
            println!("{}", console::render(session.controller()));
        }
        Command::City(city) => {
            session.controller_mut().set_city(city);
            println!("{}", console::render(session.controller()));
        }
        Command::Facets => println!("{}", console::render_facets(session.controller())),
        Command::Show => println!("{}", console::render(session.controller())),
        Command::Help => println!("{}", console::HELP),
        Command::Quit => {}
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;
    use feed::{BackendInfo, FetchError, QueryController, SearchRequest, SearchResponse};
    use lookbook::Identifier;
    use tokio::io::{AsyncWriteExt, BufReader};

    use super::*;

    /// One fresh look per page, so the feed never runs dry.
    #[derive(Default)]
    struct PagedBackend {
        calls: Mutex<Vec<SearchRequest>>,
    }

    impl PagedBackend {
        fn pages(&self) -> Vec<u32> {
            self.calls.lock().unwrap().iter().map(|r| r.page).collect()
        }
    }

    #[async_trait]
    impl SearchBackend for PagedBackend {
        async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, FetchError> {
            self.calls.lock().unwrap().push(request.clone());
            let id = format!("A/HouseX/housex-{}-look-{}.jpg", request.query, request.page);
            Ok(SearchResponse { results: vec![Identifier::from(id)] })
        }

        fn info(&self) -> BackendInfo {
            BackendInfo { name: "paged".into(), endpoint: "memory".into() }
        }
    }

    fn session() -> (FeedSession<PagedBackend>, Arc<PagedBackend>) {
        let backend = Arc::new(PagedBackend::default());
        (FeedSession::new(QueryController::default(), Arc::clone(&backend)), backend)
    }

    /// Waits until `n` requests went out, then gives the loop time to apply them.
    async fn settle(backend: &PagedBackend, n: usize) {
        while backend.pages().len() < n {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    #[tokio::test]
    async fn each_more_after_a_render_fetches_the_next_page() {
        let (session, backend) = session();
        let (mut keys, screen) = tokio::io::duplex(256);
        let cancel = CancellationToken::new();

        let driver = async {
            settle(&backend, 1).await;
            keys.write_all(b"/more\n").await.unwrap();
            settle(&backend, 2).await;
            keys.write_all(b"/more\n").await.unwrap();
            settle(&backend, 3).await;
            keys.write_all(b"/quit\n").await.unwrap();
        };
        let looped = run(session, "velvet".into(), BufReader::new(screen), cancel.clone());

        let (outcome, ()) = tokio::time::timeout(Duration::from_secs(5), async {
            tokio::join!(looped, driver)
        })
        .await
        .expect("event loop hung");

        outcome.unwrap();
        assert_eq!(backend.pages(), vec![1, 2, 3]);
        assert!(backend.calls.lock().unwrap().iter().all(|r| r.query == "velvet"));
        assert!(cancel.is_cancelled(), "/quit cancels the session");
    }

    #[tokio::test]
    async fn eof_stops_after_the_startup_search() {
        let (session, backend) = session();
        let cancel = CancellationToken::new();

        run(session, "bohemian".into(), &b"/help\n"[..], cancel.clone()).await.unwrap();
        settle(&backend, 1).await;

        assert_eq!(backend.pages(), vec![1]);
        assert!(!cancel.is_cancelled());
    }

    #[tokio::test]
    async fn cancellation_stops_a_waiting_loop() {
        let (session, _backend) = session();
        let (_keys, screen) = tokio::io::duplex(64);
        let cancel = CancellationToken::new();
        cancel.cancel();

        let outcome = tokio::time::timeout(
            Duration::from_secs(5),
            run(session, "bohemian".into(), BufReader::new(screen), cancel),
        )
        .await
        .expect("cancelled loop kept running");
        outcome.unwrap();
    }

    #[tokio::test]
    async fn more_while_loading_is_ignored() {
        let (session, backend) = session();
        let cancel = CancellationToken::new();

        // Both lines are read before the start-up fetch reports back.
        run(session, "bohemian".into(), &b"/more\n/quit\n"[..], cancel).await.unwrap();
        settle(&backend, 1).await;

        assert_eq!(backend.pages(), vec![1]);
    }
}
