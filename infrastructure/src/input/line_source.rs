//! Line-oriented answer source.
//!
//! Each [`read_answer`](AnswerSource::read_answer) call hands one blocking
//! `read_line` to a detached OS thread and awaits its result on a oneshot
//! channel. If the session drops the future (deadline or Ctrl-C), the
//! receiver goes away with it: the thread's late send fails silently and the
//! thread itself never holds up process exit.

use async_trait::async_trait;
use quiz_application::AnswerSource;
use std::io::{self, BufRead, BufReader, Stdin};
use std::sync::{Arc, Mutex};
use std::thread;
use tokio::sync::oneshot;
use tracing::{debug, warn};

/// Answer source reading one line per answer from a buffered reader.
///
/// Meant for a single session. A read abandoned at the deadline keeps its
/// thread blocked on the reader and consumes the next line typed, so a second
/// session on the same source would lose its first answer.
pub struct LineAnswerSource<R> {
    reader: Arc<Mutex<R>>,
}

impl LineAnswerSource<BufReader<Stdin>> {
    /// Answer source over the process's standard input
    pub fn stdin() -> Self {
        Self::new(BufReader::new(io::stdin()))
    }
}

impl<R: BufRead + Send + 'static> LineAnswerSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: Arc::new(Mutex::new(reader)),
        }
    }

    fn read_line_blocking(reader: &Mutex<R>) -> Option<String> {
        let mut reader = match reader.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                debug!("Input reached end of file");
                None
            }
            Ok(_) => Some(line),
            Err(e) => {
                warn!("Failed to read answer: {}", e);
                None
            }
        }
    }
}

#[async_trait]
impl<R: BufRead + Send + 'static> AnswerSource for LineAnswerSource<R> {
    async fn read_answer(&self) -> Option<String> {
        let (tx, rx) = oneshot::channel();
        let reader = Arc::clone(&self.reader);

        let spawned = thread::Builder::new()
            .name("answer-reader".to_string())
            .spawn(move || {
                let line = Self::read_line_blocking(&reader);
                // Err only means the session stopped listening.
                let _ = tx.send(line);
            });

        if let Err(e) = spawned {
            warn!("Failed to spawn answer reader: {}", e);
            return None;
        }

        rx.await.ok().flatten()
    }
}
