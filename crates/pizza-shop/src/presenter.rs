//! # Presenter
//!
//! The shop talks to its user through a [`Presenter`]: fire-and-forget notices plus a yes/no
//! question. Asking a question is the only place an order flow waits.
//!
//! - [`ConsolePresenter`] prints to stdout and reads answers from stdin.
//! - [`ScriptedPresenter`] replays canned answers and records everything it was shown.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::fmt::{self, Display};
use std::sync::Mutex;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    /// Progress messages from the order flow.
    Notification,
    Information,
    Warning,
    Success,
}

impl Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NoticeKind::Notification => "Notification",
            NoticeKind::Information => "Information",
            NoticeKind::Warning => "Warning",
            NoticeKind::Success => "Success",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn notification(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Notification, message)
    }

    pub fn information(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Information, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Warning, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, message)
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

#[async_trait]
pub trait Presenter: Send + Sync {
    /// Asks a yes/no question.
    async fn confirm(&self, question: &str) -> bool;

    fn notify(&self, notice: Notice);
}

/// Terminal presenter for the demo binary.
///
/// With `auto_confirm` set every question is answered yes without reading input. One line
/// reader is kept for the presenter's lifetime, so answers typed ahead are not lost.
#[derive(Debug)]
pub struct ConsolePresenter<R = BufReader<Stdin>> {
    auto_confirm: bool,
    input: tokio::sync::Mutex<Lines<R>>,
}

impl ConsolePresenter {
    pub fn new(auto_confirm: bool) -> Self {
        Self::with_input(auto_confirm, BufReader::new(tokio::io::stdin()))
    }
}

impl<R: AsyncBufRead + Unpin + Send> ConsolePresenter<R> {
    /// Reads answers from `input` instead of stdin.
    pub fn with_input(auto_confirm: bool, input: R) -> Self {
        Self {
            auto_confirm,
            input: tokio::sync::Mutex::new(input.lines()),
        }
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> Presenter for ConsolePresenter<R> {
    async fn confirm(&self, question: &str) -> bool {
        println!("{question}\n[y/N] ");
        if self.auto_confirm {
            println!("y");
            return true;
        }

        let mut lines = self.input.lock().await;
        match lines.next_line().await {
            Ok(Some(answer)) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "Could not read answer, treating as no");
                false
            }
        }
    }

    fn notify(&self, notice: Notice) {
        println!("{notice}");
    }
}

/// Presenter for tests: answers from a queue, then says no once the queue runs dry.
#[derive(Debug, Default)]
pub struct ScriptedPresenter {
    answers: Mutex<VecDeque<bool>>,
    questions: Mutex<Vec<String>>,
    notices: Mutex<Vec<Notice>>,
}

impl ScriptedPresenter {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions
            .lock()
            .map(|q| q.clone())
            .unwrap_or_default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }

    /// Notice messages only, in the order they were shown.
    pub fn messages(&self) -> Vec<String> {
        self.notices().into_iter().map(|n| n.message).collect()
    }
}

#[async_trait]
impl Presenter for ScriptedPresenter {
    async fn confirm(&self, question: &str) -> bool {
        if let Ok(mut questions) = self.questions.lock() {
            questions.push(question.to_string());
        }
        let answer = self
            .answers
            .lock()
            .ok()
            .and_then(|mut answers| answers.pop_front())
            .unwrap_or(false);
        debug!(answer, "Scripted answer");
        answer
    }

    fn notify(&self, notice: Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_answers_then_declines() {
        let presenter = ScriptedPresenter::new([true]);

        assert!(presenter.confirm("first?").await);
        assert!(!presenter.confirm("second?").await);
        assert_eq!(presenter.questions(), ["first?", "second?"]);
    }

    #[tokio::test]
    async fn test_console_reads_each_answer_once() {
        let presenter = ConsolePresenter::with_input(false, &b"y\n  YES \nno\n"[..]);

        assert!(presenter.confirm("first?").await);
        assert!(presenter.confirm("second?").await);
        assert!(!presenter.confirm("third?").await);
        assert!(!presenter.confirm("past the end?").await);
    }

    #[tokio::test]
    async fn test_console_auto_confirm_skips_input() {
        let presenter = ConsolePresenter::with_input(true, &b"no\n"[..]);

        assert!(presenter.confirm("first?").await);
        assert!(presenter.confirm("second?").await);
    }

    #[test]
    fn test_records_notices_in_order() {
        let presenter = ScriptedPresenter::default();
        presenter.notify(Notice::warning("Please select a Pizza"));
        presenter.notify(Notice::success("Pizza Order removed!"));

        assert_eq!(
            presenter.notices(),
            [
                Notice::warning("Please select a Pizza"),
                Notice::success("Pizza Order removed!"),
            ]
        );
        assert_eq!(
            Notice::information("OK !  Add a new Pizza Order.").to_string(),
            "[Information] OK !  Add a new Pizza Order."
        );
    }
}
