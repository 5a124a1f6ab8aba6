use std::io;
use std::thread;

use crate::models::{Book, ChapterContent, FocusedVerse};
use crate::services::DiscoveryError;

/// Unit of background work. Jobs report back through the session's
/// completion channel instead of touching session state.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Runs background jobs for the session.
pub trait Executor {
    fn spawn(&self, name: &str, job: Job) -> io::Result<()>;
}

/// Production executor: one short-lived thread per job.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadExecutor;

impl Executor for ThreadExecutor {
    fn spawn(&self, name: &str, job: Job) -> io::Result<()> {
        thread::Builder::new()
            .name(name.to_string())
            .spawn(job)
            .map(|_| ())
    }
}

/// Runs the job on the caller's thread before returning. The completion is
/// still only applied on the next `tick`.
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineExecutor;

impl Executor for InlineExecutor {
    fn spawn(&self, _name: &str, job: Job) -> io::Result<()> {
        job();
        Ok(())
    }
}

/// Results delivered from background jobs to the session.
#[derive(Debug)]
pub(crate) enum Completion {
    Chapter {
        generation: u64,
        book: &'static Book,
        chapter: u32,
        verse_to_jump: Option<u32>,
        content: Option<ChapterContent>,
    },
    Discovery {
        generation: u64,
        outcome: Result<FocusedVerse, DiscoveryError>,
    },
    ChapterTitle {
        book: &'static str,
        chapter: u32,
        title: String,
    },
}
