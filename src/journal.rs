//! Session journal: one JSON object per line for every drained session event.
//!
//! ```text
//! {"seq":0,"type":"start","seed":42}
//! {"seq":1,"type":"locked","shape":"i","color":"blue_light","x":5,"y":16}
//! {"seq":2,"type":"rows_cleared","rows":1,"score":100}
//! ```
//!
//! A failed write turns the journal off (with one stderr line) instead of
//! interrupting the game.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::types::SessionEvent;

/// One journal record body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JournalEntry {
    Start { seed: u32 },
    Locked {
        shape: &'static str,
        color: &'static str,
        x: i32,
        y: i32,
    },
    RowsCleared { rows: u32, score: u32 },
    SpeedChanged { seconds_per_tick: f64 },
    Reset { final_score: u32 },
    Quit { score: u32 },
}

impl From<SessionEvent> for JournalEntry {
    fn from(event: SessionEvent) -> Self {
        match event {
            SessionEvent::Locked { shape, x, y } => JournalEntry::Locked {
                shape: shape.as_str(),
                color: shape.color().as_str(),
                x,
                y,
            },
            SessionEvent::RowsCleared { rows, score } => JournalEntry::RowsCleared { rows, score },
            SessionEvent::SpeedChanged { seconds_per_tick } => {
                JournalEntry::SpeedChanged { seconds_per_tick }
            }
            SessionEvent::Reset { final_score } => JournalEntry::Reset { final_score },
        }
    }
}

#[derive(Serialize)]
struct JournalLine {
    seq: u64,
    #[serde(flatten)]
    entry: JournalEntry,
}

pub struct SessionJournal<W: Write = BufWriter<File>> {
    out: Option<W>,
    seq: u64,
    buf: Vec<u8>,
}

impl SessionJournal<BufWriter<File>> {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open journal {}", path.display()))?;
        Ok(Self::with_writer(BufWriter::new(file)))
    }
}

impl<W: Write> SessionJournal<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out: Some(out),
            seq: 0,
            buf: Vec::with_capacity(256),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    /// Number of records written so far.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Append one record. No-op once the journal has been disabled.
    pub fn record(&mut self, entry: impl Into<JournalEntry>) {
        let Some(out) = self.out.as_mut() else {
            return;
        };
        let line = JournalLine {
            seq: self.seq,
            entry: entry.into(),
        };

        self.buf.clear();
        let written = match serde_json::to_writer(&mut self.buf, &line) {
            Ok(()) => {
                self.buf.push(b'\n');
                out.write_all(&self.buf).map_err(anyhow::Error::from)
            }
            Err(e) => Err(e.into()),
        };
        match written {
            Ok(()) => self.seq += 1,
            Err(e) => self.disable(&e),
        }
    }

    /// Append every event in order.
    pub fn record_all(&mut self, events: impl IntoIterator<Item = SessionEvent>) {
        for event in events {
            self.record(event);
        }
    }

    pub fn flush(&mut self) {
        let Some(out) = self.out.as_mut() else {
            return;
        };
        if let Err(e) = out.flush() {
            self.disable(&anyhow::Error::from(e));
        }
    }

    /// Flush and hand back the writer (if still enabled).
    pub fn into_inner(mut self) -> Option<W> {
        self.flush();
        self.out.take()
    }

    fn disable(&mut self, err: &anyhow::Error) {
        eprintln!("[blockfall] journal disabled: {:#}", err);
        self.out = None;
    }
}
