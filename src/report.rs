//! Human-readable status lines on standard output.

use chrono::{DateTime, Utc};
use std::io::Write;

pub struct Reporter<W> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn table_ready(&mut self) -> std::io::Result<()> {
        writeln!(self.out, "Table 'users' created or already exists.")
    }

    pub fn user_inserted(&mut self, username: &str) -> std::io::Result<()> {
        writeln!(self.out, "User {username} inserted successfully")
    }

    pub fn current_time(&mut self, now: &DateTime<Utc>) -> std::io::Result<()> {
        writeln!(self.out, "Current time: {now}")
    }

    pub fn developer(&mut self, developer: &str) -> std::io::Result<()> {
        writeln!(self.out, "Developer: {developer}")?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
