//! Output sinks
//!
//! Commands write through a boxed `std::io::Write`. When the output goes to an
//! interactive terminal it is collected into the `minus` pager instead and shown
//! once the command has finished.

use minus::Pager;
use std::io::{self, Write};

pub enum OutputSink {
    Stdout(io::Stdout),
    Pager(Pager),
}

impl OutputSink {
    pub fn stdout() -> Self {
        OutputSink::Stdout(io::stdout())
    }

    pub fn pager() -> Self {
        OutputSink::Pager(Pager::new())
    }

    /// Pick the pager only when paging is wanted and stdout is a terminal.
    pub fn detect(paging: bool) -> Self {
        use is_terminal::IsTerminal;

        if paging && io::stdout().is_terminal() {
            Self::pager()
        } else {
            Self::stdout()
        }
    }

    /// Handle to the underlying pager, if any. Writes through the sink land in it.
    pub fn pager_handle(&self) -> Option<Pager> {
        match self {
            OutputSink::Pager(pager) => Some(pager.clone()),
            OutputSink::Stdout(_) => None,
        }
    }
}

/// Show everything collected by a pager sink; a no-op without one.
pub fn show_paged(pager: Option<Pager>) -> anyhow::Result<()> {
    if let Some(pager) = pager {
        minus::page_all(pager)?;
    }

    Ok(())
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputSink::Stdout(stdout) => stdout.write(buf),
            OutputSink::Pager(pager) => {
                let s = std::str::from_utf8(buf)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                pager.push_str(s).map_err(io::Error::other)?;
                Ok(buf.len())
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputSink::Stdout(stdout) => stdout.flush(),
            OutputSink::Pager(_) => Ok(()),
        }
    }
}
