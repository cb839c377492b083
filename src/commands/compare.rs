use crate::areas::input::InputSource;
use crate::artifacts::json::format_json;
use crate::artifacts::render::{RenderFlags, RowRenderer};
use crate::domain::engine::{diff_lines, diff_lines_bounded};
use crate::domain::operation::DiffOperation;
use crate::domain::stats::DiffStats;
use crate::OutputFormat;
use serde::Serialize;
use std::cell::{RefCell, RefMut};

#[derive(Debug, Clone)]
pub struct CompareOptions {
    /// Pretty-print both inputs as JSON before comparing.
    pub json: bool,
    /// Upper bound on LCS table cells; `None` compares inputs of any size.
    pub max_cells: Option<usize>,
    pub format: OutputFormat,
    pub render: RenderFlags,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            json: false,
            max_cells: None,
            format: OutputFormat::Rows,
            render: RenderFlags::default(),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'r> {
    stats: DiffStats,
    operations: &'r [DiffOperation],
}

pub struct Comparison {
    left: InputSource,
    right: InputSource,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Comparison {
    pub fn new(
        left: InputSource,
        right: InputSource,
        writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        if left.is_stdin() && right.is_stdin() {
            anyhow::bail!("only one side can be read from stdin");
        }

        Ok(Comparison {
            left,
            right,
            writer: RefCell::new(writer),
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn diff(&self, opts: &CompareOptions) -> anyhow::Result<()> {
        let operations = self.operations(opts)?;

        match opts.format {
            OutputFormat::Rows => {
                let renderer = RowRenderer::new(opts.render);
                for operation in &operations {
                    writeln!(self.writer(), "{}", renderer.render(operation))?;
                }
            }
            OutputFormat::Json => {
                let report = JsonReport {
                    stats: operations.iter().collect(),
                    operations: &operations,
                };
                writeln!(self.writer(), "{}", serde_json::to_string_pretty(&report)?)?;
            }
        }

        Ok(())
    }

    pub fn stat(&self, opts: &CompareOptions) -> anyhow::Result<()> {
        let stats = self.operations(opts)?.iter().collect::<DiffStats>();

        match opts.format {
            OutputFormat::Rows => writeln!(self.writer(), "{stats}")?,
            OutputFormat::Json => writeln!(self.writer(), "{}", serde_json::to_string(&stats)?)?,
        }

        Ok(())
    }

    fn operations(&self, opts: &CompareOptions) -> anyhow::Result<Vec<DiffOperation>> {
        let left = self.load(&self.left, opts)?;
        let right = self.load(&self.right, opts)?;

        match opts.max_cells {
            Some(max_cells) => Ok(diff_lines_bounded(&left, &right, max_cells)?),
            None => Ok(diff_lines(&left, &right)),
        }
    }

    fn load(&self, source: &InputSource, opts: &CompareOptions) -> anyhow::Result<String> {
        log::debug!("reading {source}");
        let text = source.read_to_string()?;

        if !opts.json {
            return Ok(text);
        }

        format_json(&text).map_err(|e| anyhow::anyhow!("{source}: {e}"))
    }
}
