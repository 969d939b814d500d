//! Interactive line-oriented host for a [`Session`].
//!
//! Each input line is one command, parsed with clap:
//!
//! ```text
//! > node "Big Idea" --color "#ff8800" --size 600
//! > node Detail
//! > edge "Big Idea" Detail
//! > flow
//! Root
//!   Child
//! end
//! > save flow chart.png
//! ```
//!
//! The mind map is redrawn after every command that changes it.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use crate::graph::style::{DEFAULT_COLOR, DEFAULT_SIZE, MAX_EDITOR_SIZE, MIN_EDITOR_SIZE};
use crate::graph::{Color, NodeSize, NodeStyle};
use crate::parsers::split_words;
use crate::session::{Download, ImageFormat, Notice, Session, Target};

/// Unindented line that ends a `flow` block. An indented `end` is a node.
pub const FLOW_TERMINATOR: &str = "end";

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a node, or restyle an existing one
    Node {
        label: String,
        #[arg(short, long, default_value = DEFAULT_COLOR)]
        color: Color,
        #[arg(
            short,
            long,
            default_value_t = DEFAULT_SIZE,
            value_parser = clap::value_parser!(u32).range(MIN_EDITOR_SIZE as i64..=MAX_EDITOR_SIZE as i64)
        )]
        size: u32,
    },
    /// Connect two existing nodes
    Edge { source: String, target: String },
    /// Clear the mind map
    Reset,
    /// Build the flowchart from indented lines (typed until an unindented `end`, or from a file)
    Flow {
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Draw a graph
    Show {
        #[arg(value_enum, default_value_t = Which::Map)]
        which: Which,
    },
    /// List node labels
    Nodes,
    /// Save the mind map as node-link JSON
    Export { path: PathBuf },
    /// Replace the mind map with a node-link JSON file
    Import { path: PathBuf },
    /// Save a graph; the format follows the extension (.txt, .svg, .png, .json)
    Save {
        #[arg(value_enum)]
        which: Which,
        path: PathBuf,
    },
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Which {
    Map,
    Flow,
}

impl From<Which> for Target {
    fn from(w: Which) -> Self {
        match w {
            Which::Map => Target::MindMap,
            Which::Flow => Target::Flowchart,
        }
    }
}

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

/// Interactive shell over any reader/writer pair.
pub struct Shell<R, W> {
    session: Session,
    input: R,
    output: W,
    prompt: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(session: Session, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
            prompt: false,
        }
    }

    /// Print a `> ` prompt before each command.
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_session(self) -> Session {
        self.session
    }

    /// Run until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            if self.prompt {
                write!(self.output, "> ")?;
                self.output.flush()?;
            }
            let Some(line) = self.read_line()? else {
                break;
            };
            if self.execute(&line)? == Step::Quit {
                break;
            }
        }
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed = buf.strip_suffix('\n').unwrap_or(&buf);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }

    /// Read an indented block up to the terminator line or end of input.
    fn read_block(&mut self) -> io::Result<String> {
        let mut lines = Vec::new();
        while let Some(line) = self.read_line()? {
            if line.trim_end() == FLOW_TERMINATOR {
                break;
            }
            lines.push(line);
        }
        Ok(lines.join("\n"))
    }

    /// Execute one command line.
    pub fn execute(&mut self, line: &str) -> io::Result<Step> {
        let words = match split_words(line) {
            Ok(words) => words,
            Err(e) => {
                self.notice(&Notice::Error(format!("Error reading command: {e}")))?;
                return Ok(Step::Continue);
            }
        };
        if words.is_empty() || words[0].starts_with('#') {
            return Ok(Step::Continue);
        }
        let command = match Line::try_parse_from(&words) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                write!(self.output, "{e}")?;
                return Ok(Step::Continue);
            }
        };
        debug!(?command, "shell command");

        match command {
            Command::Node { label, color, size } => {
                let size = NodeSize::new(size).unwrap_or_default();
                let notice = self.session.add_node(&label, NodeStyle::new(color, size));
                self.after_edit(notice)?;
            }
            Command::Edge { source, target } => {
                let notice = self.session.add_edge(&source, &target);
                self.after_edit(notice)?;
            }
            Command::Reset => {
                let notice = self.session.reset();
                self.after_edit(Some(notice))?;
            }
            Command::Flow { file } => {
                let text = match file {
                    Some(path) => match std::fs::read_to_string(&path) {
                        Ok(text) => text,
                        Err(e) => {
                            let msg = format!("Error reading '{}': {e}", path.display());
                            self.notice(&Notice::Error(msg))?;
                            return Ok(Step::Continue);
                        }
                    },
                    None => self.read_block()?,
                };
                let notice = self.session.generate_flowchart(&text);
                self.notice(&notice)?;
                self.show(Target::Flowchart)?;
            }
            Command::Show { which } => self.show(which.into())?,
            Command::Nodes => {
                for label in self.session.mind_map().labels() {
                    writeln!(self.output, "{label}")?;
                }
            }
            Command::Export { path } => {
                let result = self.session.export_json();
                self.write_download(result, &path)?;
            }
            Command::Import { path } => {
                let notice = match std::fs::read(&path) {
                    Ok(bytes) => self.session.import_json(&bytes),
                    Err(e) => Notice::Error(format!("Error reading '{}': {e}", path.display())),
                };
                let failed = notice.is_error();
                self.notice(&notice)?;
                if !failed {
                    self.show(Target::MindMap)?;
                }
            }
            Command::Save { which, path } => {
                let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
                if ext.eq_ignore_ascii_case("json") {
                    if which == Which::Map {
                        let result = self.session.export_json();
                        self.write_download(result, &path)?;
                    } else {
                        let msg = "Error saving: only the mind map can be saved as JSON".to_string();
                        self.notice(&Notice::Error(msg))?;
                    }
                    return Ok(Step::Continue);
                }
                match ImageFormat::from_extension(ext) {
                    Some(format) => {
                        let result = self.session.export_image(which.into(), format);
                        self.write_download(result, &path)?;
                    }
                    None => {
                        let msg = format!("Error saving: unsupported image extension '{ext}'");
                        self.notice(&Notice::Error(msg))?;
                    }
                }
            }
            Command::Quit => return Ok(Step::Quit),
        }
        Ok(Step::Continue)
    }

    fn notice(&mut self, notice: &Notice) -> io::Result<()> {
        writeln!(self.output, "{notice}")
    }

    fn after_edit(&mut self, notice: Option<Notice>) -> io::Result<()> {
        if let Some(notice) = notice {
            self.notice(&notice)?;
        }
        self.show(Target::MindMap)
    }

    fn show(&mut self, target: Target) -> io::Result<()> {
        let drawing = self.session.render_text(target);
        if drawing.is_empty() {
            let hint = match target {
                Target::MindMap => "No nodes in the mind map yet. Add some with `node`!",
                Target::Flowchart => "No flowchart yet. Type `flow` and some indented lines.",
            };
            writeln!(self.output, "{hint}")
        } else {
            write!(self.output, "{drawing}")
        }
    }

    fn write_download(&mut self, download: crate::Result<Download>, path: &Path) -> io::Result<()> {
        let notice = match download {
            Ok(d) => match std::fs::write(path, &d.bytes) {
                Ok(()) => Notice::Success(format!(
                    "Saved {} ({}, {} bytes) to {}",
                    d.file_name,
                    d.mime,
                    d.bytes.len(),
                    path.display()
                )),
                Err(e) => Notice::Error(format!("Error writing '{}': {e}", path.display())),
            },
            Err(e) => Notice::Error(e.to_string()),
        };
        self.notice(&notice)
    }
}
