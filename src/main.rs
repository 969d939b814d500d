//! mindmap-ascii CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::Level;

use mindmap_ascii::shell::Shell;
use mindmap_ascii::{
    BlankLines, ImageFormat, IndentConfig, Notice, RenderConfig, Session, SessionConfig, Target,
};

/// Mind maps and indented-text flowcharts as ASCII/Unicode, SVG or PNG.
#[derive(Parser, Debug)]
#[command(
    name = "mindmap-ascii",
    version = env!("MINDMAP_ASCII_VERSION"),
    about = "Mind maps and indented-text flowcharts as ASCII/Unicode, SVG or PNG"
)]
struct Cli {
    /// Log more (-v debug, -vv trace); logs go to stderr
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw a flowchart from indented lines
    Flow {
        /// Input file (reads from stdin if not provided)
        input: Option<PathBuf>,

        #[command(flatten)]
        out: OutputArgs,

        /// Advance tabs to the next multiple of N columns
        #[arg(long = "tab-width")]
        tab_width: Option<usize>,

        /// Turn empty lines into empty-labelled nodes
        #[arg(long = "keep-blank-lines")]
        keep_blank_lines: bool,
    },
    /// Draw a node-link JSON mind map
    Map {
        /// Input JSON file (reads from stdin if not provided)
        input: Option<PathBuf>,

        #[command(flatten)]
        out: OutputArgs,
    },
    /// Edit a mind map interactively
    Shell {
        /// Node-link JSON file to start from
        #[arg(long)]
        load: Option<PathBuf>,

        /// Use plain ASCII instead of Unicode box-drawing characters
        #[arg(short = 'a', long = "ascii")]
        use_ascii: bool,
    },
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Use plain ASCII instead of Unicode box-drawing characters
    #[arg(short = 'a', long = "ascii")]
    use_ascii: bool,

    /// Node padding (spaces inside border)
    #[arg(short = 'p', long = "padding", default_value = "1")]
    padding: usize,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Output format; defaults to the output file's extension, else text
    #[arg(short = 'f', long = "format", value_enum)]
    format: Option<Format>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Text,
    Svg,
    #[cfg(feature = "png")]
    Png,
    Json,
}

impl OutputArgs {
    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            unicode: !self.use_ascii,
            padding: self.padding,
        }
    }

    fn resolved_format(&self) -> Format {
        if let Some(f) = self.format {
            return f;
        }
        let ext = self
            .output
            .as_ref()
            .and_then(|p| p.extension())
            .and_then(|e| e.to_str())
            .unwrap_or("");
        if ext.eq_ignore_ascii_case("json") {
            return Format::Json;
        }
        match ImageFormat::from_extension(ext) {
            Some(ImageFormat::Svg) => Format::Svg,
            #[cfg(feature = "png")]
            Some(ImageFormat::Png) => Format::Png,
            _ => Format::Text,
        }
    }
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

fn exit_with(notice: &Notice) -> ! {
    eprintln!("{}", notice.message());
    process::exit(1);
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_input(input: Option<&PathBuf>) -> Vec<u8> {
    match input {
        Some(path) => fs::read(path)
            .unwrap_or_else(|e| fail(format!("cannot read '{}': {e}", path.display()))),
        None => {
            let mut buf = Vec::new();
            if let Err(e) = io::stdin().read_to_end(&mut buf) {
                fail(format!("cannot read stdin: {e}"));
            }
            buf
        }
    }
}

fn write_output(bytes: &[u8], output: Option<&PathBuf>) {
    if let Some(path) = output {
        if let Err(e) = fs::write(path, bytes) {
            fail(format!("cannot write '{}': {e}", path.display()));
        }
    } else {
        let mut stdout = io::stdout();
        if let Err(e) = stdout.write_all(bytes).and_then(|()| stdout.flush()) {
            fail(format!("cannot write stdout: {e}"));
        }
    }
}

/// Produce the bytes for one graph of `session` in the requested format.
fn export(session: &Session, target: Target, format: Format) -> Vec<u8> {
    let image = match format {
        Format::Text => ImageFormat::Text,
        Format::Svg => ImageFormat::Svg,
        #[cfg(feature = "png")]
        Format::Png => ImageFormat::Png,
        Format::Json => {
            if target == Target::Flowchart {
                fail("JSON output is only available for mind maps");
            }
            return session
                .export_json()
                .map(|d| d.bytes)
                .unwrap_or_else(|e| exit_with(&Notice::Error(e.to_string())));
        }
    };
    session
        .export_image(target, image)
        .map(|d| d.bytes)
        .unwrap_or_else(|e| exit_with(&Notice::Error(e.to_string())))
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Flow {
            input,
            out,
            tab_width,
            keep_blank_lines,
        } => {
            let blank_lines = if keep_blank_lines {
                BlankLines::Keep
            } else {
                BlankLines::Skip
            };
            let config = SessionConfig {
                render: out.render_config(),
                indent: IndentConfig::new()
                    .with_blank_lines(blank_lines)
                    .with_tab_width(tab_width),
            };
            let bytes = read_input(input.as_ref());
            let text = String::from_utf8_lossy(&bytes);
            let mut session = Session::new(config);
            session.generate_flowchart(&text);
            let rendered = export(&session, Target::Flowchart, out.resolved_format());
            write_output(&rendered, out.output.as_ref());
        }
        Command::Map { input, out } => {
            let config = SessionConfig {
                render: out.render_config(),
                ..SessionConfig::default()
            };
            let bytes = read_input(input.as_ref());
            let mut session = Session::new(config);
            let notice = session.import_json(&bytes);
            if notice.is_error() {
                exit_with(&notice);
            }
            let rendered = export(&session, Target::MindMap, out.resolved_format());
            write_output(&rendered, out.output.as_ref());
        }
        Command::Shell { load, use_ascii } => {
            let config = SessionConfig {
                render: RenderConfig {
                    unicode: !use_ascii,
                    ..RenderConfig::default()
                },
                ..SessionConfig::default()
            };
            let mut session = Session::new(config);
            if let Some(path) = load {
                let bytes = read_input(Some(&path));
                let notice = session.import_json(&bytes);
                if notice.is_error() {
                    exit_with(&notice);
                }
            }
            let stdin = io::stdin();
            let mut shell = Shell::new(session, stdin.lock(), io::stdout()).with_prompt(true);
            if let Err(e) = shell.run() {
                fail(e);
            }
        }
    }
}
