//! Menu-driven session
//!
//! Reads a graph, then loops over a numbered menu until `0` or end of
//! input. After each algorithm the session offers to save the graph with
//! the result highlighted. Algorithm failures (bad vertex, no path, disconnected graph) are
//! reported and the menu comes back; only broken input or output ends the
//! session with an error.

use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::debug;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::render;
use crate::commands::visualize::{NodeRole, VisualGraph};
use graphkit_core::error::Result;
use graphkit_core::graph::{
    minimum_spanning_tree, read_graph, shortest_path, spanning_tree, Graph, MstAlgorithm,
    TraversalKind, TraversalOptions, VertexId,
};

const MENU: &str = "\
Select operation:
1) Spanning tree from source (DFS)
2) Spanning tree from source (BFS)
3) Shortest path (Dijkstra) from source to target
4) Prim's MST
5) Kruskal's MST
6) Visualize graph (JSON)
7) Print adjacency list
0) Exit";

/// Knobs a session needs from the CLI and config
#[derive(Debug, Clone, Copy)]
pub struct SessionSettings {
    pub format: OutputFormat,
    pub traversal: TraversalOptions,
    pub prim_start: VertexId,
    /// Skip the menu and prompts
    pub quiet: bool,
}

impl SessionSettings {
    pub fn from_context(ctx: &CommandContext) -> Self {
        Self {
            format: ctx.cli.format,
            traversal: ctx.traversal_options(),
            prim_start: ctx.prim_start(None),
            quiet: ctx.cli.quiet,
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            traversal: TraversalOptions::default(),
            prim_start: 1,
            quiet: false,
        }
    }
}

enum Step {
    Continue,
    Exit,
}

enum Reply<T> {
    Value(T),
    Retry,
    Eof,
}

/// Unwrap a prompt reply or leave the current menu action
macro_rules! ask {
    ($reply:expr) => {
        match $reply {
            Reply::Value(value) => value,
            Reply::Retry => return Ok(Step::Continue),
            Reply::Eof => return Ok(Step::Exit),
        }
    };
}

pub struct Session<'g, R, W> {
    graph: &'g Graph,
    settings: SessionSettings,
    input: R,
    out: W,
}

impl<'g, R: BufRead, W: Write> Session<'g, R, W> {
    pub fn new(graph: &'g Graph, settings: SessionSettings, input: R, out: W) -> Self {
        Self {
            graph,
            settings,
            input,
            out,
        }
    }

    /// Run the menu loop until exit or end of input
    pub fn run(&mut self) -> Result<()> {
        loop {
            if !self.settings.quiet {
                writeln!(self.out)?;
                writeln!(self.out, "{}", MENU)?;
            }
            let choice = match self.prompt("Choice: ")? {
                Some(choice) => choice,
                None => break,
            };
            debug!(choice = %choice, "menu_choice");

            let step = match choice.as_str() {
                "0" => Step::Exit,
                "1" => self.traverse(TraversalKind::Dfs)?,
                "2" => self.traverse(TraversalKind::Bfs)?,
                "3" => self.path()?,
                "4" => self.mst(MstAlgorithm::Prim)?,
                "5" => self.mst(MstAlgorithm::Kruskal)?,
                "6" => self.visualize()?,
                "7" => {
                    render::adjacency(&mut self.out, self.settings.format, self.graph)?;
                    Step::Continue
                }
                _ => {
                    writeln!(self.out, "Invalid choice")?;
                    Step::Continue
                }
            };

            if let Step::Exit = step {
                break;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn traverse(&mut self, kind: TraversalKind) -> Result<Step> {
        let source = ask!(self.ask_vertex("Start node: ")?);
        let result = spanning_tree(self.graph, kind, source, &self.settings.traversal);
        let Some(tree) = self.report(result, render::spanning_tree)? else {
            return Ok(Step::Continue);
        };

        let mut visual =
            VisualGraph::new(self.graph).with_title(format!("{} spanning tree", kind));
        visual.highlight_tree(&tree);
        self.offer_export(visual)
    }

    fn path(&mut self) -> Result<Step> {
        let source = ask!(self.ask_vertex("Source node: ")?);
        let target = ask!(self.ask_vertex("Target node: ")?);
        let result = shortest_path(self.graph, source, target);
        let Some(path) = self.report(result, render::shortest_path)? else {
            return Ok(Step::Continue);
        };

        let mut visual = VisualGraph::new(self.graph)
            .with_title(format!("shortest path {} -> {}", path.source, path.target));
        visual.highlight_path(&path);
        self.offer_export(visual)
    }

    fn mst(&mut self, algorithm: MstAlgorithm) -> Result<Step> {
        let prim_start = self.settings.prim_start;
        let result = minimum_spanning_tree(self.graph, algorithm, prim_start);
        let Some(mst) = self.report(result, render::minimum_spanning_tree)? else {
            return Ok(Step::Continue);
        };

        let mut visual = VisualGraph::new(self.graph)
            .with_title(format!("{} minimum spanning tree", algorithm.display_name()));
        if algorithm == MstAlgorithm::Prim {
            visual.mark(prim_start, NodeRole::Source);
        }
        visual.highlight_mst(&mst);
        self.offer_export(visual)
    }

    /// Ask for a file to save the highlighted result to; blank skips
    fn offer_export(&mut self, visual: VisualGraph) -> Result<Step> {
        let file = match self.prompt("Export visualization (blank to skip): ")? {
            Some(file) => file,
            None => return Ok(Step::Exit),
        };
        if file.is_empty() {
            return Ok(Step::Continue);
        }

        self.save_visual(&visual, file)?;
        Ok(Step::Continue)
    }

    fn visualize(&mut self) -> Result<Step> {
        let file = match self.prompt("Output file (blank for stdout): ")? {
            Some(file) => file,
            None => return Ok(Step::Exit),
        };
        let visual = VisualGraph::new(self.graph).with_title("graph");

        if file.is_empty() {
            visual.write(&mut self.out)?;
        } else {
            self.save_visual(&visual, file)?;
        }
        Ok(Step::Continue)
    }

    fn save_visual(&mut self, visual: &VisualGraph, file: String) -> Result<()> {
        let result = visual.save(Path::new(&file)).map(|()| file);
        self.report(result, |out, _, file| {
            writeln!(out, "Visualization written to {}", file)?;
            Ok(())
        })?;
        Ok(())
    }

    /// Render a successful result and hand it back, or print a recoverable
    /// error and carry on with `None`
    fn report<T>(
        &mut self,
        result: Result<T>,
        render: impl FnOnce(&mut dyn Write, OutputFormat, &T) -> Result<()>,
    ) -> Result<Option<T>> {
        match result {
            Ok(value) => {
                render(&mut self.out, self.settings.format, &value)?;
                Ok(Some(value))
            }
            Err(e) if e.is_recoverable() => {
                if self.settings.format == OutputFormat::Json {
                    writeln!(self.out, "{}", e.to_json())?;
                } else {
                    writeln!(self.out, "error: {}", e)?;
                }
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn ask_vertex(&mut self, text: &str) -> Result<Reply<VertexId>> {
        let answer = match self.prompt(text)? {
            Some(answer) => answer,
            None => return Ok(Reply::Eof),
        };
        match answer.parse::<VertexId>() {
            Ok(vertex) => Ok(Reply::Value(vertex)),
            Err(_) => {
                writeln!(self.out, "Invalid vertex '{}'", answer)?;
                Ok(Reply::Retry)
            }
        }
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        if !self.settings.quiet {
            write!(self.out, "{}", text)?;
            self.out.flush()?;
        }
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Execute the interactive command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let settings = SessionSettings::from_context(ctx);
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let graph = match &ctx.cli.input {
        Some(_) => ctx.load_graph()?,
        None => {
            if !ctx.cli.quiet {
                println!("Enter graph: first line 'N M', then M lines 'u v [w]'.");
            }
            read_graph(&mut input, &ctx.config.input_options())?
        }
    };

    let stdout = io::stdout();
    Session::new(&graph, settings, input, stdout.lock()).run()
}
