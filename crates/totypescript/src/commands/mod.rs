//! Command-line surface.

pub mod convert;
pub mod directory;
pub mod rewrite;
pub mod transforms;

use crate::apply::{Applier, TransformKind};
use crate::config::Config;
use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use totypescript_tools::{CommandFixer, Decaffeinate, Transpiler};

/// Convert JavaScript and CoffeeScript to TypeScript.
#[derive(Parser)]
#[command(name = "totypescript", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Project root used for configuration and tool lookup
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log pattern decisions and tool invocations
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert one file to TypeScript and apply code fixes
    Convert(convert::ConvertArgs),

    /// Convert every .js file under a directory to TypeScript
    JsToTs(directory::DirectoryArgs),

    /// Convert every .coffee file under a directory to TypeScript
    CoffeeToTs(directory::DirectoryArgs),

    /// Transpile every .coffee file under a directory to JavaScript
    CoffeeToJs(directory::DirectoryArgs),

    /// Replace AMD define wrappers with import statements
    Imports(rewrite::RewriteArgs),

    /// Add access modifiers to underscored constructor parameters
    Modifiers(rewrite::RewriteArgs),

    /// Replace @bind decorators with constructor bindings
    Unbind(rewrite::RewriteArgs),

    /// List available rewrites
    Transforms,
}

/// Everything a command needs: resolved root, config and tools.
pub struct Context {
    pub root: PathBuf,
    pub config: Config,
    pub format: OutputFormat,
    transpiler: Decaffeinate,
    fixer: Option<CommandFixer>,
}

impl Context {
    pub fn new(root: &Path, config: Config, format: OutputFormat) -> Self {
        let transpiler = Decaffeinate::new(root).with_command(config.transpiler.command.clone());
        let fixer = CommandFixer::new(root, &config.fixes.command);
        Self {
            root: root.to_path_buf(),
            config,
            format,
            transpiler,
            fixer,
        }
    }

    /// Applier wired to the configured tools.
    pub fn applier(&self) -> Applier<'_> {
        let applier = Applier::new(&self.transpiler).with_format(self.config.format_settings());
        match &self.fixer {
            Some(fixer) => applier.with_fixer(fixer, self.config.fixes.ids.clone()),
            None => applier,
        }
    }

    /// Fail early when CoffeeScript input cannot be transpiled.
    pub fn require_transpiler(&self) -> anyhow::Result<()> {
        if self.transpiler.is_available() {
            return Ok(());
        }
        anyhow::bail!(
            "{} not found; install it ({}) or set [transpiler] command in {}",
            self.transpiler.info().name,
            self.transpiler.info().website,
            Config::project_config_path(&self.root).display()
        )
    }
}

/// Run a parsed command line, returning the process exit code.
pub fn run(cli: Cli) -> anyhow::Result<i32> {
    let root = cli.root.unwrap_or_else(|| PathBuf::from("."));
    let config = Config::load(&root);
    let ctx = Context::new(&root, config, OutputFormat::from_cli(cli.json));

    match cli.command {
        Command::Convert(args) => convert::run(&args, &ctx),
        Command::JsToTs(args) => directory::run(&args, directory::Action::JsToTs, &ctx),
        Command::CoffeeToTs(args) => directory::run(&args, directory::Action::CoffeeToTs, &ctx),
        Command::CoffeeToJs(args) => directory::run(&args, directory::Action::CoffeeToJs, &ctx),
        Command::Imports(args) => rewrite::run(&args, TransformKind::RegenerateImports, &ctx),
        Command::Modifiers(args) => rewrite::run(&args, TransformKind::InsertAccessModifiers, &ctx),
        Command::Unbind(args) => rewrite::run(&args, TransformKind::RemoveBindDecorator, &ctx),
        Command::Transforms => transforms::run(&ctx),
    }
}
