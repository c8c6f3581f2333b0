//! Directory conversions: JavaScript or CoffeeScript trees.

use super::Context;
use crate::apply::TransformKind;
use crate::batch::BatchDriver;
use crate::output::OutputFormatter;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct DirectoryArgs {
    /// Directory to convert (defaults to the project root)
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    JsToTs,
    CoffeeToTs,
    CoffeeToJs,
}

impl Action {
    fn extension(&self) -> &'static str {
        match self {
            Action::JsToTs => "js",
            Action::CoffeeToTs | Action::CoffeeToJs => "coffee",
        }
    }

    fn kind(&self) -> TransformKind {
        match self {
            Action::JsToTs | Action::CoffeeToTs => TransformKind::StandardFixes,
            Action::CoffeeToJs => TransformKind::CoffeeToJs,
        }
    }
}

pub fn run(args: &DirectoryArgs, action: Action, ctx: &Context) -> anyhow::Result<i32> {
    let dir = args.dir.clone().unwrap_or_else(|| ctx.root.clone());
    if !dir.exists() {
        anyhow::bail!("{} does not exist", dir.display());
    }
    if action != Action::JsToTs {
        ctx.require_transpiler()?;
    }

    let applier = ctx.applier();
    let outcome = BatchDriver::new(&applier)
        .with_skip_dirs(ctx.config.walk.skip_dirs.clone())
        .run_with_extension(&dir, action.extension(), action.kind());

    outcome.print(&ctx.format)?;
    Ok(if outcome.is_success() { 0 } else { 1 })
}
