//! Text rewrites over a TypeScript file or tree.

use super::Context;
use crate::apply::TransformKind;
use crate::batch::BatchDriver;
use crate::output::{FileReport, OutputFormatter};
use anyhow::Context as _;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct RewriteArgs {
    /// File or directory to rewrite
    pub path: PathBuf,
}

pub fn run(args: &RewriteArgs, kind: TransformKind, ctx: &Context) -> anyhow::Result<i32> {
    let applier = ctx.applier();

    if args.path.is_file() {
        let applied = applier
            .apply_path(&args.path, kind)
            .with_context(|| format!("failed to rewrite {}", args.path.display()))?;
        FileReport::from(applied).print(&ctx.format)?;
        return Ok(0);
    }
    if !args.path.exists() {
        anyhow::bail!("{} does not exist", args.path.display());
    }

    let outcome = BatchDriver::new(&applier)
        .with_skip_dirs(ctx.config.walk.skip_dirs.clone())
        .run(&args.path, kind);
    outcome.print(&ctx.format)?;
    Ok(if outcome.is_success() { 0 } else { 1 })
}
