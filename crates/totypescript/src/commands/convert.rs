//! Convert command - one file to TypeScript.

use super::Context;
use crate::apply::TransformKind;
use crate::output::{FileReport, OutputFormatter};
use crate::source::{self, Language};
use anyhow::Context as _;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct ConvertArgs {
    /// JavaScript, CoffeeScript or TypeScript file
    pub file: PathBuf,
}

pub fn run(args: &ConvertArgs, ctx: &Context) -> anyhow::Result<i32> {
    let unit = source::open_document(&args.file)
        .with_context(|| format!("cannot convert {}", args.file.display()))?;
    if unit.language == Language::CoffeeScript {
        ctx.require_transpiler()?;
    }

    let applied = ctx
        .applier()
        .apply(&unit, TransformKind::StandardFixes)
        .with_context(|| format!("failed to convert {}", args.file.display()))?;

    FileReport::from(applied).print(&ctx.format)?;
    Ok(0)
}
