//! Transforms command - list registered rewrites.

use super::Context;
use crate::output::{OutputFormatter, TransformInfo, TransformList};

pub fn run(ctx: &Context) -> anyhow::Result<i32> {
    let list = TransformList {
        transforms: totypescript_transforms::transforms()
            .into_iter()
            .map(|t| TransformInfo {
                name: t.name(),
                description: t.description(),
            })
            .collect(),
    };
    list.print(&ctx.format)?;
    Ok(0)
}
