use anyhow::{Ok, Result};

use super::super::args::StatsCommand;
use super::{
    helper::finish,
    {CatalogStats, CommandResult, CommandSummary, ContextStats, StatsSummary},
};

use crate::catalog::{Catalog, CheckContext, TranslationState};
use crate::issues::Issue;

pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.args.common)?;

    let catalogs: Vec<CatalogStats> = ctx.catalogs.iter().map(catalog_stats).collect();

    let parse_errors: Vec<Issue> = ctx
        .parse_errors()
        .iter()
        .map(|i| Issue::ParseError(i.clone()))
        .collect();

    let messages_checked = ctx.catalogs.iter().map(|c| c.message_count()).sum();
    let catalogs_checked = ctx.catalogs.len();

    Ok(finish(
        CommandSummary::Stats(StatsSummary {
            format: cmd.format,
            catalogs,
        }),
        parse_errors,
        catalogs_checked,
        messages_checked,
        false,
    ))
}

fn catalog_stats(catalog: &Catalog) -> CatalogStats {
    let mut finished = 0;
    let mut unfinished = 0;
    let mut stale = 0;

    let contexts = catalog
        .contexts
        .iter()
        .map(|context| {
            let context_finished = context
                .messages
                .iter()
                .filter(|m| m.translation.state == TranslationState::Finished)
                .count();
            for message in &context.messages {
                match message.translation.state {
                    TranslationState::Finished => finished += 1,
                    TranslationState::Unfinished => unfinished += 1,
                    TranslationState::Vanished | TranslationState::Obsolete => stale += 1,
                }
            }
            ContextStats {
                name: context.name.clone(),
                finished: context_finished,
                total: context.messages.len(),
            }
        })
        .collect();

    CatalogStats {
        language: catalog.language_key(),
        file_path: catalog.file_path.clone(),
        finished,
        unfinished,
        stale,
        total: catalog.message_count(),
        contexts,
    }
}
