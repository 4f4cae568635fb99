use anyhow::{Ok, Result, anyhow};

use super::super::args::QueryCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary, QuerySummary},
};

use crate::catalog::CheckContext;

pub fn query(cmd: QueryCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.args.common)?;

    let language = match &cmd.language {
        Some(language) => language.clone(),
        None => single_language(&ctx)?,
    };

    let translator = ctx.translator_for(&language).ok_or_else(|| {
        anyhow!(
            "No catalog loaded for language '{}'. Available: {}",
            language,
            available_languages(&ctx).join(", ")
        )
    })?;

    let matched = translator
        .entry(&cmd.context, &cmd.source, cmd.comment.as_deref())
        .is_some_and(|t| t.is_usable());
    let resolved = translator
        .translate(&cmd.context, &cmd.source, cmd.comment.as_deref(), cmd.count)
        .to_string();

    let messages_checked = ctx.catalogs.iter().map(|c| c.message_count()).sum();
    let catalogs_checked = ctx.catalogs.len();

    Ok(finish(
        CommandSummary::Query(QuerySummary {
            language,
            resolved,
            matched,
        }),
        Vec::new(),
        catalogs_checked,
        messages_checked,
        false,
    ))
}

/// The only loaded language, or an error telling the user to pick one.
fn single_language(ctx: &CheckContext) -> Result<String> {
    let mut languages = available_languages(ctx);
    match languages.len() {
        0 => Err(anyhow!(
            "No catalogs found under '{}'.",
            ctx.catalogs_dir.display()
        )),
        1 => Ok(languages.remove(0)),
        _ => Err(anyhow!(
            "Several catalogs are loaded ({}); pick one with --language.",
            languages.join(", ")
        )),
    }
}

fn available_languages(ctx: &CheckContext) -> Vec<String> {
    let mut languages: Vec<String> = ctx.translators().keys().cloned().collect();
    languages.sort();
    languages
}
