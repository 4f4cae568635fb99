use anyhow::{Ok, Result};
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary},
};

use crate::{
    catalog::CheckContext,
    issues::Issue,
    rules::{
        duplicates::check_duplicate_issues, empty::check_empty_issues,
        placeholders::check_placeholder_issues, plural_forms::check_plural_forms_issues,
        unfinished::check_unfinished_issues,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    Unfinished,
    Empty,
    Duplicate,
    PluralForms,
    Placeholders,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::Unfinished,
            CheckRule::Empty,
            CheckRule::Duplicate,
            CheckRule::PluralForms,
            CheckRule::Placeholders,
        ]
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let checks = &cmd.checks;
    let ctx = CheckContext::new(&args.common)?;

    let checks = if checks.is_empty() {
        CheckRule::all()
    } else {
        checks.clone()
    };

    let mut all_issues: Vec<Issue> = Vec::new();

    for check in checks {
        match check {
            CheckRule::Unfinished => {
                let issues = check_unfinished_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::Unfinished));
            }
            CheckRule::Empty => {
                let issues = check_empty_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::EmptyTranslation));
            }
            CheckRule::Duplicate => {
                let issues = check_duplicate_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::DuplicateMessage));
            }
            CheckRule::PluralForms => {
                let issues = check_plural_forms_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::PluralForms));
            }
            CheckRule::Placeholders => {
                let issues = check_placeholder_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::Placeholders));
            }
        }
    }

    let parse_errors = ctx.parse_errors();
    all_issues.extend(parse_errors.iter().map(|i| Issue::ParseError(i.clone())));

    let messages_checked = ctx.catalogs.iter().map(|c| c.message_count()).sum();

    Ok(finish(
        CommandSummary::Check,
        all_issues,
        ctx.catalogs.len(),
        messages_checked,
        true,
    ))
}
