use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input, Select};

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::CompletionClient;

const RELOAD_OPTION_LABEL: &str = "[reload file]";
const QUIT_OPTION_LABEL: &str = "[quit]";

enum ChallengeChoice {
    Selected(String),
    Reload,
    Quit,
}

enum DraftAction {
    Regenerate,
    Back,
    Quit,
}

/// Menu loop: pick a challenge, enter a company, generate and regenerate drafts.
pub fn run<C: CompletionClient>(ctx: &AppContext<C>) -> Result<(), AppError> {
    loop {
        let challenge = match prompt_challenge(ctx)? {
            ChallengeChoice::Selected(name) => name,
            ChallengeChoice::Reload => {
                match ctx.reload() {
                    Ok(outcome) if outcome.changed => {
                        println!("✅ Reloaded {} challenge(s)", outcome.challenges)
                    }
                    Ok(outcome) => {
                        println!("✅ File unchanged ({} challenge(s))", outcome.challenges)
                    }
                    Err(err) => eprintln!("Error: {}", err),
                }
                continue;
            }
            ChallengeChoice::Quit => return Ok(()),
        };

        let Some(company) = prompt_company()? else {
            continue;
        };

        loop {
            match ctx.draft(&challenge, &company) {
                Ok(draft) => println!("\n{}\n", draft),
                Err(err) => eprintln!("Error: {}", err),
            }

            match prompt_draft_action()? {
                DraftAction::Regenerate => continue,
                DraftAction::Back => break,
                DraftAction::Quit => return Ok(()),
            }
        }
    }
}

fn prompt_challenge<C: CompletionClient>(
    ctx: &AppContext<C>,
) -> Result<ChallengeChoice, AppError> {
    let store = ctx.catalog().snapshot();
    let mut items: Vec<String> = store.names().map(str::to_string).collect();
    if items.is_empty() {
        println!("No challenges found in {}", ctx.source().display());
    }
    let names = items.len();
    items.push(RELOAD_OPTION_LABEL.to_string());
    items.push(QUIT_OPTION_LABEL.to_string());

    let selection = Select::new()
        .with_prompt("Select challenge")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(terminal_error)?;

    Ok(match selection {
        None => ChallengeChoice::Quit,
        Some(index) if index < names => ChallengeChoice::Selected(items.swap_remove(index)),
        Some(index) if index == names => ChallengeChoice::Reload,
        Some(_) => ChallengeChoice::Quit,
    })
}

fn prompt_company() -> Result<Option<String>, AppError> {
    match Input::<String>::new().with_prompt("Company name").interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(terminal_error(err)),
    }
}

fn prompt_draft_action() -> Result<DraftAction, AppError> {
    let items = ["Regenerate", "Choose another challenge", "Quit"];
    let selection = Select::new()
        .with_prompt("Next")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(terminal_error)?;

    Ok(match selection {
        Some(0) => DraftAction::Regenerate,
        Some(1) => DraftAction::Back,
        _ => DraftAction::Quit,
    })
}

fn terminal_error(err: DialoguerError) -> AppError {
    match err {
        DialoguerError::IO(err) => AppError::Io(err),
    }
}
