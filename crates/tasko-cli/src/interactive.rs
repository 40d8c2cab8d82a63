//! Interactive single-page loop: the full list plus add/toggle/edit/delete
//! controls, refreshed from the store after every mutation.

use anyhow::{Context, Result};
use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use tasko_core::{EditAction, Session, TodoStore};

const ACTIONS: &[&str] = &["Add", "Toggle", "Edit", "Delete", "Refresh", "Quit"];

/// Run the interactive loop until the user quits.
///
/// Store failures are reported inline and never abort the loop; the
/// snapshot stays at its last-known-good state.
pub async fn run<S: TodoStore>(session: &mut Session<S>) -> Result<()> {
    let theme = ColorfulTheme::default();

    if let Err(err) = session.refresh().await {
        report(&err.to_string());
    }

    loop {
        render(session);

        let selection = Select::with_theme(&theme)
            .with_prompt("Action")
            .items(ACTIONS)
            .default(0)
            .interact_opt()
            .context("Failed to read action")?;

        let result = match selection {
            Some(0) => add(session, &theme).await,
            Some(1) => toggle(session, &theme).await,
            Some(2) => edit(session, &theme).await,
            Some(3) => delete(session, &theme).await,
            Some(4) => session.refresh().await.map_err(Into::into),
            _ => return Ok(()), // Quit or Esc
        };

        if let Err(err) = result {
            report(&err.to_string());
        }
    }
}

fn render<S: TodoStore>(session: &Session<S>) {
    println!();
    println!("{}", style("  To-do").bold().cyan());
    println!("{}", style("  ─────").dim());

    if session.items().is_empty() {
        println!("  {}", style("(no items)").dim());
    }

    for item in session.items() {
        let mark = if item.completed { "[x]" } else { "[ ]" };
        let title = if item.completed {
            style(item.title.as_str()).strikethrough().dim().to_string()
        } else {
            item.title.clone()
        };
        println!("  {mark} {title}");
    }
    println!();
}

fn report(message: &str) {
    println!("  {}", style(format!("✗ {message}")).red());
}

async fn add<S: TodoStore>(session: &mut Session<S>, theme: &ColorfulTheme) -> Result<()> {
    let text: String = Input::with_theme(theme)
        .with_prompt("New item")
        .allow_empty(true)
        .interact_text()
        .context("Failed to read title")?;

    session.set_input(text);
    if session.submit().await?.is_none() {
        println!("  {}", style("Empty title, nothing added").dim());
    }
    Ok(())
}

async fn toggle<S: TodoStore>(session: &mut Session<S>, theme: &ColorfulTheme) -> Result<()> {
    let Some(id) = pick_item(session, theme, "Toggle which?")? else {
        return Ok(());
    };
    session.toggle(&id).await?;
    Ok(())
}

/// The two-phase edit interaction: the first request opens a session seeded
/// with the current title, the second commits the draft.
async fn edit<S: TodoStore>(session: &mut Session<S>, theme: &ColorfulTheme) -> Result<()> {
    let Some(id) = pick_item(session, theme, "Edit which?")? else {
        return Ok(());
    };

    // A commit that failed earlier leaves its session open; reuse it
    // instead of re-requesting, which would commit the stale draft as-is.
    if !session.editing().is_some_and(|edit| edit.id == id) {
        let action = session.request_edit(&id).await?;
        debug_assert_eq!(action, EditAction::Started);
    }

    let draft = session
        .editing()
        .map(|edit| edit.draft.clone())
        .unwrap_or_default();

    let text: String = Input::with_theme(theme)
        .with_prompt("Title")
        .default(draft)
        .interact_text()
        .context("Failed to read title")?;

    session.set_draft(text);
    session.request_edit(&id).await?;
    Ok(())
}

async fn delete<S: TodoStore>(session: &mut Session<S>, theme: &ColorfulTheme) -> Result<()> {
    let Some(id) = pick_item(session, theme, "Delete which?")? else {
        return Ok(());
    };
    session.delete(&id).await?;
    Ok(())
}

/// Select an item from the snapshot; `None` means nothing to pick or Esc.
fn pick_item<S: TodoStore>(
    session: &Session<S>,
    theme: &ColorfulTheme,
    prompt: &str,
) -> Result<Option<String>> {
    if session.items().is_empty() {
        println!("  {}", style("No items").dim());
        return Ok(None);
    }

    let labels: Vec<String> = session
        .items()
        .iter()
        .map(|item| {
            let mark = if item.completed { "[x]" } else { "[ ]" };
            format!("{mark} {}", item.title)
        })
        .collect();

    let selection = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact_opt()
        .context("Failed to read selection")?;

    Ok(selection.map(|idx| session.items()[idx].id.clone()))
}
