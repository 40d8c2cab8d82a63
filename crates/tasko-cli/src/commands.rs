//! CLI command implementations.

use crate::output::{self, OutputFormat};
use anyhow::{anyhow, Context, Result};
use tasko_core::{Session, TodoStore};

/// List all items.
pub async fn list<S: TodoStore>(session: &mut Session<S>, format: OutputFormat) -> Result<()> {
    session.refresh().await.context("Failed to fetch items")?;
    output::print_item_list(session.items(), format);
    Ok(())
}

/// Add a new item.
pub async fn add<S: TodoStore>(
    session: &mut Session<S>,
    title: &str,
    format: OutputFormat,
) -> Result<()> {
    session.set_input(title);

    match session.submit().await.context("Failed to create item")? {
        Some(item) => output::print(&item, format),
        None => output::print_success("Nothing to add: title is empty", format),
    }
    Ok(())
}

/// Flip an item's completion flag.
pub async fn toggle<S: TodoStore>(
    session: &mut Session<S>,
    id: &str,
    format: OutputFormat,
) -> Result<()> {
    session.refresh().await.context("Failed to fetch items")?;
    session.toggle(id).await.context("Failed to update item")?;

    let item = find(session, id)?;
    output::print(&item, format);
    Ok(())
}

/// Change an item's title via the edit session.
pub async fn edit<S: TodoStore>(
    session: &mut Session<S>,
    id: &str,
    title: &str,
    format: OutputFormat,
) -> Result<()> {
    session.refresh().await.context("Failed to fetch items")?;

    session
        .request_edit(id)
        .await
        .context("Failed to open edit")?;
    session.set_draft(title);
    session
        .request_edit(id)
        .await
        .context("Failed to update item")?;

    let item = find(session, id)?;
    output::print(&item, format);
    Ok(())
}

/// Delete an item.
pub async fn remove<S: TodoStore>(
    session: &mut Session<S>,
    id: &str,
    format: OutputFormat,
) -> Result<()> {
    session.delete(id).await.context("Failed to delete item")?;
    output::print_success(&format!("Deleted {id}"), format);
    Ok(())
}

fn find<S: TodoStore>(session: &Session<S>, id: &str) -> Result<tasko_core::TodoItem> {
    session
        .items()
        .iter()
        .find(|item| item.id == id)
        .cloned()
        .ok_or_else(|| anyhow!("item {id} missing from refreshed snapshot"))
}
