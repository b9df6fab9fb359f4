use std::sync::Arc;

use tracing::{error, info};
use twilight_model::{
    application::interaction::Interaction, gateway::payload::incoming::MessageCreate,
};

use crate::CommandMeta;
use rusty_chooser::discord::respond::respond_update_without_components;
use rusty_chooser::discord::{DiscordSurface, Origin};
use rusty_chooser::{ChoiceItem, ChooserOutcome, PagedChooser, Selection};
use rusty_core::Context;

pub const META: CommandMeta = CommandMeta {
    name: "choose",
    desc: "Pick an item from a paginated select menu.",
    category: "utility",
    usage: "!choose [count]",
};

const DEFAULT_ITEM_COUNT: usize = 30;
const MAX_ITEM_COUNT: usize = 500;

/// Open a chooser over `count` sample items in the invoking channel.
///
/// Inputs:
/// - optional item count: `!choose [count]`, `0` shows the empty notice.
///
/// Error behavior:
/// - returns usage text when the count is not a number or too large.
pub async fn run(ctx: Context, msg: Box<MessageCreate>, arg1: Option<&str>) -> anyhow::Result<()> {
    let http = &ctx.http;

    let Some(count) = parse_item_count(arg1) else {
        let usage = format!(
            "Usage: `{}` (count between 0 and {})",
            META.usage, MAX_ITEM_COUNT
        );
        http.create_message(msg.channel_id).content(&usage).await?;
        return Ok(());
    };

    let surface = DiscordSurface::new(
        Arc::clone(&ctx.http),
        ctx.waiters.clone(),
        Origin::Channel(msg.channel_id),
    )
    .timeout(ctx.config.chooser_timeout);

    let control_id = format!("choose:{}", msg.id);
    let reply_http = Arc::clone(&ctx.http);

    let session = PagedChooser::new(Arc::new(surface), ctx.choosers.clone(), control_id)
        .page_size(ctx.config.chooser_page_size)
        .display_text(format!("Pick one of {count} items:"))
        .spawn(build_sample_items(count), move |selection: Selection<Interaction>| async move {
            let content = format!(
                "You picked **{}** (`{}`).",
                selection.item.label, selection.value
            );
            respond_update_without_components(&reply_http, &selection.event, &content).await
        })?;

    let author_id = msg.author.id;
    tokio::spawn(async move {
        match session.await {
            Ok(Ok(ChooserOutcome::Selected { value, .. })) => {
                info!(user_id = author_id.get(), %value, "choose finished");
            }
            Ok(Ok(outcome)) => {
                info!(user_id = author_id.get(), ?outcome, "choose ended without a pick");
            }
            Ok(Err(source)) => error!(?source, "choose could not start"),
            Err(source) => error!(?source, "choose task panicked"),
        }
    });

    Ok(())
}

fn parse_item_count(raw: Option<&str>) -> Option<usize> {
    match raw {
        Some(value) => value
            .parse::<usize>()
            .ok()
            .filter(|count| *count <= MAX_ITEM_COUNT),
        None => Some(DEFAULT_ITEM_COUNT),
    }
}

fn build_sample_items(count: usize) -> Vec<ChoiceItem> {
    (1..=count)
        .map(|index| {
            ChoiceItem::new(format!("Sample item #{index}"), format!("item-{index}"))
                .description(format!("Entry {index} of {count}"))
        })
        .collect()
}
