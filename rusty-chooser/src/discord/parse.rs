//! Option icon parsing.

use twilight_model::{channel::message::EmojiReactionType, id::Id};

/// Parse an option icon: a custom emoji mention (`<:name:id>`, `<a:name:id>`)
/// or anything else as a unicode emoji.
pub fn parse_emoji(raw: &str) -> Option<EmojiReactionType> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if !(trimmed.starts_with('<') && trimmed.ends_with('>')) {
        return Some(EmojiReactionType::Unicode {
            name: trimmed.to_owned(),
        });
    }

    let inner = trimmed.strip_prefix('<')?.strip_suffix('>')?;
    let (animated, rest) = match inner.strip_prefix("a:") {
        Some(rest) => (true, rest),
        None => (false, inner.strip_prefix(':')?),
    };

    let (name, raw_id) = rest.rsplit_once(':')?;
    let id = Id::new_checked(raw_id.parse::<u64>().ok()?)?;

    Some(EmojiReactionType::Custom {
        animated,
        id,
        name: (!name.is_empty()).then(|| name.to_owned()),
    })
}
