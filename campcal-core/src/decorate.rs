//! Emoji decoration based on activity text.

use crate::schedule::Activity;

/// Maximum number of emoji prepended to a title.
pub const MAX_EMOJIS: usize = 3;

pub const UNTITLED: &str = "Untitled Event";

/// Keyword (English and Russian) to emoji. Table order decides which emoji
/// win when more than `MAX_EMOJIS` keywords match.
pub const KEYWORD_EMOJIS: &[(&str, &str)] = &[
    ("workshop", "🛠️"),
    ("воркшоп", "🛠️"),
    ("masterclass", "🎓"),
    ("мастер-класс", "🎓"),
    ("quiz", "🧩"),
    ("квиз", "🧩"),
    ("dj", "🎵"),
    ("music", "🎵"),
    ("музыка", "🎵"),
    ("food", "🍽️"),
    ("еда", "🍽️"),
    ("завтрак", "🍳"),
    ("обед", "🍽️"),
    ("ужин", "🍽️"),
    ("coffee", "☕"),
    ("кофе", "☕"),
    ("presentation", "📊"),
    ("презентация", "📊"),
    ("talk", "💬"),
    ("доклад", "💬"),
    ("networking", "🤝"),
    ("нетворкинг", "🤝"),
    ("game", "🎮"),
    ("игра", "🎮"),
    ("спорт", "🏃"),
    ("sport", "🏃"),
    ("йога", "🧘"),
    ("yoga", "🧘"),
    ("медитация", "🧘"),
    ("meditation", "🧘"),
    ("welcome", "👋"),
    ("приветствие", "👋"),
    ("opening", "🎉"),
    ("открытие", "🎉"),
    ("closing", "🏁"),
    ("закрытие", "🏁"),
    ("party", "🎊"),
    ("вечеринка", "🎊"),
    ("build", "🚧"),
    ("стройка", "🚧"),
    ("setup", "🔧"),
    ("подготовка", "🔧"),
];

/// Emoji for every keyword found in the title or description, in table
/// order, without duplicates, at most `MAX_EMOJIS`.
pub fn emojis_for(title: &str, description: &str) -> Vec<&'static str> {
    let title = title.to_lowercase();
    let description = description.to_lowercase();

    let mut emojis: Vec<&'static str> = Vec::new();
    for &(keyword, emoji) in KEYWORD_EMOJIS {
        if emojis.len() == MAX_EMOJIS {
            break;
        }
        if (title.contains(keyword) || description.contains(keyword)) && !emojis.contains(&emoji)
        {
            emojis.push(emoji);
        }
    }

    emojis
}

/// Title prefixed with its emoji, e.g. "🧘 Morning Yoga".
pub fn decorated_summary(activity: &Activity) -> String {
    let title = activity.title().unwrap_or(UNTITLED);
    let emojis = emojis_for(
        activity.title().unwrap_or_default(),
        activity.description().unwrap_or_default(),
    );

    if emojis.is_empty() {
        title.to_string()
    } else {
        format!("{} {}", emojis.join(" "), title)
    }
}
