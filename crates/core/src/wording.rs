/// "день" / "дня" / "дней" for a trip of `days` days.
pub fn day_word(days: u8) -> &'static str {
    match days {
        1 => "день",
        2..=4 => "дня",
        _ => "дней",
    }
}

/// "отзыв" / "отзыва" / "отзывов" with the usual 11-19 exception.
pub fn review_word(count: u32) -> &'static str {
    let last_two = count % 100;
    if (11..=19).contains(&last_two) {
        return "отзывов";
    }

    match count % 10 {
        1 => "отзыв",
        2..=4 => "отзыва",
        _ => "отзывов",
    }
}
