use rand::{Rng, RngCore};

use crate::models::Intent;

pub const THANKS_REPLIES: &[&str] = &[
    "Пожалуйста! Рад был помочь! Если нужна еще помощь с планированием маршрута, обращайтесь! 😊",
    "Всегда пожалуйста! Удачного путешествия по Карелии! 🗺️",
    "Не за что! Надеюсь, маршрут вам понравится. Приятных впечатлений! ✨",
    "Пожалуйста! Если понадобится что-то еще, я всегда готов помочь! 🎯",
    "Рад помочь! Желаю незабываемого путешествия по Карелии! 🌲",
];

pub const GREETING_REPLIES: &[&str] = &[
    "Привет! Я помогу вам спланировать маршрут по Карелии. Что вас интересует?",
    "Здравствуйте! Расскажите, какой маршрут вы хотели бы составить?",
    "Привет! Готов помочь с планированием вашего путешествия. Что вы хотите посмотреть?",
];

pub const FAREWELL_REPLIES: &[&str] = &[
    "До свидания! Удачного путешествия по Карелии! 🗺️",
    "Пока! Надеюсь, маршрут вам понравится. Приятных впечатлений! ✨",
    "До встречи! Желаю незабываемого путешествия! 🌲",
    "Увидимся! Если понадобится помощь, обращайтесь! 😊",
];

pub const NO_RESULTS_REPLY: &str =
    "К сожалению, я не нашел подходящих объектов. Попробуйте изменить критерии поиска.";

pub const ACTIONS_HINT: &str =
    "💡 Вы можете кликнуть на объект в списке, чтобы посмотреть его на карте, или добавить в избранное!";

/// Source of uniform choices for canned replies. Any `rand` generator works,
/// so tests can pass a seeded `StdRng`.
pub trait ChoiceSource {
    /// Index in `0..len`; `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: RngCore> ChoiceSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

pub fn canned_pool(intent: Intent) -> Option<&'static [&'static str]> {
    match intent {
        Intent::Thanks => Some(THANKS_REPLIES),
        Intent::Greeting => Some(GREETING_REPLIES),
        Intent::Farewell => Some(FAREWELL_REPLIES),
        Intent::ItineraryRequest => None,
    }
}

/// `None` for itinerary requests, which get a composed reply instead.
pub fn canned_reply(intent: Intent, source: &mut impl ChoiceSource) -> Option<&'static str> {
    let pool = canned_pool(intent)?;
    pool.get(source.pick_index(pool.len())).copied()
}
