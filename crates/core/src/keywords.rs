//! Static phrase tables. Order inside every table is significant: scanning
//! stops at the first hit, so reordering changes observable matches.

use crate::models::Category;

pub const THANKS_PHRASES: &[&str] = &[
    "спасибо",
    "благодарю",
    "благодарность",
    "благодарна",
    "благодарен",
    "спасибо большое",
    "большое спасибо",
    "огромное спасибо",
    "благодарю вас",
    "спасибо вам",
    "отлично",
    "супер",
    "классно",
    "замечательно",
    "прекрасно",
    "отличная работа",
    "хорошо",
    "понятно",
];

pub const GREETING_PHRASES: &[&str] = &[
    "привет",
    "здравствуй",
    "здравствуйте",
    "добрый день",
    "добрый вечер",
    "доброе утро",
    "добро пожаловать",
    "хай",
    "hi",
    "hello",
];

pub const FAREWELL_PHRASES: &[&str] = &[
    "пока",
    "до свидания",
    "до встречи",
    "увидимся",
    "прощай",
    "прощайте",
    "bye",
    "goodbye",
    "see you",
];

pub const DAY_PHRASES: &[(u8, &[&str])] = &[
    (1, &["1 день", "один день", "на день", "дневной"]),
    (2, &["2 дня", "два дня", "на выходные", "выходные"]),
    (3, &["3 дня", "три дня"]),
    (4, &["4 дня", "четыре дня"]),
    (5, &["5 дней", "пять дней", "неделя", "на неделю"]),
];

pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Architecture,
        &[
            "архитектура",
            "архитектурный",
            "архитектур",
            "здание",
            "постройка",
            "церковь",
            "храм",
            "собор",
            "часовня",
        ],
    ),
    (
        Category::Museum,
        &["музей", "музеи", "музе", "экспозиция", "выставка", "коллекция"],
    ),
    (
        Category::Nature,
        &[
            "природа",
            "природу",
            "природы",
            "природе",
            "природой",
            "природный",
            "природн",
            "природные",
            "природных",
            "озеро",
            "озера",
            "озер",
            "озеру",
            "озером",
            "лес",
            "леса",
            "лесу",
            "лесом",
            "парк",
            "парки",
            "заповедник",
            "заповедники",
            "водопад",
            "водопады",
            "скала",
            "скалы",
            "ландшафт",
            "пейзаж",
            "природ",
        ],
    ),
    (
        Category::Monastery,
        &[
            "монастырь",
            "монастыри",
            "монастыр",
            "скит",
            "скиты",
            "обитель",
            "лавра",
            "монастырский",
        ],
    ),
    (
        Category::Culture,
        &[
            "культура",
            "культурный",
            "культур",
            "фестиваль",
            "традиция",
            "обычай",
        ],
    ),
    (
        Category::Archaeology,
        &[
            "археология",
            "археологический",
            "археолог",
            "раскопки",
            "древний",
            "исторический",
        ],
    ),
    (
        Category::Settlement,
        &["поселение", "деревня", "село", "поселок"],
    ),
    (
        Category::Urban,
        &["город", "городской", "городск", "площадь", "улица", "центр"],
    ),
    (Category::Monument, &["памятник", "мемориал", "обелиск"]),
    (
        Category::Industrial,
        &["промышленность", "завод", "фабрика", "производство"],
    ),
    (
        Category::Institution,
        &["учреждение", "библиотека", "школа", "театр"],
    ),
];
