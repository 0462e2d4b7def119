use guide_core::PointOfInterest;

pub const DEFAULT_BASE_RATING: &str = "4.0";

const HERITAGE_SUFFIX: &str = "Это уникальный объект культурного и исторического наследия Республики Карелия, привлекающий туристов со всего мира своей красотой и исторической ценностью.";

const EXTENDED_DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "Кижский погост",
        "Кижский погост — уникальный архитектурный ансамбль деревянного зодчества, объект Всемирного наследия ЮНЕСКО. Расположен на острове Кижи в Онежском озере. Ансамбль включает в себя 22-главую Преображенскую церковь (1714 год), 9-главую Покровскую церковь (1764 год) и шатровую колокольню (1874 год). Это выдающийся памятник русской деревянной архитектуры, демонстрирующий мастерство древних зодчих.",
    ),
    (
        "Мраморный карьер Рускеала",
        "Горный парк \"Рускеала\" — бывший мраморный карьер, превращенный в уникальный туристический объект. Карьер заполнен чистейшей водой изумрудного цвета. Здесь можно прогуляться по оборудованным тропам, покататься на лодке, посетить подземные гроты. В вечернее время карьер подсвечивается, создавая невероятно красивое зрелище. Мрамор из этого карьера использовался при строительстве многих известных зданий Санкт-Петербурга.",
    ),
    (
        "Валаамский Спасо-Преображенский монастырь",
        "Валаамский монастырь — один из древнейших монастырей России, расположенный на острове Валаам в Ладожском озере. Основан в X-XI веках. Монастырь известен своей уникальной архитектурой, строгим уставом и красотой природы. Здесь сохранились древние храмы, скиты и монашеские кельи. Валаам привлекает паломников и туристов со всего мира.",
    ),
    (
        "Водопад Кивач",
        "Водопад Кивач — второй по величине равнинный водопад Европы после Рейнского. Высота падения воды составляет около 11 метров. Водопад расположен в заповеднике \"Кивач\" и является одной из главных достопримечательностей Карелии. Особенно красив водопад весной во время половодья, когда река Суна полноводна.",
    ),
    (
        "Петроглифы Онежского озера",
        "Петроглифы Онежского озера — наскальные рисунки эпохи неолита, возраст которых составляет около 5-6 тысяч лет. Рисунки выбиты на скалах мыса Бесов Нос и других местах восточного берега Онежского озера. Изображены сцены охоты, животные, лодки, люди. Это уникальный памятник древнего искусства, дающий представление о жизни первобытных людей.",
    ),
];

const BASE_RATINGS: &[(&str, &str)] = &[
    ("Кижский погост", "4.7"),
    ("Мраморный карьер Рускеала", "4.4"),
    ("Валаамский Спасо-Преображенский монастырь", "4.6"),
    ("Водопад Кивач", "4.5"),
    ("Петроглифы Онежского озера", "4.3"),
];

fn lookup(table: &[(&str, &'static str)], name: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| *value)
}

/// Long-form text for the details card: a curated text for flagship places,
/// otherwise the catalog description followed by the heritage note.
pub fn extended_description(point: &PointOfInterest) -> String {
    if let Some(text) = lookup(EXTENDED_DESCRIPTIONS, &point.name) {
        return text.to_string();
    }

    if point.description.is_empty() {
        HERITAGE_SUFFIX.to_string()
    } else {
        format!("{} {HERITAGE_SUFFIX}", point.description)
    }
}

/// Editorial rating shown alongside user reviews.
pub fn base_rating(name: &str) -> &'static str {
    lookup(BASE_RATINGS, name).unwrap_or(DEFAULT_BASE_RATING)
}
