use guide_core::{Intent, ADD_TO_FAVORITES, NO_RESULTS_REPLY, SHOW_ON_MAP};
use guide_tests::test_assistant;

#[test]
fn mixed_interests_fit_without_trimming() {
    let assistant = test_assistant().unwrap();

    let reply = assistant
        .handle_message("Хочу природу, монастыри и архитектуру на 2 дня")
        .unwrap();

    assert_eq!(reply.intent, Intent::ItineraryRequest);
    let names = reply.action_names(SHOW_ON_MAP);
    assert_eq!(names.len(), 9);
    assert_eq!(names[0], "Кижский погост");
    assert_eq!(names[8], "Муромский Успенский монастырь");
    assert_eq!(names, reply.action_names(ADD_TO_FAVORITES));

    let itinerary = reply.itinerary.unwrap();
    assert_eq!(itinerary.sections.len(), 2);
    assert_eq!(itinerary.sections[0].entries.len(), 5);
    assert_eq!(itinerary.sections[1].entries.len(), 4);
    assert_eq!(itinerary.sections[1].entries[0].position, 1);
}

#[test]
fn overflow_splits_capacity_between_categories() {
    let assistant = test_assistant().unwrap();

    let reply = assistant.handle_message("Природа и город на один день").unwrap();

    assert_eq!(
        reply.action_names(SHOW_ON_MAP),
        vec![
            "Водопад Кивач",
            "Мраморный карьер Рускеала",
            "Онежская набережная Петрозаводска",
            "Площадь Кирова",
            "Национальный парк «Паанаярви»",
        ]
    );
    assert!(reply
        .reply_text
        .starts_with("Отлично! Я подготовил маршрут на 1 день. Учитывая ваши интересы (Природа, Городское)"));
    assert!(!reply.reply_text.contains("День 1:"));
}

#[test]
fn open_request_takes_first_ten_of_catalog() {
    let assistant = test_assistant().unwrap();

    let reply = assistant.handle_message("Куда съездить?").unwrap();

    let names = reply.action_names(SHOW_ON_MAP);
    assert_eq!(names.len(), 10);
    assert_eq!(names[9], "Водопады Ахинкоски");
    assert!(reply
        .reply_text
        .starts_with("Вот подборка интересных объектов для вас. Рекомендую посетить:"));
}

#[test]
fn actions_from_reply_drive_map_and_favorites() {
    let assistant = test_assistant().unwrap();

    let reply = assistant.handle_message("Покажу детям памятники").unwrap();
    // "покажу" contains "пока", so this reads as a farewell.
    assert_eq!(reply.intent, Intent::Farewell);

    let reply = assistant.handle_message("Какие есть памятники?").unwrap();
    let names = reply.action_names(SHOW_ON_MAP);
    assert_eq!(names.len(), 2);

    let view = assistant.show_on_map(&names);
    assert_eq!(view.message, "Показал 2 объектов на карте!");

    let update = assistant.add_to_favorites(&reply.action_names(ADD_TO_FAVORITES)).unwrap();
    assert_eq!(update.message, "Добавил 2 объектов в избранное! ❤️");
    assert_eq!(assistant.favorites().unwrap().len(), 2);
}

#[test]
fn nothing_matching_returns_fixed_message() {
    let catalog = guide_catalog::Catalog::from_points(Vec::new());
    let assistant = guide_agents::ItineraryAssistant::new(
        std::sync::Arc::new(catalog),
        std::sync::Arc::new(guide_storage::MemoryStore::new()),
        guide_core::AssistantConfig::default(),
        guide_observability::AppMetrics::shared(),
        Some(1),
    );

    let reply = assistant.handle_message("Хочу в музей").unwrap();

    assert_eq!(reply.reply_text, NO_RESULTS_REPLY);
    assert!(reply.suggested_actions.is_empty());
}
