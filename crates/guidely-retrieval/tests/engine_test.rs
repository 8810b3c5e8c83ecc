use guidely_core::config::AssistantConfig;
use guidely_core::intent::Intent;
use guidely_core::models::ConversationContext;
use guidely_core::place::Category;
use guidely_retrieval::{AssistantEngine, Reply};
use test_fixtures::sample_catalog;

fn result_names(reply: &Reply) -> Vec<String> {
    match reply {
        Reply::Results { places, .. } | Reply::Search { places, .. } => {
            places.iter().map(|p| p.name().to_string()).collect()
        }
        Reply::Conversational { .. } => panic!("expected results, got a conversational reply"),
    }
}

#[test]
fn greeting_gets_a_conversational_reply() {
    let catalog = sample_catalog();
    let engine = AssistantEngine::new(&catalog, AssistantConfig::default());
    let mut ctx = ConversationContext::new();

    let reply = engine.respond("Hello!", &mut ctx);
    match reply {
        Reply::Conversational { intent } => assert_eq!(intent, Intent::Greeting),
        other => panic!("unexpected reply: {other:?}"),
    }
    assert_eq!(ctx.last_intent, Some(Intent::Greeting));
    assert!(ctx.suggested_ids.is_empty());
}

#[test]
fn budget_query_filters_and_records_context() {
    let catalog = sample_catalog();
    let engine = AssistantEngine::new(&catalog, AssistantConfig::default());
    let mut ctx = ConversationContext::new();

    let reply = engine.respond("show me cheap hotels", &mut ctx);
    assert_eq!(result_names(&reply), ["Downtown Hostel"]);
    assert_eq!(ctx.last_category, Some(Category::Hotel));
    assert_eq!(ctx.preferences.budget, Some(1));
    assert_eq!(ctx.suggested_ids, ["503"]);
}

#[test]
fn area_preference_carries_over_to_the_next_turn() {
    let catalog = sample_catalog();
    let engine = AssistantEngine::new(&catalog, AssistantConfig::default());
    let mut ctx = ConversationContext::new();

    let reply = engine.respond("restaurants in downtown", &mut ctx);
    assert_eq!(result_names(&reply), ["Koshary Abou Tarek"]);

    // The follow-up names only a category; the area filter persists.
    let reply = engine.respond("what about cafes?", &mut ctx);
    assert_eq!(result_names(&reply), ["Beano's"]);
    assert_eq!(ctx.last_category, Some(Category::Cafe));
}

#[test]
fn category_defaults_to_hotels_when_nothing_else_is_known() {
    let catalog = sample_catalog();
    let engine = AssistantEngine::new(&catalog, AssistantConfig::default());
    let mut ctx = ConversationContext::new();

    // "luxury" sets a budget but no category.
    let reply = engine.respond("something luxury", &mut ctx);
    match &reply {
        Reply::Results { criteria, .. } => {
            assert_eq!(criteria.category, Category::Hotel);
            assert_eq!(criteria.budget_tier, 4);
        }
        other => panic!("unexpected reply: {other:?}"),
    }
    assert_eq!(result_names(&reply).len(), 4);
}

#[test]
fn results_are_truncated_to_max_results() {
    let catalog = sample_catalog();
    let config = AssistantConfig {
        max_results: 2,
        ..AssistantConfig::default()
    };
    let engine = AssistantEngine::new(&catalog, config);
    let mut ctx = ConversationContext::new();

    let reply = engine.respond("show me restaurants", &mut ctx);
    // Top two by rating out of five.
    assert_eq!(result_names(&reply), ["Koshary Abou Tarek", "Abou El Sid"]);
    assert_eq!(ctx.suggested_ids.len(), 2);
}

#[test]
fn unclassified_input_falls_back_to_text_search() {
    let catalog = sample_catalog();
    let engine = AssistantEngine::new(&catalog, AssistantConfig::default());
    let mut ctx = ConversationContext::new();

    let reply = engine.respond("koshary", &mut ctx);
    match &reply {
        Reply::Search { query, .. } => assert_eq!(query, "koshary"),
        other => panic!("unexpected reply: {other:?}"),
    }
    assert_eq!(result_names(&reply), ["Koshary Abou Tarek"]);
}

#[test]
fn text_search_prefers_the_conversations_category() {
    let catalog = sample_catalog();
    let engine = AssistantEngine::new(&catalog, AssistantConfig::default());
    let mut ctx = ConversationContext::new();

    engine.respond("show me restaurants", &mut ctx);
    assert_eq!(ctx.last_category, Some(Category::Restaurant));

    // "abou" hits two restaurants; the scoped search keeps it within the
    // category the conversation was about.
    let reply = engine.respond("abou", &mut ctx);
    let got = result_names(&reply);
    assert_eq!(got.len(), 2);
    assert!(got.contains(&"Abou El Sid".to_string()));
    assert!(got.contains(&"Koshary Abou Tarek".to_string()));
}

#[test]
fn text_search_widens_to_the_whole_catalog_when_the_scope_is_empty() {
    let catalog = sample_catalog();
    let engine = AssistantEngine::new(&catalog, AssistantConfig::default());
    let mut ctx = ConversationContext::new();

    engine.respond("show me restaurants", &mut ctx);
    // No restaurant mentions a mosque; the fallback finds the monument.
    let reply = engine.respond("mosque", &mut ctx);
    assert_eq!(result_names(&reply), ["Al-Azhar Mosque"]);
}

#[test]
fn thanks_between_turns_keeps_preferences_intact() {
    let catalog = sample_catalog();
    let engine = AssistantEngine::new(&catalog, AssistantConfig::default());
    let mut ctx = ConversationContext::new();

    engine.respond("cheap hotels please", &mut ctx);
    engine.respond("thanks!", &mut ctx);

    let reply = engine.respond("show me hotels again", &mut ctx);
    // Budget tier 1 survived the small talk.
    assert_eq!(result_names(&reply), ["Downtown Hostel"]);
}

#[test]
fn empty_result_set_is_a_normal_reply() {
    let catalog = sample_catalog();
    let engine = AssistantEngine::new(&catalog, AssistantConfig::default());
    let mut ctx = ConversationContext::new();

    // No cafe sits in Giza.
    let reply = engine.respond("cafes in giza", &mut ctx);
    assert!(result_names(&reply).is_empty());
    assert!(ctx.suggested_ids.is_empty());
}
