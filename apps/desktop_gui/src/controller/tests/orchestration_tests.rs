use super::*;
use crossbeam_channel::bounded;
use shared::{
    domain::RecommendationId,
    protocol::{PetPayload, Recommendation},
};

fn controller() -> (
    FormController,
    Receiver<BackendCommand>,
    Sender<UiEvent>,
) {
    let (cmd_tx, cmd_rx) = bounded(16);
    let (ui_tx, ui_rx) = bounded(16);
    (FormController::new(cmd_tx, ui_rx), cmd_rx, ui_tx)
}

#[test]
fn create_reads_the_three_recommendation_inputs() {
    let mut state = FormState::default();
    state.recommendation.id = "ignored".into();
    state.recommendation.product_a_sku = "A1".into();
    state.recommendation.product_b_sku = "B1".into();
    state.recommendation.recommendation_type = "BUNDLE".into();

    assert_eq!(
        build_command(FormAction::Create, &state),
        Some(BackendCommand::CreateRecommendation {
            request: NewRecommendation {
                product_a_sku: "A1".into(),
                product_b_sku: "B1".into(),
                recommendation_type: "BUNDLE".into(),
            }
        })
    );
}

#[test]
fn update_reads_pet_inputs_and_parses_available() {
    let mut state = FormState::default();
    state.pet.id = "9".into();
    state.pet.name = "rex".into();
    state.pet.category = "dog".into();
    state.pet.available = "false".into();
    state.pet.gender = "MALE".into();
    state.pet.birthday = "2020-02-02".into();

    assert_eq!(
        build_command(FormAction::Update, &state),
        Some(BackendCommand::UpdatePet {
            pet_id: "9".into(),
            payload: PetPayload {
                name: "rex".into(),
                category: "dog".into(),
                available: false,
                gender: "MALE".into(),
                birthday: "2020-02-02".into(),
            },
        })
    );
}

#[test]
fn retrieve_and_delete_use_their_id_inputs() {
    let mut state = FormState::default();
    state.pet.id = "42".into();
    state.recommendation.id = "7".into();

    assert_eq!(
        build_command(FormAction::Retrieve, &state),
        Some(BackendCommand::RetrievePet {
            pet_id: "42".into()
        })
    );
    assert_eq!(
        build_command(FormAction::Delete, &state),
        Some(BackendCommand::DeleteRecommendation {
            recommendation_id: "7".into()
        })
    );
}

#[test]
fn search_builds_query_from_sku_and_type_filters() {
    let mut state = FormState::default();
    let query = |state: &FormState| match build_command(FormAction::Search, state) {
        Some(BackendCommand::SearchRecommendations { query }) => query,
        other => panic!("unexpected command: {other:?}"),
    };

    assert_eq!(query(&state), "");

    state.recommendation.recommendation_type = "UP_SELL".into();
    assert_eq!(query(&state), "recommendation_type=UP_SELL");

    state.recommendation.product_a_sku = "A9".into();
    state.recommendation.product_b_sku = "ignored".into();
    assert_eq!(query(&state), "product_a_sku=A9&recommendation_type=UP_SELL");
}

#[test]
fn clear_builds_no_command() {
    assert_eq!(build_command(FormAction::Clear, &FormState::default()), None);
}

#[test]
fn clear_issues_no_network_call() {
    let (mut controller, cmd_rx, _ui_tx) = controller();
    controller.state.recommendation.id = "3".into();
    controller.state.flash_info("Success");

    controller.trigger(FormAction::Clear);

    assert!(cmd_rx.try_recv().is_err());
    assert_eq!(controller.state.recommendation.id, "");
    assert_eq!(controller.state.flash_text(), "");
}

#[test]
fn every_request_action_queues_one_command_and_clears_flash() {
    let (mut controller, cmd_rx, _ui_tx) = controller();
    for action in FormAction::ALL {
        if action == FormAction::Clear {
            continue;
        }
        controller.state.flash_info("stale");
        controller.trigger(action);
        assert_eq!(controller.state.flash_text(), "", "{}", action.label());
        assert!(cmd_rx.try_recv().is_ok(), "{}", action.label());
    }
}

#[test]
fn duplicate_clicks_are_not_deduplicated() {
    let (mut controller, cmd_rx, _ui_tx) = controller();
    controller.trigger(FormAction::Search);
    controller.trigger(FormAction::Search);

    assert_eq!(cmd_rx.try_iter().count(), 2);
}

#[test]
fn full_queue_is_reported_in_flash_area() {
    let (cmd_tx, _cmd_rx) = bounded(1);
    let (_ui_tx, ui_rx) = bounded(1);
    let mut controller = FormController::new(cmd_tx, ui_rx);

    controller.trigger(FormAction::Search);
    controller.trigger(FormAction::Search);

    assert_eq!(
        controller.state.flash_text(),
        "UI command queue is full; please retry"
    );
}

#[test]
fn disconnected_backend_is_reported_in_flash_area() {
    let (mut controller, cmd_rx, _ui_tx) = controller();
    drop(cmd_rx);

    controller.trigger(FormAction::Retrieve);

    assert!(controller.state.flash_text().contains("disconnected"));
}

#[test]
fn process_ui_events_applies_in_arrival_order() {
    let (mut controller, _cmd_rx, ui_tx) = controller();
    let record = |id: i64| Recommendation {
        id: RecommendationId(id),
        product_a_sku: format!("A{id}"),
        product_b_sku: format!("B{id}"),
        recommendation_type: "BUNDLE".into(),
        likes: 0,
    };
    ui_tx
        .send(UiEvent::RecommendationCreated(Ok(record(1))))
        .expect("send");
    ui_tx
        .send(UiEvent::PetRetrieved(Ok(record(2).into())))
        .expect("send");

    assert_eq!(controller.process_ui_events(), 2);
    assert_eq!(controller.state.recommendation.id, "2");
    assert_eq!(controller.state.flash_text(), "Success");
    assert_eq!(controller.process_ui_events(), 0);
}
