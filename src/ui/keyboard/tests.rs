use super::*;

fn collect_with_key_event(
    key: egui::Key,
    modifiers: egui::Modifiers,
    aligning: bool,
) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput {
        modifiers,
        ..Default::default()
    };
    raw_input.events.push(egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    });

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            events = collect_keyboard_intents(ui, aligning);
        });
    });

    events
}

#[test]
fn test_escape_during_alignment_emits_surface_key_down() {
    let events = collect_with_key_event(
        egui::Key::Escape,
        egui::Modifiers::default(),
        true,
    );

    assert!(events.iter().any(|event| matches!(
        event,
        AppIntent::SurfaceInput {
            event: HostEvent::KeyDown { key: Key::Escape }
        }
    )));
}

#[test]
fn test_escape_without_alignment_emits_nothing() {
    let events = collect_with_key_event(
        egui::Key::Escape,
        egui::Modifiers::default(),
        false,
    );

    assert!(events.is_empty());
}

#[test]
fn test_ctrl_b_starts_alignment() {
    let events = collect_with_key_event(egui::Key::B, egui::Modifiers::COMMAND, false);

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::StartAlignmentRequested)));
}

#[test]
fn test_ctrl_b_during_alignment_is_ignored() {
    let events = collect_with_key_event(egui::Key::B, egui::Modifiers::COMMAND, true);

    assert!(!events
        .iter()
        .any(|event| matches!(event, AppIntent::StartAlignmentRequested)));
}
