use egui::{Context, Event, Key, PointerButton, Pos2, Rect, Vec2};
use rustc_hash::FxHashSet;

/// Maps the fixed model coordinate space (TOP / LEFT corner is 0/0) onto the window area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub screen: Rect,
    pub model_size: Vec2,
}

impl Viewport {
    pub fn new(screen: Rect, model_size: Vec2) -> Self {
        Self { screen, model_size }
    }

    /// pos / MODEL_LEN = result / canvas_size
    /// => result = pos * canvas_size / MODEL_LEN
    pub fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.screen.min + (pos.to_vec2() * self.scale())
    }

    pub fn to_model(&self, pos: Pos2) -> Pos2 {
        ((pos - self.screen.min) / self.scale()).to_pos2()
    }

    pub fn scale(&self) -> Vec2 {
        self.screen.size() / self.model_size
    }

    pub fn scale_len(&self, len: f32) -> f32 {
        len * self.scale().min_elem()
    }
}

/// Everything a game step may react to, already translated into model coordinates.
#[derive(Clone, Debug, Default)]
pub struct FrameInput {
    /// key-down events since the last consumed step
    pub pressed: Vec<Key>,
    /// keys held down at the time of the snapshot
    pub held: FxHashSet<Key>,
    /// primary button presses since the last consumed step
    pub clicks: Vec<Pos2>,
    /// current pointer position, if it is inside the window
    pub pointer: Option<Pos2>,
}

impl FrameInput {
    pub fn read(ctx: &Context, viewport: &Viewport) -> Self {
        ctx.input(|i| {
            let mut pressed = vec![];
            let mut clicks = vec![];
            for event in &i.events {
                match event {
                    // auto-repeat while held is not a new key-down
                    Event::Key { key, pressed: true, repeat: false, .. } => pressed.push(*key),
                    Event::PointerButton { pos, button: PointerButton::Primary, pressed: true, .. } => {
                        clicks.push(viewport.to_model(*pos))
                    }
                    _ => {}
                }
            }
            FrameInput {
                pressed,
                held: i.keys_down.iter().copied().collect(),
                clicks,
                pointer: i.pointer.hover_pos().map(|p| viewport.to_model(p)),
            }
        })
    }

    /// Folds a newer snapshot into this one: events accumulate, held keys and pointer take the newer state.
    pub fn merge(&mut self, newer: FrameInput) {
        self.pressed.extend(newer.pressed);
        self.clicks.extend(newer.clicks);
        self.held = newer.held;
        self.pointer = newer.pointer;
    }

    /// Hands out the accumulated events and keeps the continuous state for the next step.
    pub fn take_events(&mut self) -> FrameInput {
        FrameInput {
            pressed: std::mem::take(&mut self.pressed),
            held: self.held.clone(),
            clicks: std::mem::take(&mut self.clicks),
            pointer: self.pointer,
        }
    }

    pub fn was_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn exit_requested(&self) -> bool {
        self.was_pressed(Key::Escape)
    }

    pub fn first_click(&self) -> Option<Pos2> {
        self.clicks.first().copied()
    }
}


#[cfg(test)]
mod tests {
    use egui::{Event, Key, Modifiers, Pos2, RawInput, Rect, Vec2};

    use super::test_input::*;
    use super::*;

    fn key_down(key: Key) -> Event {
        Event::Key {
            key,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::NONE,
        }
    }

    /// Feeds one host frame per event list through `ctx` and reads the snapshot of each.
    fn read_frames(ctx: &Context, frames: Vec<Vec<Event>>) -> Vec<FrameInput> {
        let viewport = Viewport::new(
            Rect::from_min_size(Pos2::ZERO, Vec2::new(700.0, 500.0)),
            Vec2::new(700.0, 500.0),
        );
        frames
            .into_iter()
            .map(|events| {
                let mut input = FrameInput::default();
                let raw_input = RawInput {
                    events,
                    ..Default::default()
                };
                let _ = ctx.run(raw_input, |ctx| input = FrameInput::read(ctx, &viewport));
                input
            })
            .collect()
    }

    #[test]
    fn key_repeat_is_not_a_new_press() {
        let ctx = Context::default();
        let frames = read_frames(&ctx, vec![vec![key_down(Key::Space)], vec![key_down(Key::Space)]]);

        assert!(frames[0].was_pressed(Key::Space));
        assert!(frames[0].is_held(Key::Space));
        assert!(!frames[1].was_pressed(Key::Space));
        assert!(frames[1].is_held(Key::Space));
    }

    #[test]
    fn repeated_press_within_one_frame_counts_once() {
        let ctx = Context::default();
        let frames = read_frames(&ctx, vec![vec![key_down(Key::Enter), key_down(Key::Enter)]]);
        assert_eq!(frames[0].pressed, vec![Key::Enter]);
    }

    #[test]
    fn viewport_round_trips_through_scaled_window() {
        let viewport = Viewport::new(
            Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1400.0, 1000.0)),
            Vec2::new(700.0, 500.0),
        );
        assert_eq!(viewport.to_screen(Pos2::new(350.0, 250.0)), Pos2::new(700.0, 500.0));
        assert_eq!(viewport.to_model(Pos2::new(700.0, 500.0)), Pos2::new(350.0, 250.0));
        assert_eq!(viewport.scale_len(10.0), 20.0);
    }

    #[test]
    fn merge_accumulates_events_and_keeps_latest_held_keys() {
        let mut pending = pressing(&[Key::ArrowUp]);
        pending.merge(FrameInput {
            pressed: vec![Key::ArrowLeft],
            held: [Key::A].into_iter().collect(),
            ..Default::default()
        });
        assert_eq!(pending.pressed, vec![Key::ArrowUp, Key::ArrowLeft]);
        assert!(pending.is_held(Key::A));

        let step_input = pending.take_events();
        assert_eq!(step_input.pressed.len(), 2);
        assert!(pending.pressed.is_empty());
        assert!(pending.is_held(Key::A));
    }

    #[test]
    fn escape_requests_exit() {
        assert!(pressing(&[Key::Escape]).exit_requested());
        assert!(!holding(&[Key::Escape]).exit_requested());
    }
}
