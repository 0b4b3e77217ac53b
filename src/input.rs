use winit::event::{ElementState, KeyboardInput, VirtualKeyCode, WindowEvent};

use crate::pos::Dir;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Turn(Dir),
}

pub fn command_for_key(key: VirtualKeyCode, state: ElementState) -> Option<Command> {
    if state != ElementState::Pressed {
        return None;
    }
    match key {
        VirtualKeyCode::Up => Some(Command::Turn(Dir::Up)),
        VirtualKeyCode::Down => Some(Command::Turn(Dir::Down)),
        VirtualKeyCode::Left => Some(Command::Turn(Dir::Left)),
        VirtualKeyCode::Right => Some(Command::Turn(Dir::Right)),
        VirtualKeyCode::Escape => Some(Command::Quit),
        _ => None,
    }
}

pub fn translate(event: &WindowEvent<'_>) -> Option<Command> {
    match event {
        WindowEvent::CloseRequested | WindowEvent::Destroyed => Some(Command::Quit),
        WindowEvent::KeyboardInput {
            input:
                KeyboardInput {
                    state,
                    virtual_keycode: Some(key),
                    ..
                },
            ..
        } => command_for_key(*key, *state),
        _ => None,
    }
}

/// Commands gathered since the last frame, in arrival order.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: Vec<Command>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.pending.push(command);
    }

    /// Queues the command for `event`, if any.
    pub fn handle(&mut self, event: &WindowEvent<'_>) {
        if let Some(command) = translate(event) {
            self.push(command);
        }
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, Command> {
        self.pending.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_map_to_turns() {
        let cases = [
            (VirtualKeyCode::Up, Dir::Up),
            (VirtualKeyCode::Down, Dir::Down),
            (VirtualKeyCode::Left, Dir::Left),
            (VirtualKeyCode::Right, Dir::Right),
        ];
        for (key, dir) in cases {
            assert_eq!(
                command_for_key(key, ElementState::Pressed),
                Some(Command::Turn(dir))
            );
        }
    }

    #[test]
    fn releases_and_other_keys_are_ignored() {
        assert_eq!(command_for_key(VirtualKeyCode::Up, ElementState::Released), None);
        assert_eq!(command_for_key(VirtualKeyCode::W, ElementState::Pressed), None);
        assert_eq!(command_for_key(VirtualKeyCode::Space, ElementState::Pressed), None);
    }

    #[test]
    fn close_and_escape_quit() {
        assert_eq!(translate(&WindowEvent::CloseRequested), Some(Command::Quit));
        assert_eq!(
            command_for_key(VirtualKeyCode::Escape, ElementState::Pressed),
            Some(Command::Quit)
        );
        assert_eq!(translate(&WindowEvent::Focused(true)), None);
    }

    #[test]
    fn queue_keeps_arrival_order() {
        let mut queue = InputQueue::new();
        queue.handle(&WindowEvent::Focused(false));
        assert!(queue.is_empty());
        queue.handle(&WindowEvent::CloseRequested);
        queue.push(Command::Turn(Dir::Left));
        let drained: Vec<Command> = queue.drain().collect();
        assert_eq!(drained, vec![Command::Quit, Command::Turn(Dir::Left)]);
        assert!(queue.is_empty());
    }
}
