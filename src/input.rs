use winit::keyboard::KeyCode;

/// Abstract input vocabulary consumed by the session. The window layer maps
/// raw key events to these; nothing below it knows about keyboards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Forward,
    Backward,
    RotateLeft,
    RotateRight,
    Quit,
}

impl Command {
    /// Keyboard binding: WASD plus arrows for movement, Escape to quit.
    pub fn for_key(key: KeyCode) -> Option<Command> {
        match key {
            KeyCode::KeyW | KeyCode::ArrowUp => Some(Command::Forward),
            KeyCode::KeyS | KeyCode::ArrowDown => Some(Command::Backward),
            KeyCode::KeyA | KeyCode::ArrowLeft => Some(Command::RotateLeft),
            KeyCode::KeyD | KeyCode::ArrowRight => Some(Command::RotateRight),
            KeyCode::Escape => Some(Command::Quit),
            _ => None,
        }
    }
}
