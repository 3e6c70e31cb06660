use log::{debug, info};

use crate::config::Config;
use crate::input::Command;
use crate::map::Map;
use crate::movement::{self, MoveDirection};
use crate::player::PlayerState;
use crate::raycast;
use crate::render::{self, DrawCommand};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// Owns the world and the player pose, applies input commands between frames
/// and produces the per-frame draw-command sequence. Every input except Quit
/// is a self-loop on Running.
pub struct Session {
    map: Map,
    player: PlayerState,
    screen_width: usize,
    screen_height: usize,
    move_speed: f32,
    rot_speed: f32,
    state: SessionState,
}

impl Session {
    pub fn new(
        map: Map,
        player: PlayerState,
        screen_width: usize,
        screen_height: usize,
        move_speed: f32,
        rot_speed: f32,
    ) -> Self {
        Self {
            map,
            player,
            screen_width,
            screen_height,
            move_speed,
            rot_speed,
            state: SessionState::Running,
        }
    }

    /// Builtin map with the configured pose and speeds.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Map::builtin(),
            config.player.pose(),
            config.display.width,
            config.display.height,
            config.motion.move_speed,
            config.motion.rot_speed,
        )
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn screen_size(&self) -> (usize, usize) {
        (self.screen_width, self.screen_height)
    }

    /// Apply one input command. After termination all commands are inert.
    pub fn apply(&mut self, command: Command) {
        if self.state == SessionState::Terminated {
            return;
        }
        match command {
            Command::Forward => {
                movement::translate(&self.map, &mut self.player, MoveDirection::Forward, self.move_speed)
            }
            Command::Backward => {
                movement::translate(&self.map, &mut self.player, MoveDirection::Backward, self.move_speed)
            }
            Command::RotateLeft => self.player.rotate(self.rot_speed),
            Command::RotateRight => self.player.rotate(-self.rot_speed),
            Command::Quit => {
                info!("quit requested, terminating session");
                self.state = SessionState::Terminated;
            }
        }
        debug!(
            "pose: ({:.3}, {:.3}) dir ({:.3}, {:.3})",
            self.player.pos[0], self.player.pos[1], self.player.dir[0], self.player.dir[1]
        );
    }

    /// One ray-cast + projection pass over the current pose: exactly one
    /// draw command per screen column, in column order.
    pub fn frame(&self) -> Vec<DrawCommand> {
        let results = raycast::cast(&self.map, &self.player, self.screen_width);
        render::project(&results, self.screen_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_session() -> Session {
        Session::new(
            Map::builtin(),
            PlayerState::new([22.5, 12.5], [-1.0, 0.0], [0.0, 0.66]),
            320,
            200,
            0.1,
            0.05,
        )
    }

    #[test]
    fn quit_transitions_to_terminated() {
        let mut session = test_session();
        assert!(session.is_running());
        session.apply(Command::Quit);
        assert_eq!(session.state(), SessionState::Terminated);
    }

    #[test]
    fn commands_after_termination_are_inert() {
        let mut session = test_session();
        session.apply(Command::Quit);
        let pos = session.player().pos;
        session.apply(Command::Forward);
        session.apply(Command::RotateLeft);
        assert_eq!(session.player().pos, pos);
        assert_eq!(session.player().dir, [-1.0, 0.0]);
    }

    #[test]
    fn frame_emits_one_command_per_column_in_order() {
        let session = test_session();
        let commands = session.frame();
        assert_eq!(commands.len(), 320);
        for (i, command) in commands.iter().enumerate() {
            assert_eq!(command.column, i);
        }
    }

    #[test]
    fn frames_without_input_are_identical() {
        let session = test_session();
        assert_eq!(session.frame(), session.frame());
    }

    #[test]
    fn movement_commands_mutate_the_pose() {
        let mut session = test_session();
        session.apply(Command::Forward);
        assert!((session.player().pos[0] - 22.4).abs() < 1e-6);
        session.apply(Command::RotateLeft);
        assert!((session.player().dir[1] - -0.05f32.sin()).abs() < 1e-6);
    }
}
