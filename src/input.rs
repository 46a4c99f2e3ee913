use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::SpeedLevel;
use crate::snake::Direction;

/// Player intent decoded from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Steer(Direction),
    Pause,
    Start,
    Stop,
    Restart,
    Level(SpeedLevel),
    Quit,
}

/// Maps a key press to a signal. Keys without a meaning map to `None`.
pub fn map_key(key: KeyEvent) -> Option<Signal> {
    if is_ctrl_c(&key) {
        return Some(Signal::Quit);
    }

    let signal = match key.code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Signal::Steer(Direction::Up),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Signal::Steer(Direction::Left),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Signal::Steer(Direction::Down),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Signal::Steer(Direction::Right),
        KeyCode::Char(' ') | KeyCode::Esc => Signal::Pause,
        KeyCode::Enter => Signal::Start,
        KeyCode::Char('x') | KeyCode::Char('X') => Signal::Stop,
        KeyCode::Char('r') | KeyCode::Char('R') => Signal::Restart,
        KeyCode::Char('1') => Signal::Level(SpeedLevel::Easy),
        KeyCode::Char('2') => Signal::Level(SpeedLevel::Medium),
        KeyCode::Char('3') => Signal::Level(SpeedLevel::Hard),
        KeyCode::Char('q') | KeyCode::Char('Q') => Signal::Quit,
        _ => return None,
    };

    Some(signal)
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Option<Signal> {
        map_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(press(KeyCode::Up), Some(Signal::Steer(Direction::Up)));
        assert_eq!(press(KeyCode::Down), Some(Signal::Steer(Direction::Down)));
        assert_eq!(press(KeyCode::Left), Some(Signal::Steer(Direction::Left)));
        assert_eq!(press(KeyCode::Right), Some(Signal::Steer(Direction::Right)));
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(press(KeyCode::Char('w')), Some(Signal::Steer(Direction::Up)));
        assert_eq!(press(KeyCode::Char('A')), Some(Signal::Steer(Direction::Left)));
        assert_eq!(press(KeyCode::Char('s')), Some(Signal::Steer(Direction::Down)));
        assert_eq!(press(KeyCode::Char('d')), Some(Signal::Steer(Direction::Right)));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(press(KeyCode::Char(' ')), Some(Signal::Pause));
        assert_eq!(press(KeyCode::Esc), Some(Signal::Pause));
        assert_eq!(press(KeyCode::Enter), Some(Signal::Start));
        assert_eq!(press(KeyCode::Char('x')), Some(Signal::Stop));
        assert_eq!(press(KeyCode::Char('r')), Some(Signal::Restart));
        assert_eq!(press(KeyCode::Char('q')), Some(Signal::Quit));
    }

    #[test]
    fn test_level_keys() {
        assert_eq!(press(KeyCode::Char('1')), Some(Signal::Level(SpeedLevel::Easy)));
        assert_eq!(press(KeyCode::Char('2')), Some(Signal::Level(SpeedLevel::Medium)));
        assert_eq!(press(KeyCode::Char('3')), Some(Signal::Level(SpeedLevel::Hard)));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c), Some(Signal::Quit));
    }

    #[test]
    fn test_unknown_keys() {
        assert_eq!(press(KeyCode::Char('c')), None);
        assert_eq!(press(KeyCode::Char('z')), None);
        assert_eq!(press(KeyCode::Tab), None);
    }
}
