//! Line-based keyboard stand-in for the headless binary
//!
//! A reader thread forwards each line of input over a channel; the frame loop
//! drains the channel once per frame and turns each line into key events:
//!
//! | line           | effect                 |
//! |----------------|------------------------|
//! | `w`, `up`      | hold up, release down  |
//! | `s`, `down`    | hold down, release up  |
//! | `x`, empty     | release both           |
//! | `q`, `esc`     | request close          |

use std::io::{BufRead, BufReader};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use super::{InputState, Key, KeyAction};

/// Key events a single console line stands for
pub fn key_events_for_line(line: &str) -> Vec<(Key, KeyAction)> {
    match line.trim().to_ascii_lowercase().as_str() {
        "w" | "up" => vec![(Key::S, KeyAction::Release), (Key::W, KeyAction::Press)],
        "s" | "down" => vec![(Key::W, KeyAction::Release), (Key::S, KeyAction::Press)],
        "x" | "" => vec![(Key::W, KeyAction::Release), (Key::S, KeyAction::Release)],
        "q" | "quit" | "esc" => vec![(Key::Escape, KeyAction::Press)],
        other => {
            log::warn!("Unknown command {:?} (w/s/x/q)", other);
            Vec::new()
        }
    }
}

/// Receives console lines from a background reader
#[derive(Debug)]
pub struct ConsoleInput {
    lines: Receiver<String>,
    connected: bool,
}

impl ConsoleInput {
    /// Read lines from stdin on a background thread
    pub fn stdin() -> Self {
        Self::from_reader(BufReader::new(std::io::stdin()))
    }

    /// Read lines from `reader` on a background thread
    pub fn from_reader<B: BufRead + Send + 'static>(reader: B) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            for line in reader.lines() {
                let Ok(line) = line else {
                    break;
                };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });
        Self::from_receiver(rx)
    }

    pub fn from_receiver(lines: Receiver<String>) -> Self {
        Self {
            lines,
            connected: true,
        }
    }

    /// Apply every line received since the last call. Never blocks.
    ///
    /// End of input leaves the latched keys as they are; it does not close
    /// the game, so a detached stdin still runs until the frame cap.
    pub fn drain(&mut self, input: &mut InputState) {
        while self.connected {
            match self.lines.try_recv() {
                Ok(line) => {
                    for (key, action) in key_events_for_line(&line) {
                        input.handle_key(key, action);
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::debug!("Console input closed");
                    self.connected = false;
                }
            }
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::time::{Duration, Instant};

    #[test]
    fn test_line_mapping() {
        assert_eq!(
            key_events_for_line("W\n"),
            vec![(Key::S, KeyAction::Release), (Key::W, KeyAction::Press)]
        );
        assert_eq!(key_events_for_line(" down "), key_events_for_line("s"));
        assert_eq!(key_events_for_line(""), key_events_for_line("x"));
        assert_eq!(
            key_events_for_line("esc"),
            vec![(Key::Escape, KeyAction::Press)]
        );
        assert!(key_events_for_line("jump").is_empty());
    }

    #[test]
    fn test_drain_latches_keys() {
        let (tx, rx) = mpsc::channel();
        let mut console = ConsoleInput::from_receiver(rx);
        let mut input = InputState::new();

        tx.send("w".to_string()).expect("send");
        console.drain(&mut input);
        assert!(input.up() && !input.down());

        // Latched keys stay held across empty frames
        console.drain(&mut input);
        assert!(input.up());

        tx.send("s".to_string()).expect("send");
        tx.send("x".to_string()).expect("send");
        console.drain(&mut input);
        assert!(!input.up() && !input.down());
        assert!(!input.close_requested());

        tx.send("q".to_string()).expect("send");
        console.drain(&mut input);
        assert!(input.close_requested());
    }

    #[test]
    fn test_end_of_input_keeps_running() {
        let (tx, rx) = mpsc::channel();
        let mut console = ConsoleInput::from_receiver(rx);
        let mut input = InputState::new();

        tx.send("up".to_string()).expect("send");
        drop(tx);
        console.drain(&mut input);
        assert!(input.up());
        assert!(!input.close_requested());
        assert!(!console.is_connected());

        console.drain(&mut input);
        assert!(input.up());
    }

    #[test]
    fn test_reader_thread_forwards_lines() {
        let mut console = ConsoleInput::from_reader(Cursor::new("s\nq\n"));
        let mut input = InputState::new();

        let deadline = Instant::now() + Duration::from_secs(5);
        while console.is_connected() && Instant::now() < deadline {
            console.drain(&mut input);
            thread::sleep(Duration::from_millis(1));
        }
        assert!(input.down());
        assert!(input.close_requested());
    }
}
