//! Terminal setup, input stream and redraw scheduling.
//!
//! `Tui` puts the terminal into raw mode on the alternate screen with
//! bracketed paste and focus reporting, so the search field can treat the
//! terminal window losing focus like a blur. Redraw requests from anywhere
//! in the app are coalesced by a background task into `TuiEvent::Draw`.

use anyhow::Result;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableFocusChange;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableFocusChange;
use crossterm::event::Event;
use crossterm::event::EventStream;
use crossterm::event::KeyEvent;
use crossterm::execute;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::stdout;
use std::io::Stdout;
use std::pin::Pin;
use tokio::select;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio_stream::Stream;
use tokio_stream::StreamExt;

pub type TerminalBackend = CrosstermBackend<Stdout>;

/// Input the app reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    Key(KeyEvent),
    /// Text from a bracketed paste.
    Paste(String),
    FocusGained,
    FocusLost,
    /// Time to redraw.
    Draw,
}

impl TuiEvent {
    /// Map a terminal event; events the app ignores map to `None`.
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) => Some(TuiEvent::Key(key)),
            Event::Paste(text) => Some(TuiEvent::Paste(text)),
            Event::FocusGained => Some(TuiEvent::FocusGained),
            Event::FocusLost => Some(TuiEvent::FocusLost),
            Event::Resize(_, _) => Some(TuiEvent::Draw),
            _ => None,
        }
    }
}

pub struct Tui {
    terminal: Terminal<TerminalBackend>,
    frame_tx: mpsc::UnboundedSender<Instant>,
    draw_tx: broadcast::Sender<()>,
}

impl Tui {
    /// Enter raw mode and the alternate screen and start the redraw scheduler.
    ///
    /// Must be called from within a tokio runtime.
    pub fn init() -> Result<Self> {
        enable_raw_mode()?;
        execute!(
            stdout(),
            EnterAlternateScreen,
            EnableBracketedPaste,
            EnableFocusChange
        )?;
        install_panic_hook();

        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

        let (frame_tx, frame_rx) = mpsc::unbounded_channel();
        let (draw_tx, _) = broadcast::channel(1);
        tokio::spawn(coalesce_frames(frame_rx, draw_tx.clone()));

        Ok(Self {
            terminal,
            frame_tx,
            draw_tx,
        })
    }

    /// Leave raw mode and the alternate screen.
    pub fn restore(&mut self) -> Result<()> {
        leave_terminal_modes()?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    pub fn frame_requester(&self) -> FrameRequester {
        FrameRequester {
            frame_tx: self.frame_tx.clone(),
        }
    }

    /// Terminal input merged with scheduled redraws.
    pub fn event_stream(&self) -> Pin<Box<dyn Stream<Item = TuiEvent> + Send + 'static>> {
        let mut terminal_events = EventStream::new();
        let mut draw_rx = self.draw_tx.subscribe();

        Box::pin(async_stream::stream! {
            loop {
                select! {
                    Some(Ok(event)) = terminal_events.next() => {
                        if let Some(event) = TuiEvent::from_terminal(event) {
                            yield event;
                        }
                    }
                    received = draw_rx.recv() => match received {
                        // A lagged receiver missed draws; one redraw covers them.
                        Ok(()) | Err(RecvError::Lagged(_)) => yield TuiEvent::Draw,
                        Err(RecvError::Closed) => break,
                    },
                }
            }
        })
    }

    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = leave_terminal_modes();
    }
}

/// Cheap handle for requesting a redraw.
#[derive(Clone, Debug)]
pub struct FrameRequester {
    frame_tx: mpsc::UnboundedSender<Instant>,
}

impl FrameRequester {
    /// Request a redraw as soon as possible.
    pub fn schedule_frame(&self) {
        let _ = self.frame_tx.send(Instant::now());
    }
}

/// Turn redraw requests into draw notifications.
///
/// Requests arriving before the pending deadline collapse into a single
/// draw at the earliest requested time.
async fn coalesce_frames(
    mut frame_rx: mpsc::UnboundedReceiver<Instant>,
    draw_tx: broadcast::Sender<()>,
) {
    let mut deadline: Option<Instant> = None;

    loop {
        let Some(at) = deadline else {
            match frame_rx.recv().await {
                Some(at) => deadline = Some(at),
                None => return,
            }
            continue;
        };

        select! {
            biased;
            requested = frame_rx.recv() => match requested {
                Some(earlier) if earlier < at => deadline = Some(earlier),
                Some(_) => {}
                None => return,
            },
            () = tokio::time::sleep_until(at) => {
                deadline = None;
                let _ = draw_tx.send(());
            }
        }
    }
}

fn leave_terminal_modes() -> std::io::Result<()> {
    disable_raw_mode()?;
    execute!(
        stdout(),
        DisableFocusChange,
        DisableBracketedPaste,
        LeaveAlternateScreen
    )
}

/// Restore the terminal before the default panic output is printed.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = leave_terminal_modes();
        previous(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers, MouseEvent, MouseEventKind};
    use std::time::Duration;

    #[test]
    fn test_terminal_event_mapping() {
        let key = KeyEvent::from(KeyCode::Char('a'));
        assert_eq!(TuiEvent::from_terminal(Event::Key(key)), Some(TuiEvent::Key(key)));
        assert_eq!(
            TuiEvent::from_terminal(Event::Paste("ball".to_string())),
            Some(TuiEvent::Paste("ball".to_string()))
        );
        assert_eq!(TuiEvent::from_terminal(Event::FocusLost), Some(TuiEvent::FocusLost));
        assert_eq!(TuiEvent::from_terminal(Event::Resize(80, 24)), Some(TuiEvent::Draw));

        let mouse = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(TuiEvent::from_terminal(Event::Mouse(mouse)), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_requests_coalesce_into_one_draw() {
        let (frame_tx, frame_rx) = mpsc::unbounded_channel();
        let (draw_tx, mut draw_rx) = broadcast::channel(4);
        tokio::spawn(coalesce_frames(frame_rx, draw_tx));

        let requester = FrameRequester { frame_tx };
        requester.schedule_frame();
        requester.schedule_frame();
        requester.schedule_frame();

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(draw_rx.try_recv(), Ok(()));
        assert!(draw_rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_earlier_request_moves_deadline() {
        let (frame_tx, frame_rx) = mpsc::unbounded_channel();
        let (draw_tx, mut draw_rx) = broadcast::channel(4);
        tokio::spawn(coalesce_frames(frame_rx, draw_tx));

        frame_tx.send(Instant::now() + Duration::from_secs(5)).unwrap();
        frame_tx.send(Instant::now() + Duration::from_millis(50)).unwrap();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(draw_rx.try_recv(), Ok(()));
    }

    #[test]
    fn test_frame_requester_survives_closed_scheduler() {
        let (frame_tx, frame_rx) = mpsc::unbounded_channel();
        drop(frame_rx);
        FrameRequester { frame_tx }.schedule_frame();
    }
}
