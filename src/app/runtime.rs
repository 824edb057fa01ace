use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use ratatui::crossterm::execute;

use super::{App, FilterOutcome};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Run `app` in the terminal until the user quits, returning the final
/// filter.
pub fn run(mut app: App) -> Result<FilterOutcome> {
	app.run()
}

/// Raw mode, alternate screen and mouse capture for as long as the value
/// lives. Dropping it hands the terminal back, including on early returns.
struct TerminalSession {
	terminal: DefaultTerminal,
}

impl TerminalSession {
	fn enter() -> Result<Self> {
		let mut session = Self {
			terminal: ratatui::init(),
		};
		execute!(io::stdout(), EnableMouseCapture)?;
		session.terminal.clear()?;
		Ok(session)
	}
}

impl Drop for TerminalSession {
	fn drop(&mut self) {
		if let Err(err) = execute!(io::stdout(), DisableMouseCapture) {
			log::warn!("failed to disable mouse capture: {err}");
		}
		ratatui::restore();
	}
}

/// Reads terminal events on a background thread so drawing never blocks on
/// input.
struct InputPump {
	running: Arc<AtomicBool>,
	events: mpsc::Receiver<Event>,
	reader: Option<JoinHandle<Result<()>>>,
}

impl InputPump {
	fn spawn() -> Self {
		let (sender, events) = mpsc::channel();
		let running = Arc::new(AtomicBool::new(true));
		let flag = Arc::clone(&running);

		let reader = thread::spawn(move || -> Result<()> {
			while flag.load(Ordering::Relaxed) {
				if event::poll(POLL_INTERVAL)? && sender.send(event::read()?).is_err() {
					break;
				}
			}
			Ok(())
		});

		Self {
			running,
			events,
			reader: Some(reader),
		}
	}

	/// The next queued event, if any. A reader that stopped on its own is an
	/// error.
	fn next(&self) -> Result<Option<Event>> {
		match self.events.try_recv() {
			Ok(event) => Ok(Some(event)),
			Err(mpsc::TryRecvError::Empty) => Ok(None),
			Err(mpsc::TryRecvError::Disconnected) => {
				Err(anyhow!("input event channel disconnected"))
			}
		}
	}

	/// Stop the reader and surface any error it hit.
	fn stop(mut self) -> Result<()> {
		self.running.store(false, Ordering::Relaxed);
		match self.reader.take().map(JoinHandle::join) {
			Some(Ok(result)) => result,
			Some(Err(panic)) => std::panic::resume_unwind(panic),
			None => Ok(()),
		}
	}
}

impl Drop for InputPump {
	fn drop(&mut self) {
		self.running.store(false, Ordering::Relaxed);
	}
}

impl App {
	/// Pump the terminal event loop until the user exits.
	pub fn run(&mut self) -> Result<FilterOutcome> {
		let mut session = TerminalSession::enter()?;
		let input = InputPump::spawn();

		let outcome = self.drive(&mut session.terminal, &input);
		drop(session);
		let stopped = input.stop();

		let outcome = outcome?;
		stopped?;
		Ok(outcome)
	}

	fn drive(&mut self, terminal: &mut DefaultTerminal, input: &InputPump) -> Result<FilterOutcome> {
		loop {
			// A resize needs no handling of its own: the redraw re-measures the tab row.
			terminal.draw(|frame| self.draw(frame))?;

			while let Some(event) = input.next()? {
				if let Some(outcome) = self.handle_event(event) {
					return Ok(outcome);
				}
			}

			thread::sleep(FRAME_INTERVAL);
		}
	}

	/// Route one terminal event. Only key presses count; repeats and releases
	/// reported by enhanced keyboards are ignored.
	fn handle_event(&mut self, event: Event) -> Option<FilterOutcome> {
		match event {
			Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
			Event::Mouse(mouse) => {
				self.handle_mouse(mouse);
				None
			}
			_ => None,
		}
	}
}
