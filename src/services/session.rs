//! Session loop
//!
//! Drives one run of the game: reads commands, plays rounds through the
//! engine, renders results and persists the counters on the way out.
//!
//! ```text
//! Welcome -> AwaitingInput <-> RoundResolved
//!                |   ^
//!                v   |
//!          ConfirmingReset
//!
//! AwaitingInput | RoundResolved | ConfirmingReset -> Terminated
//! ```
//!
//! End of input and Ctrl-C surface from the reader as [`Input::Closed`]
//! and take the same path as `quit`.

use crate::game_engine::{GameEngine, MoveSource};
use crate::io::{Input, InputReader, OutputWriter};
use crate::models::command::{is_affirmative, is_negative, Command};
use crate::models::constants::CONTINUE_PROMPT_INTERVAL;
use crate::models::statistics::Statistics;
use crate::services::persistence::StatsStore;
use crate::ui::presenters::{RoundPresenter, StatsPresenter, WelcomePresenter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Welcome,
    AwaitingInput,
    RoundResolved,
    ConfirmingReset,
    Terminated,
}

/// Loads saved statistics, falling back to zeros when the file is absent
/// or unreadable. The player is told about the latter.
pub fn load_statistics(store: &StatsStore, output: &mut dyn OutputWriter) -> Statistics {
    match store.load() {
        Ok(Some(stats)) => stats,
        Ok(None) => {
            log::info!("no statistics at {}, starting fresh", store.path().display());
            Statistics::new()
        }
        Err(e) => {
            log::warn!("discarding statistics at {}: {}", store.path().display(), e);
            StatsPresenter::show_load_warning(&e.to_string(), output);
            Statistics::new()
        }
    }
}

pub struct Session<'a, S: MoveSource> {
    engine: GameEngine<S>,
    store: StatsStore,
    input: &'a mut dyn InputReader,
    output: &'a mut dyn OutputWriter,
    state: SessionState,
    session_rounds: u32,
}

impl<'a, S: MoveSource> Session<'a, S> {
    pub fn new(
        engine: GameEngine<S>,
        store: StatsStore,
        input: &'a mut dyn InputReader,
        output: &'a mut dyn OutputWriter,
    ) -> Self {
        Self {
            engine,
            store,
            input,
            output,
            state: SessionState::Welcome,
            session_rounds: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Runs until the player leaves, then saves and says goodbye.
    /// Consumes the session so the shutdown step happens once.
    pub fn run(mut self) -> Statistics {
        while self.state != SessionState::Terminated {
            let next = self.step();
            if next != self.state {
                log::debug!("{:?} -> {:?}", self.state, next);
            }
            self.state = next;
        }
        self.shutdown();
        *self.engine.statistics()
    }

    fn step(&mut self) -> SessionState {
        match self.state {
            SessionState::Welcome => {
                WelcomePresenter::show_welcome(self.output);
                SessionState::AwaitingInput
            }
            SessionState::AwaitingInput => self.await_command(),
            SessionState::RoundResolved => self.after_round(),
            SessionState::ConfirmingReset => self.confirm_reset(),
            SessionState::Terminated => SessionState::Terminated,
        }
    }

    fn await_command(&mut self) -> SessionState {
        let Some(line) = self.prompt("Your choice (rock/paper/scissors):") else {
            return SessionState::Terminated;
        };
        match Command::parse(&line) {
            Some(Command::Play(player)) => {
                let round = self.engine.play_round(player);
                self.session_rounds += 1;
                RoundPresenter::show_round(&round, self.output);
                SessionState::RoundResolved
            }
            Some(Command::Stats) => {
                StatsPresenter::show_statistics(self.engine.statistics(), self.output);
                SessionState::AwaitingInput
            }
            Some(Command::Reset) => SessionState::ConfirmingReset,
            Some(Command::Help) => SessionState::Welcome,
            Some(Command::Quit) => SessionState::Terminated,
            None => {
                WelcomePresenter::show_invalid_choice(&line, self.output);
                SessionState::AwaitingInput
            }
        }
    }

    // Cumulative total, so games loaded from earlier sessions count.
    fn after_round(&mut self) -> SessionState {
        let total = self.engine.statistics().total_games();
        if total == 0 || total % CONTINUE_PROMPT_INTERVAL != 0 {
            return SessionState::AwaitingInput;
        }
        match self.prompt(&format!("{} games played. Continue playing? (y/n):", total)) {
            Some(answer) if !is_negative(&answer) => SessionState::AwaitingInput,
            _ => SessionState::Terminated,
        }
    }

    fn confirm_reset(&mut self) -> SessionState {
        let Some(answer) = self.prompt("Reset all statistics? This cannot be undone. (y/n):") else {
            return SessionState::Terminated;
        };
        if !is_affirmative(&answer) {
            StatsPresenter::show_reset_cancelled(self.output);
            return SessionState::AwaitingInput;
        }
        self.engine.reset();
        if let Err(e) = self.store.clear() {
            log::warn!("could not remove {}: {}", self.store.path().display(), e);
        }
        StatsPresenter::show_reset_done(self.output);
        SessionState::AwaitingInput
    }

    fn shutdown(&mut self) {
        let stats = *self.engine.statistics();
        if let Err(e) = self.store.save(&stats) {
            log::warn!("could not save {}: {}", self.store.path().display(), e);
            StatsPresenter::show_save_warning(&e.to_string(), self.output);
        }
        if self.session_rounds > 0 {
            StatsPresenter::show_final(&stats, self.session_rounds, self.output);
        }
        WelcomePresenter::show_farewell(self.output);
    }

    /// `None` when input is closed, interrupted or failing.
    fn prompt(&mut self, prompt: &str) -> Option<String> {
        match self.input.read_line(prompt) {
            Ok(Input::Line(line)) => Some(line),
            Ok(Input::Closed) => None,
            Err(e) => {
                log::warn!("input error, ending session: {}", e);
                None
            }
        }
    }
}
