use atomsim::engine::progress::{Progress, ProgressCallback};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const SPINNER_TICK_MS: u64 = 80;

/// Drives a single stderr progress bar from core progress events.
///
/// Setup phases render as a spinner; the step loop renders as a bar whose
/// message tracks the instantaneous temperature the workflow reports along
/// the way. `ProgressBar` is internally reference-counted and thread-safe,
/// so the callback holds a plain clone of it.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: ProgressBar,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let pb = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stderr());
        pb.finish_and_clear();
        Self { pb }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb = self.pb.clone();

        Box::new(move |progress: Progress| match progress {
            Progress::PhaseStart { name } => {
                pb.reset();
                pb.set_style(Self::spinner_style());
                pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                pb.set_message(name);
            }
            Progress::PhaseFinish => {
                pb.disable_steady_tick();
                pb.finish_and_clear();
            }
            Progress::RunStart { total_steps } => {
                pb.reset();
                pb.set_style(Self::bar_style());
                pb.set_length(total_steps);
                pb.set_message("warming up");
            }
            Progress::StepIncrement => pb.inc(1),
            Progress::RunFinish => {
                if let Some(total) = pb.length() {
                    pb.set_position(total);
                }
                pb.finish();
            }
            Progress::Message(msg) => pb.set_message(msg),
        })
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}...")
            .expect("Failed to create spinner style template")
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("[{bar:40.cyan/blue}] {pos}/{len} steps  {msg:>10}")
            .expect("Failed to create bar style template")
            .progress_chars("=>-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_initializes_in_a_clean_state() {
        let handler = CliProgressHandler::new();
        assert_eq!(handler.pb.length(), Some(0));
        assert!(handler.pb.is_finished());
    }

    #[test]
    fn run_events_drive_length_position_and_finish() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        callback(Progress::RunStart { total_steps: 50 });
        assert_eq!(handler.pb.length(), Some(50));
        assert_eq!(handler.pb.position(), 0);

        callback(Progress::StepIncrement);
        callback(Progress::StepIncrement);
        assert_eq!(handler.pb.position(), 2);

        callback(Progress::RunFinish);
        assert!(handler.pb.is_finished());
        assert_eq!(handler.pb.position(), 50);
    }

    #[test]
    fn messages_update_the_bar_text_mid_run() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        callback(Progress::RunStart { total_steps: 10 });
        assert_eq!(handler.pb.message(), "warming up");

        callback(Progress::Message("297 K".to_string()));
        assert_eq!(handler.pb.message(), "297 K");
    }

    #[test]
    fn callback_can_be_moved_to_another_thread() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        std::thread::spawn(move || {
            callback(Progress::RunStart { total_steps: 5 });
            callback(Progress::StepIncrement);
        })
        .join()
        .unwrap();

        assert_eq!(handler.pb.position(), 1);
    }
}
