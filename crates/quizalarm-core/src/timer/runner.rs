//! Periodic driver for a [`Countdown`].
//!
//! The runner owns a tokio interval task. The task is released whenever the
//! [`CountdownHandle`] goes away, whether or not the deadline was reached.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::countdown::Countdown;
use crate::events::Event;

pub const DEFAULT_TICK: Duration = Duration::from_millis(1000);

/// What the countdown hands to the quiz flow when it expires.
///
/// Topics travel as a single comma-joined parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Handoff {
    pub topics: String,
}

impl Handoff {
    pub fn new<S: AsRef<str>>(topics: &[S]) -> Self {
        let joined: Vec<&str> = topics.iter().map(|t| t.as_ref()).collect();
        Self {
            topics: joined.join(","),
        }
    }

    pub fn topic_list(&self) -> Vec<String> {
        parse_topic_param(Some(&self.topics))
    }
}

/// Split a comma-joined topic parameter. Absent or empty means no topics.
pub fn parse_topic_param(param: Option<&str>) -> Vec<String> {
    param
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone)]
pub struct CountdownRunner {
    period: Duration,
}

impl Default for CountdownRunner {
    fn default() -> Self {
        Self {
            period: DEFAULT_TICK,
        }
    }
}

impl CountdownRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_period(period: Duration) -> Self {
        Self { period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Start ticking `countdown` on the current tokio runtime.
    ///
    /// `on_event` sees every tick and the completion event. `on_complete`
    /// runs once, right after the completion event, and the task then stops.
    pub fn spawn<E, C>(
        &self,
        mut countdown: Countdown,
        topics: Vec<String>,
        mut on_event: E,
        on_complete: C,
    ) -> CountdownHandle
    where
        E: FnMut(Event) + Send + 'static,
        C: FnOnce() + Send + 'static,
    {
        let period = self.period;
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick of a tokio interval resolves immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                let Some(event) = countdown.tick() else {
                    continue;
                };
                let done = matches!(event, Event::CountdownCompleted { .. });
                on_event(event);
                if done {
                    on_complete();
                    return Handoff::new(&topics);
                }
            }
        });
        CountdownHandle { task: Some(task) }
    }
}

/// Owner of a running countdown task. Dropping it cancels the timer.
#[derive(Debug)]
pub struct CountdownHandle {
    task: Option<JoinHandle<Handoff>>,
}

impl CountdownHandle {
    /// Wait for the deadline. Returns `None` if the task was cancelled.
    pub async fn finished(mut self) -> Option<Handoff> {
        let task = self.task.as_mut()?;
        let result = task.await;
        self.task = None;
        result.ok()
    }

    /// Stop ticking without waiting for the deadline.
    pub fn cancel(mut self) {
        if let Some(task) = self.task.take() {
            tracing::debug!("countdown cancelled");
            task.abort();
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, |t| t.is_finished())
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::countdown::now_ms;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[test]
    fn topic_param_parsing() {
        assert!(parse_topic_param(None).is_empty());
        assert!(parse_topic_param(Some("")).is_empty());
        assert_eq!(
            parse_topic_param(Some("Recursion,Linked Lists")),
            vec!["Recursion".to_string(), "Linked Lists".to_string()]
        );
        assert_eq!(parse_topic_param(Some(" a , ,b ")), vec!["a", "b"]);
    }

    #[test]
    fn handoff_joins_with_commas() {
        let handoff = Handoff::new(&["Recursion", "Backtracking"]);
        assert_eq!(handoff.topics, "Recursion,Backtracking");
        assert_eq!(handoff.topic_list(), vec!["Recursion", "Backtracking"]);
        assert!(Handoff::new::<&str>(&[]).topic_list().is_empty());
    }

    #[tokio::test]
    async fn runner_completes_exactly_once() {
        let completions = Arc::new(AtomicUsize::new(0));
        let displays = Arc::new(Mutex::new(Vec::new()));

        let runner = CountdownRunner::with_period(Duration::from_millis(20));
        let handle = runner.spawn(
            Countdown::new(now_ms() + 100),
            vec!["Recursion".into()],
            {
                let displays = Arc::clone(&displays);
                move |event| {
                    if let Event::CountdownTick { display, .. }
                    | Event::CountdownCompleted { display, .. } = event
                    {
                        displays.lock().unwrap().push(display);
                    }
                }
            },
            {
                let completions = Arc::clone(&completions);
                move || {
                    completions.fetch_add(1, Ordering::SeqCst);
                }
            },
        );

        let handoff = handle.finished().await.expect("countdown should finish");
        assert_eq!(handoff.topic_list(), vec!["Recursion"]);
        assert_eq!(completions.load(Ordering::SeqCst), 1);
        assert_eq!(displays.lock().unwrap().last().map(String::as_str), Some("00:00"));
    }

    #[tokio::test]
    async fn past_deadline_fires_on_first_tick() {
        let completions = Arc::new(AtomicUsize::new(0));
        let runner = CountdownRunner::with_period(Duration::from_millis(10));
        let handle = runner.spawn(Countdown::new(1), Vec::new(), |_| {}, {
            let completions = Arc::clone(&completions);
            move || {
                completions.fetch_add(1, Ordering::SeqCst);
            }
        });
        let handoff = handle.finished().await.unwrap();
        assert!(handoff.topic_list().is_empty());
        assert_eq!(completions.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn dropping_handle_cancels_timer() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let runner = CountdownRunner::with_period(Duration::from_millis(10));
        let handle = runner.spawn(
            Countdown::new(now_ms() + 60_000),
            Vec::new(),
            {
                let ticks = Arc::clone(&ticks);
                move |_| {
                    ticks.fetch_add(1, Ordering::SeqCst);
                }
            },
            || panic!("must not complete"),
        );
        tokio::time::sleep(Duration::from_millis(50)).await;
        drop(handle);
        tokio::time::sleep(Duration::from_millis(30)).await;
        let after_drop = ticks.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), after_drop);
    }

    #[tokio::test]
    async fn cancel_stops_ticking_and_never_completes() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let runner = CountdownRunner::with_period(Duration::from_millis(10));
        let handle = runner.spawn(
            Countdown::new(now_ms() + 60_000),
            Vec::new(),
            {
                let ticks = Arc::clone(&ticks);
                move |_| {
                    ticks.fetch_add(1, Ordering::SeqCst);
                }
            },
            || panic!("must not complete"),
        );
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!handle.is_finished());
        handle.cancel();
        tokio::time::sleep(Duration::from_millis(30)).await;
        let after_cancel = ticks.load(Ordering::SeqCst);
        assert!(after_cancel > 0);
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), after_cancel);
    }

    #[tokio::test]
    async fn handle_reports_finished_after_deadline() {
        let runner = CountdownRunner::with_period(Duration::from_millis(10));
        let handle = runner.spawn(Countdown::new(1), vec!["Recursion".into()], |_| {}, || {});
        for _ in 0..50 {
            if handle.is_finished() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert!(handle.is_finished());
        let handoff = handle.finished().await.unwrap();
        assert_eq!(handoff.topics, "Recursion");
    }
}
