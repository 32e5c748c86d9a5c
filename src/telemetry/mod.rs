//! Session telemetry for vaxassist
//!
//! Counts what happened during an interactive session for `/status` and the
//! verbose end-of-session summary. Nothing here feeds back into the
//! questionnaire or the recommendations.

use std::time::{Duration, Instant};

use colored::Colorize;

use crate::cli::Verbosity;
use crate::flow::QuestionId;
use crate::types::{Priority, VaccineRecommendation};

/// Telemetry event types
#[derive(Debug, Clone, PartialEq)]
pub enum TelemetryEvent {
    QuestionAsked { question: QuestionId },
    AnswerSubmitted { question: QuestionId },
    Reprompted { question: QuestionId },
    SessionRestarted,
    RecommendationsGenerated { high: usize, medium: usize, low: usize },
}

impl TelemetryEvent {
    /// Short human-readable label
    pub fn describe(&self) -> String {
        match self {
            TelemetryEvent::QuestionAsked { question } => format!("asked {}", question),
            TelemetryEvent::AnswerSubmitted { question } => format!("answered {}", question),
            TelemetryEvent::Reprompted { question } => format!("re-asked {}", question),
            TelemetryEvent::SessionRestarted => "restarted".to_string(),
            TelemetryEvent::RecommendationsGenerated { high, medium, low } => {
                format!("recommended {} high, {} medium, {} low", high, medium, low)
            }
        }
    }
}

/// Telemetry statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TelemetryStats {
    pub questions_asked: usize,
    pub answers_submitted: usize,
    pub reprompts: usize,
    pub restarts: usize,
    pub high_priority: usize,
    pub medium_priority: usize,
    pub low_priority: usize,
}

impl TelemetryStats {
    pub fn total_recommendations(&self) -> usize {
        self.high_priority + self.medium_priority + self.low_priority
    }
}

/// Telemetry collector
#[derive(Debug, Clone)]
pub struct SessionTelemetry {
    events: Vec<TelemetryEvent>,
    stats: TelemetryStats,
    start_time: Instant,
}

impl SessionTelemetry {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            stats: TelemetryStats::default(),
            start_time: Instant::now(),
        }
    }

    /// Record an event
    pub fn record(&mut self, event: TelemetryEvent) {
        match &event {
            TelemetryEvent::QuestionAsked { .. } => self.stats.questions_asked += 1,
            TelemetryEvent::AnswerSubmitted { .. } => self.stats.answers_submitted += 1,
            TelemetryEvent::Reprompted { .. } => self.stats.reprompts += 1,
            TelemetryEvent::SessionRestarted => self.stats.restarts += 1,
            TelemetryEvent::RecommendationsGenerated { high, medium, low } => {
                self.stats.high_priority += high;
                self.stats.medium_priority += medium;
                self.stats.low_priority += low;
            }
        }
        self.events.push(event);
    }

    /// Record a generated recommendation list
    pub fn record_recommendations(&mut self, recommendations: &[VaccineRecommendation]) {
        let count = |p: Priority| recommendations.iter().filter(|r| r.priority == p).count();
        self.record(TelemetryEvent::RecommendationsGenerated {
            high: count(Priority::High),
            medium: count(Priority::Medium),
            low: count(Priority::Low),
        });
    }

    /// Get current statistics
    pub fn stats(&self) -> &TelemetryStats {
        &self.stats
    }

    /// Get elapsed time since start
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Get recent events (last n)
    pub fn recent_events(&self, n: usize) -> &[TelemetryEvent] {
        let start = self.events.len().saturating_sub(n);
        &self.events[start..]
    }
}

impl Default for SessionTelemetry {
    fn default() -> Self {
        Self::new()
    }
}

/// Human-friendly duration, e.g. "1m 5s"
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// Simple telemetry display
pub struct TelemetryDisplay<'a> {
    telemetry: &'a SessionTelemetry,
    verbosity: Verbosity,
}

impl<'a> TelemetryDisplay<'a> {
    pub fn new(telemetry: &'a SessionTelemetry, verbosity: Verbosity) -> Self {
        Self {
            telemetry,
            verbosity,
        }
    }

    /// Display summary statistics
    pub fn display_summary(&self) {
        if !self.verbosity.show_details() {
            return;
        }

        let stats = self.telemetry.stats();
        println!("\n{}", "Session Summary".bold().cyan());
        println!("{}", "-".repeat(37).cyan());
        println!("Duration:          {}", format_duration(self.telemetry.elapsed()));
        println!("Questions asked:   {}", stats.questions_asked);
        println!("Answers given:     {}", stats.answers_submitted);
        println!("Re-asked:          {}", stats.reprompts);
        println!("Restarts:          {}", stats.restarts);
        println!(
            "Recommendations:   {} ({} high, {} medium, {} low)",
            stats.total_recommendations(),
            stats.high_priority,
            stats.medium_priority,
            stats.low_priority
        );
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine;
    use crate::types::HealthProfile;

    #[test]
    fn test_counts_events() {
        let mut telemetry = SessionTelemetry::new();
        telemetry.record(TelemetryEvent::QuestionAsked { question: QuestionId::Age });
        telemetry.record(TelemetryEvent::AnswerSubmitted { question: QuestionId::Age });
        telemetry.record(TelemetryEvent::Reprompted { question: QuestionId::Age });
        telemetry.record(TelemetryEvent::SessionRestarted);

        let stats = telemetry.stats();
        assert_eq!(stats.questions_asked, 1);
        assert_eq!(stats.answers_submitted, 1);
        assert_eq!(stats.reprompts, 1);
        assert_eq!(stats.restarts, 1);
        assert_eq!(telemetry.event_count(), 4);
    }

    #[test]
    fn test_record_recommendations() {
        let mut telemetry = SessionTelemetry::new();
        telemetry.record_recommendations(&engine::recommend(&HealthProfile::default()));
        assert_eq!(telemetry.stats().medium_priority, 2);
        assert_eq!(telemetry.stats().total_recommendations(), 2);
    }

    #[test]
    fn test_recent_events() {
        let mut telemetry = SessionTelemetry::new();
        for question in [QuestionId::Age, QuestionId::Travel, QuestionId::Pregnancy] {
            telemetry.record(TelemetryEvent::QuestionAsked { question });
        }
        assert_eq!(
            telemetry.recent_events(1),
            &[TelemetryEvent::QuestionAsked { question: QuestionId::Pregnancy }]
        );
        assert_eq!(telemetry.recent_events(10).len(), 3);
        assert_eq!(telemetry.recent_events(1)[0].describe(), "asked pregnancy");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(5)), "5s");
        assert_eq!(format_duration(Duration::from_secs(65)), "1m 5s");
        assert_eq!(format_duration(Duration::from_secs(3725)), "1h 2m 5s");
    }
}
