//! Human-readable progress for deploy runs.

use std::io::{self, Write};
use std::sync::Mutex;

use shipit::domain::entities::DeploySummary;
use shipit::domain::services::WorkspaceAction;
use shipit::{DeployEvent, DeployEventSink, Stage};

use crate::ui::terminal::TerminalCapabilities;
use crate::ui::theme::{self, Icon};

/// Event sink that prints stage progress and the final summary
pub struct ConsoleEventSink {
    supports_color: bool,
    supports_unicode: bool,
    verbose: bool,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout(caps: TerminalCapabilities, verbose: bool) -> Self {
        Self::with_writer(caps.supports_color, caps.supports_unicode, verbose, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(
        supports_color: bool,
        supports_unicode: bool,
        verbose: bool,
        writer: W,
    ) -> Self {
        Self {
            supports_color,
            supports_unicode,
            verbose,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.supports_color, self.supports_unicode)
    }

    fn dim(&self, text: &str) -> String {
        theme::paint(text, theme::colors::DIM, self.supports_color)
    }

    fn line(&self, text: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{text}");
            let _ = writer.flush();
        }
    }

    fn render(&self, event: &DeployEvent) -> Option<String> {
        let line = match event {
            DeployEvent::Started {
                environment,
                project,
                ..
            } => format!(
                "{} Deploying {} to {}",
                self.icon(Icon::Deploy),
                project,
                theme::paint(environment.as_str(), theme::colors::INFO, self.supports_color)
            ),
            DeployEvent::StageStarted { stage } => format!(
                "\n{} {}",
                self.icon(Icon::Progress),
                stage_heading(*stage)
            ),
            DeployEvent::CommandStarted { command_line, .. } => {
                format!("  {} {}", self.icon(Icon::Arrow), self.dim(command_line))
            }
            DeployEvent::WorkspaceResolved { action } => {
                let verb = match action {
                    WorkspaceAction::Select(_) => "selected",
                    WorkspaceAction::Create(_) => "created",
                };
                format!(
                    "  {} workspace '{}' {}",
                    self.icon(Icon::Arrow),
                    action.name(),
                    verb
                )
            }
            DeployEvent::OutputRead { .. } => return None,
            DeployEvent::OutputFallback { name, reason } => format!(
                "  {} {} unavailable, continuing without it ({})",
                self.icon(Icon::Warning),
                name,
                reason
            ),
            DeployEvent::EnvFileWritten { path, key } => format!(
                "  {} wrote {} to {}",
                self.icon(Icon::Arrow),
                key,
                path.display()
            ),
            DeployEvent::StageCompleted { stage, elapsed_ms } => format!(
                "{} {} {}",
                self.icon(Icon::Success),
                stage.title(),
                self.dim(&format_elapsed(*elapsed_ms))
            ),
            DeployEvent::Completed { summary } => format!(
                "\n{}",
                render_summary(summary, self.supports_color, self.supports_unicode)
            ),
        };
        Some(line)
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        if let Some(text) = self.render(&event) {
            self.line(&text);
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbose
    }
}

fn stage_heading(stage: Stage) -> String {
    format!("[{}/{}] {}", stage.position(), Stage::ALL.len(), stage.title())
}

fn format_elapsed(ms: u64) -> String {
    if ms < 1000 {
        format!("({ms}ms)")
    } else {
        format!("({:.1}s)", ms as f64 / 1000.0)
    }
}

/// Final report: where the deployed system can be reached
pub fn render_summary(
    summary: &DeploySummary,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let rows = summary.rows();
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    let mut lines = vec![format!(
        "{} Deployed {} to {}",
        Icon::Success.colored(supports_color, supports_unicode),
        summary.project,
        summary.environment
    )];
    for (label, value) in rows {
        lines.push(format!(
            "  {}  {}",
            theme::paint(&format!("{label:<width$}"), theme::colors::DIM, supports_color),
            value
        ));
    }
    lines.join("\n")
}
