use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crossterm::event::{self, Event, KeyEvent};
use tokio::{sync::mpsc, task::AbortHandle};

use api_types::salary::{SalaryEntry, SalaryEntryNew};
use engine::{Adjustments, ColumnTotals, Period, RawInput};

use crate::{
    client::{Client, ClientError},
    config::AppConfig,
    error::{AppError, Result},
    ui,
    ui::keymap::AppAction,
};

/// Form inputs plus the two period selectors, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    SalaryRate,
    InTime,
    OutTime,
    RegularHours,
    OvertimeHours,
    Month,
    Year,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            Self::SalaryRate => "Salary Rate",
            Self::InTime => "In Time",
            Self::OutTime => "Out Time",
            Self::RegularHours => "Regular Hours",
            Self::OvertimeHours => "Overtime Hours",
            Self::Month => "Month",
            Self::Year => "Year",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::SalaryRate => Self::InTime,
            Self::InTime => Self::OutTime,
            Self::OutTime => Self::RegularHours,
            Self::RegularHours => Self::OvertimeHours,
            Self::OvertimeHours => Self::Month,
            Self::Month => Self::Year,
            Self::Year => Self::SalaryRate,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::SalaryRate => Self::Year,
            Self::InTime => Self::SalaryRate,
            Self::OutTime => Self::InTime,
            Self::RegularHours => Self::OutTime,
            Self::OvertimeHours => Self::RegularHours,
            Self::Month => Self::OvertimeHours,
            Self::Year => Self::Month,
        }
    }
}

#[derive(Debug, Default)]
pub struct FormState {
    pub salary_rate: String,
    pub in_time: String,
    pub out_time: String,
    pub regular_hours: String,
    pub overtime_hours: String,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub enum ExportKind {
    Pdf,
    Csv,
}

impl ExportKind {
    fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Csv => "csv",
        }
    }
}

/// Results reported back by spawned store tasks.
#[derive(Debug)]
pub enum TaskResult {
    Fetch {
        seq: u64,
        result: std::result::Result<Vec<SalaryEntry>, ClientError>,
    },
    Submit {
        result: std::result::Result<SalaryEntry, ClientError>,
    },
}

#[derive(Debug)]
pub struct AppState {
    pub form: FormState,
    pub focus: FormField,
    pub period: Period,
    pub entries: Vec<SalaryEntry>,
    pub totals: ColumnTotals,
    pub final_total: f64,
    pub adjustments: Adjustments,
    pub status: Option<String>,
    pub submitting: bool,
}

pub struct App {
    config: AppConfig,
    client: Client,
    pub state: AppState,
    tx: mpsc::UnboundedSender<TaskResult>,
    rx: mpsc::UnboundedReceiver<TaskResult>,
    fetch_seq: u64,
    fetch_abort: Option<AbortHandle>,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = Client::new(&config.base_url)?;
        let (tx, rx) = mpsc::unbounded_channel();
        let adjustments = Adjustments::default();
        let totals = ColumnTotals::default();
        let state = AppState {
            form: FormState::default(),
            focus: FormField::SalaryRate,
            period: Period::current(),
            entries: Vec::new(),
            final_total: totals.final_total(&adjustments),
            totals,
            adjustments,
            status: None,
            submitting: false,
        };

        Ok(Self {
            config,
            client,
            state,
            tx,
            rx,
            fetch_seq: 0,
            fetch_abort: None,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        self.request_entries();
        let result = self.event_loop(&mut terminal).await;
        ui::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            while let Ok(message) = self.rx.try_recv() {
                self.apply_task_result(message);
            }

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match ui::keymap::map_key(key) {
            AppAction::Quit => self.should_quit = true,
            AppAction::NextField => self.state.focus = self.state.focus.next(),
            AppAction::PrevField => self.state.focus = self.state.focus.prev(),
            AppAction::Submit => self.submit(),
            AppAction::Backspace => {
                if let Some(field) = self.active_field_mut() {
                    field.pop();
                }
            }
            AppAction::Up => self.adjust_selector(true),
            AppAction::Down => self.adjust_selector(false),
            AppAction::ExportPdf => self.export(ExportKind::Pdf),
            AppAction::ExportCsv => self.export(ExportKind::Csv),
            AppAction::Input(ch) => {
                if let Some(field) = self.active_field_mut() {
                    field.push(ch);
                }
            }
            AppAction::None => {}
        }
    }

    // Selectors have no text buffer; typing only lands in the five inputs.
    fn active_field_mut(&mut self) -> Option<&mut String> {
        let form = &mut self.state.form;
        match self.state.focus {
            FormField::SalaryRate => Some(&mut form.salary_rate),
            FormField::InTime => Some(&mut form.in_time),
            FormField::OutTime => Some(&mut form.out_time),
            FormField::RegularHours => Some(&mut form.regular_hours),
            FormField::OvertimeHours => Some(&mut form.overtime_hours),
            FormField::Month | FormField::Year => None,
        }
    }

    fn adjust_selector(&mut self, up: bool) {
        let period = self.state.period;
        let next = match (self.state.focus, up) {
            (FormField::Month, true) => period.next_month(),
            (FormField::Month, false) => period.prev_month(),
            (FormField::Year, true) => period.next_year(),
            (FormField::Year, false) => period.prev_year(),
            _ => return,
        };
        if next != period {
            self.state.period = next;
            self.request_entries();
        }
    }

    /// Issues a fetch keyed by a generation counter. The previous in-flight
    /// task is aborted, and a response carrying a stale generation is
    /// dropped, so a slow answer for an old selection can never overwrite a
    /// newer one.
    fn request_entries(&mut self) {
        self.fetch_seq += 1;
        let seq = self.fetch_seq;
        if let Some(abort) = self.fetch_abort.take() {
            abort.abort();
        }

        let client = self.client.clone();
        let tx = self.tx.clone();
        let period = self.state.period;
        let handle = tokio::spawn(async move {
            let result = client.entries_for(period.year, period.month).await;
            let _ = tx.send(TaskResult::Fetch { seq, result });
        });
        self.fetch_abort = Some(handle.abort_handle());
    }

    fn submit(&mut self) {
        // One in-flight submission at a time.
        if self.state.submitting {
            return;
        }
        self.state.form.message = None;

        let form = &self.state.form;
        let raw = RawInput {
            salary_rate: &form.salary_rate,
            in_time: &form.in_time,
            out_time: &form.out_time,
            regular_hours: &form.regular_hours,
            overtime_hours: &form.overtime_hours,
        };
        let parsed = match raw.parse() {
            Ok(parsed) => parsed,
            Err(err) => {
                self.state.form.message = Some(err.to_string());
                return;
            }
        };
        let breakdown = match parsed.breakdown() {
            Ok(breakdown) => breakdown,
            Err(err) => {
                self.state.form.message = Some(err.to_string());
                return;
            }
        };

        let entry = SalaryEntryNew {
            salary_rate: parsed.salary_rate,
            in_time: parsed.in_time,
            out_time: parsed.out_time,
            regular_hours: parsed.regular_hours,
            overtime_hours: parsed.overtime_hours,
            regular_hours_amount: breakdown.regular_hours_amount,
            overtime_hours_amount: breakdown.overtime_hours_amount,
            total_amount: breakdown.total_amount,
            pf: breakdown.pf,
            total_salary: breakdown.total_salary,
        };

        self.state.submitting = true;
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = client.submit(&entry).await;
            let _ = tx.send(TaskResult::Submit { result });
        });
    }

    fn apply_task_result(&mut self, message: TaskResult) {
        match message {
            TaskResult::Fetch { seq, result } => self.apply_fetch(seq, result),
            TaskResult::Submit { result } => self.apply_submit(result),
        }
    }

    fn apply_fetch(
        &mut self,
        seq: u64,
        result: std::result::Result<Vec<SalaryEntry>, ClientError>,
    ) {
        if seq != self.fetch_seq {
            tracing::debug!(seq, current = self.fetch_seq, "dropping stale fetch response");
            return;
        }
        self.fetch_abort = None;

        match result {
            Ok(entries) => {
                self.state.entries = entries;
                self.refresh_totals();
                self.state.status = Some(format!(
                    "Loaded {} entries for {}",
                    self.state.entries.len(),
                    self.state.period
                ));
            }
            Err(err) => {
                // Fail-soft: the previous list stays on screen.
                tracing::error!(error = ?err, "failed to fetch entries");
                self.state.status = Some(format!("Fetch failed: {}", message_for_error(&err)));
            }
        }
    }

    fn apply_submit(&mut self, result: std::result::Result<SalaryEntry, ClientError>) {
        self.state.submitting = false;

        match result {
            Ok(entry) => {
                self.state.entries.push(entry);
                self.refresh_totals();
                self.state.form.message = None;
                self.state.status = Some(format!("Saved entry for {}", self.state.period));
            }
            Err(ClientError::Validation(message)) => {
                // The store rejected the input; keep the form for correction.
                self.state.form.message = Some(message);
            }
            Err(err) => {
                tracing::error!(error = ?err, "failed to submit entry");
                self.state.form.message = Some(message_for_error(&err));
            }
        }
    }

    /// Recomputes totals after a list mutation. Never called per frame; the
    /// renderer only reads the cached values.
    fn refresh_totals(&mut self) {
        self.state.totals = engine::aggregate(&self.state.entries);
        self.state.final_total = self.state.totals.final_total(&self.state.adjustments);
    }

    fn export(&mut self, kind: ExportKind) {
        let statement = report::build(
            self.state.period,
            &self.state.entries,
            &self.state.totals,
            &self.state.adjustments,
            self.state.final_total,
        );

        let rendered = match kind {
            ExportKind::Pdf => report::pdf::render(&statement, Path::new(&self.config.fonts_dir)),
            ExportKind::Csv => report::csv::render(&statement),
        };
        let bytes = match rendered {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::error!(error = %err, "failed to render statement");
                self.state.status = Some(format!("Export failed: {err}"));
                return;
            }
        };

        let path = PathBuf::from(&self.config.export_dir)
            .join(report::filename(self.state.period, kind.extension()));
        let written = fs::create_dir_all(&self.config.export_dir).and_then(|()| fs::write(&path, bytes));
        match written {
            Ok(()) => self.state.status = Some(format!("Exported {}", path.display())),
            Err(err) => {
                tracing::error!(error = %err, "failed to write export");
                self.state.status = Some(format!("Export failed: {err}"));
            }
        }
    }
}

fn message_for_error(err: &ClientError) -> String {
    match err {
        ClientError::NotFound => "Not found.".to_string(),
        ClientError::Validation(message) => message.clone(),
        ClientError::Server(message) => format!("Service error: {message}"),
        ClientError::Transport(err) => format!("Service unreachable: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn app() -> App {
        App::new(AppConfig::default()).unwrap()
    }

    fn entry(total_salary: f64) -> SalaryEntry {
        SalaryEntry {
            id: None,
            date: Utc::now(),
            salary_rate: 20000.0,
            in_time: "09:00".to_string(),
            out_time: "18:00".to_string(),
            regular_hours: 160.0,
            overtime_hours: 10.0,
            regular_hours_amount: 20000.0,
            overtime_hours_amount: 1250.0,
            total_amount: 21250.0,
            pf: 2400.0,
            total_salary,
        }
    }

    #[test]
    fn stale_fetch_responses_are_dropped() {
        let mut app = app();
        app.fetch_seq = 2;

        app.apply_fetch(1, Ok(vec![entry(18850.0)]));
        assert!(app.state.entries.is_empty());

        app.apply_fetch(2, Ok(vec![entry(18850.0)]));
        assert_eq!(app.state.entries.len(), 1);
        assert!((app.state.final_total - (18850.0 + 8635.0)).abs() < 1e-9);
    }

    #[test]
    fn failed_fetch_keeps_the_previous_list() {
        let mut app = app();
        app.fetch_seq = 1;
        app.apply_fetch(1, Ok(vec![entry(18850.0)]));

        app.fetch_seq = 2;
        app.apply_fetch(2, Err(ClientError::Server("boom".to_string())));
        assert_eq!(app.state.entries.len(), 1);
        assert!(app.state.status.as_deref().unwrap_or("").contains("Fetch failed"));
    }

    #[test]
    fn successful_submission_appends_and_refreshes_totals() {
        let mut app = app();
        app.state.submitting = true;

        app.apply_submit(Ok(entry(18850.0)));
        assert!(!app.state.submitting);
        assert_eq!(app.state.entries.len(), 1);
        assert!((app.state.totals.total_salary - 18850.0).abs() < 1e-9);
        assert!(app.state.form.message.is_none());
        assert!(app.state.status.as_deref().unwrap_or("").starts_with("Saved"));
    }

    #[test]
    fn validation_failure_surfaces_the_store_message() {
        let mut app = app();
        app.state.submitting = true;

        app.apply_submit(Err(ClientError::Validation(
            "Salary rate is required".to_string(),
        )));
        assert!(!app.state.submitting);
        assert!(app.state.entries.is_empty());
        assert_eq!(
            app.state.form.message.as_deref(),
            Some("Salary rate is required")
        );
    }

    #[test]
    fn submit_rejects_invalid_form_input_before_any_request() {
        let mut app = app();
        app.state.form.salary_rate = "20000".to_string();
        app.state.form.in_time = "09:00".to_string();
        app.state.form.out_time = "18:00".to_string();
        app.state.form.regular_hours = "0".to_string();

        app.submit();
        assert!(!app.state.submitting);
        assert_eq!(
            app.state.form.message.as_deref(),
            Some("Invalid hours: regular hours must be greater than zero")
        );
    }

    #[test]
    fn submission_in_flight_suppresses_resubmission() {
        let mut app = app();
        app.state.submitting = true;
        app.state.form.salary_rate = "not a number".to_string();

        // Would set a parse error if the guard did not short-circuit.
        app.submit();
        assert!(app.state.form.message.is_none());
    }
}
