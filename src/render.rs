// src/render.rs
//! In-memory display regions and their terminal rendering.
//!
//! The dashboard mirrors the gateway web page: tables, pick lists and
//! status lines. A refresh fully replaces a region's rows with the
//! server's result set, in server order - never an append.

use crate::types::dto::{Application, Interview, Job, Slot};

pub struct Table {
    headers: &'static [&'static str],
    widths: &'static [usize],
    rows: Vec<Vec<String>>,
}

impl Table {
    fn new(headers: &'static [&'static str], widths: &'static [usize]) -> Self {
        Self {
            headers,
            widths,
            rows: Vec::new(),
        }
    }

    /// Replace the full row set. The previous render does not survive.
    pub fn replace(&mut self, rows: Vec<Vec<String>>) {
        self.rows = rows;
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.format_row(self.headers.iter().map(|h| h.to_string()).collect()));
        out.push('\n');
        out.push_str(&"-".repeat(self.widths.iter().sum::<usize>() + self.widths.len()));
        out.push('\n');
        for row in &self.rows {
            out.push_str(&self.format_row(row.clone()));
            out.push('\n');
        }
        out
    }

    fn format_row(&self, cells: Vec<String>) -> String {
        let mut line = String::new();
        for (i, cell) in cells.iter().enumerate() {
            if i + 1 == cells.len() {
                line.push_str(cell);
            } else {
                let width = self.widths.get(i).copied().unwrap_or(10);
                line.push_str(&format!("{:<width$} ", cell, width = width));
            }
        }
        line.trim_end().to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

pub struct Dashboard {
    pub jobs: Table,
    pub job_options: Vec<SelectOption>,
    pub slot_options: Vec<SelectOption>,
    pub applications: Table,
    pub interviews: Table,
    pub job_message: String,
    pub apply_message: String,
    pub screen_result: String,
    pub schedule_message: String,
    pub screening_status: String,
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            jobs: Table::new(&["ID", "Title", "Company"], &[5, 25, 20]),
            job_options: Vec::new(),
            slot_options: Vec::new(),
            applications: Table::new(
                &["Candidate", "Email", "Job", "Score", "Feedback"],
                &[20, 28, 5, 6, 24],
            ),
            interviews: Table::new(
                &["Candidate", "Email", "Job", "Slot", "Time"],
                &[20, 28, 5, 38, 18],
            ),
            job_message: String::new(),
            apply_message: String::new(),
            screen_result: String::new(),
            schedule_message: String::new(),
            screening_status: String::new(),
        }
    }

    /// Refresh the job table and the job pick list together, as the page
    /// did on every job reload.
    pub fn replace_jobs(&mut self, jobs: &[Job]) {
        self.jobs.replace(
            jobs.iter()
                .map(|job| {
                    vec![job.id.to_string(), job.title.clone(), job.company.clone()]
                })
                .collect(),
        );
        self.job_options = jobs
            .iter()
            .map(|job| SelectOption {
                value: job.id.to_string(),
                label: format!("{} @ {}", job.title, job.company),
            })
            .collect();
    }

    pub fn replace_slots(&mut self, slots: &[Slot]) {
        self.slot_options = slots
            .iter()
            .map(|slot| SelectOption {
                value: slot.slot_id.clone(),
                label: if slot.booked {
                    format!("{} (booked)", slot.time)
                } else {
                    slot.time.clone()
                },
            })
            .collect();
    }

    pub fn replace_applications(&mut self, applications: &[Application]) {
        self.applications.replace(
            applications
                .iter()
                .map(|app| {
                    vec![
                        app.candidate_name.clone(),
                        app.candidate_email.clone(),
                        app.job_id.to_string(),
                        app.screening_score.to_string(),
                        app.screening_feedback.clone(),
                    ]
                })
                .collect(),
        );
    }

    pub fn replace_interviews(&mut self, interviews: &[Interview]) {
        self.interviews.replace(
            interviews
                .iter()
                .map(|interview| {
                    vec![
                        interview.candidate_name.clone(),
                        interview.candidate_email.clone(),
                        interview.job_id.to_string(),
                        interview.slot_id.clone(),
                        interview.time.clone(),
                    ]
                })
                .collect(),
        );
    }

    pub fn render_options(options: &[SelectOption]) -> String {
        let mut out = String::new();
        for option in options {
            out.push_str(&format!("  [{}] {}\n", option.value, option.label));
        }
        out
    }

    /// Full dashboard render, section by section, with a refresh stamp.
    pub fn render_all(&self) -> String {
        let mut out = format!(
            "Recruitment dashboard - refreshed {}\n\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        );

        out.push_str("Open positions\n");
        out.push_str(&self.jobs.render());
        out.push('\n');

        out.push_str("Interview slots\n");
        out.push_str(&Self::render_options(&self.slot_options));
        out.push('\n');

        out.push_str("Applications\n");
        out.push_str(&self.applications.render());
        out.push('\n');

        out.push_str("Scheduled interviews\n");
        out.push_str(&self.interviews.render());

        for status in [
            &self.job_message,
            &self.apply_message,
            &self.screen_result,
            &self.schedule_message,
            &self.screening_status,
        ] {
            if !status.is_empty() {
                out.push('\n');
                out.push_str(status);
            }
        }

        out
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: i32, title: &str, company: &str) -> Job {
        Job {
            id,
            title: title.to_string(),
            company: company.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_refresh_replaces_rows_instead_of_appending() {
        let mut dashboard = Dashboard::new();
        dashboard.replace_jobs(&[job(1, "Engineer", "Acme"), job(2, "Designer", "Initech")]);
        assert_eq!(dashboard.jobs.rows().len(), 2);

        dashboard.replace_jobs(&[job(3, "Analyst", "Umbrella")]);
        assert_eq!(dashboard.jobs.rows().len(), 1);
        assert_eq!(dashboard.jobs.rows()[0][0], "3");
        assert_eq!(dashboard.job_options.len(), 1);
    }

    #[test]
    fn test_rows_keep_server_order() {
        let mut dashboard = Dashboard::new();
        dashboard.replace_jobs(&[job(9, "Z", "Z Co"), job(1, "A", "A Co")]);
        assert_eq!(dashboard.jobs.rows()[0][1], "Z");
        assert_eq!(dashboard.jobs.rows()[1][1], "A");
    }

    #[test]
    fn test_job_option_label_format() {
        let mut dashboard = Dashboard::new();
        dashboard.replace_jobs(&[job(4, "Engineer", "Acme")]);
        assert_eq!(
            dashboard.job_options[0],
            SelectOption {
                value: "4".to_string(),
                label: "Engineer @ Acme".to_string(),
            }
        );
    }

    #[test]
    fn test_booked_slot_is_marked() {
        let mut dashboard = Dashboard::new();
        dashboard.replace_slots(&[
            Slot {
                slot_id: "a1".to_string(),
                time: "2026-08-08 09:00".to_string(),
                booked: false,
            },
            Slot {
                slot_id: "a2".to_string(),
                time: "2026-08-08 09:30".to_string(),
                booked: true,
            },
        ]);
        assert_eq!(dashboard.slot_options[0].label, "2026-08-08 09:00");
        assert_eq!(dashboard.slot_options[1].label, "2026-08-08 09:30 (booked)");
    }

    #[test]
    fn test_table_render_has_header_and_one_line_per_row() {
        let mut dashboard = Dashboard::new();
        dashboard.replace_jobs(&[job(1, "Engineer", "Acme")]);
        let rendered = dashboard.jobs.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3); // header, rule, one row
        assert!(lines[0].starts_with("ID"));
        assert!(lines[2].contains("Engineer"));
    }
}
