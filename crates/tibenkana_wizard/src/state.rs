// --- File: crates/tibenkana_wizard/src/state.rs ---
//! The five-step booking form.
//!
//! Steps only move forward when the current step is filled in, and moving
//! back never discards what was entered. The wizard leaves step 5 through
//! submission only.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::calendar::DatePicker;
use crate::client::BookingSubmitter;
use crate::confirmation::{attendees, ConfirmationView};
use crate::error::{SubmissionError, WizardError};
use tibenkana_common::{BookingOptions, BookingPayload, BookingRecord, MeetingType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Service = 1,
    GroupSize = 2,
    MeetingType = 3,
    Contact = 4,
    DateTime = 5,
}

impl Step {
    pub const COUNT: u8 = 5;

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Service => "Select a Service",
            Step::GroupSize => "Group Size",
            Step::MeetingType => "Meeting Type",
            Step::Contact => "Your Details",
            Step::DateTime => "Choose Date & Time",
        }
    }

    pub fn next(self) -> Option<Step> {
        match self {
            Step::Service => Some(Step::GroupSize),
            Step::GroupSize => Some(Step::MeetingType),
            Step::MeetingType => Some(Step::Contact),
            Step::Contact => Some(Step::DateTime),
            Step::DateTime => None,
        }
    }

    pub fn previous(self) -> Option<Step> {
        match self {
            Step::Service => None,
            Step::GroupSize => Some(Step::Service),
            Step::MeetingType => Some(Step::GroupSize),
            Step::Contact => Some(Step::MeetingType),
            Step::DateTime => Some(Step::Contact),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Submitted(BookingRecord),
    Failed(String),
}

/// What the user has entered so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingForm {
    pub service: String,
    pub group_size: u32,
    pub meeting_type: Option<MeetingType>,
    pub location: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: Option<NaiveDate>,
    pub time: String,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            service: String::new(),
            group_size: 1,
            meeting_type: None,
            location: String::new(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            date: None,
            time: String::new(),
        }
    }
}

fn filled(value: &str) -> bool {
    !value.is_empty()
}

fn non_empty(value: &str) -> Option<String> {
    filled(value).then(|| value.to_string())
}

impl BookingForm {
    /// The request body sent to `POST /bookings`.
    pub fn to_payload(&self) -> BookingPayload {
        BookingPayload {
            service: non_empty(&self.service),
            group_size: Some(i64::from(self.group_size)),
            meeting_type: self.meeting_type.map(|m| m.to_string()),
            location: match self.meeting_type {
                Some(MeetingType::Physical) => non_empty(&self.location),
                _ => None,
            },
            name: non_empty(&self.name),
            email: non_empty(&self.email),
            phone: non_empty(&self.phone),
            date: self.date.map(|d| d.format("%Y-%m-%d").to_string()),
            time: non_empty(&self.time),
        }
    }

    pub fn meeting_description(&self) -> String {
        match self.meeting_type {
            Some(MeetingType::Online) => "Online Meeting".to_string(),
            Some(MeetingType::Physical) => format!("In-Person at {}", self.location),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BookingWizard {
    step: Step,
    form: BookingForm,
    status: SubmissionStatus,
    picker: DatePicker,
    options: BookingOptions,
}

impl BookingWizard {
    pub fn new(options: BookingOptions, today: NaiveDate) -> Self {
        Self {
            step: Step::Service,
            form: BookingForm::default(),
            status: SubmissionStatus::Idle,
            picker: DatePicker::new(today),
            options,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// e.g. "Step 3 of 5"
    pub fn progress_label(&self) -> String {
        format!("Step {} of {}", self.step.number(), Step::COUNT)
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn options(&self) -> &BookingOptions {
        &self.options
    }

    pub fn picker(&self) -> &DatePicker {
        &self.picker
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Only [`reset`](Self::reset) leaves this state.
    pub fn is_submitted(&self) -> bool {
        matches!(self.status, SubmissionStatus::Submitted(_))
    }

    fn locked(&self) -> bool {
        self.is_submitting() || self.is_submitted()
    }

    /// Whether the guard of `step` holds for the current form.
    pub fn step_complete(&self, step: Step) -> bool {
        let form = &self.form;
        match step {
            Step::Service => filled(&form.service),
            Step::GroupSize => (1..=self.options.max_group_size).contains(&form.group_size),
            Step::MeetingType => match form.meeting_type {
                Some(MeetingType::Online) => true,
                Some(MeetingType::Physical) => filled(&form.location),
                None => false,
            },
            Step::Contact => filled(&form.name) && filled(&form.email) && filled(&form.phone),
            Step::DateTime => form.date.is_some() && filled(&form.time),
        }
    }

    pub fn can_proceed(&self) -> bool {
        self.step.next().is_some() && self.step_complete(self.step) && !self.locked()
    }

    pub fn can_submit(&self) -> bool {
        self.step == Step::DateTime
            && self.step_complete(Step::DateTime)
            && !self.locked()
    }

    /// Advance one step. Returns false, changing nothing, when the current
    /// step is incomplete or this is the last step.
    pub fn next(&mut self) -> bool {
        if !self.can_proceed() {
            return false;
        }
        if let Some(next) = self.step.next() {
            debug!("Wizard: step {} -> {}", self.step.number(), next.number());
            self.step = next;
        }
        true
    }

    /// Go back one step keeping the entered data.
    pub fn back(&mut self) -> bool {
        if self.locked() {
            return false;
        }
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                true
            }
            None => false,
        }
    }

    fn editable(&self) -> Result<(), WizardError> {
        match self.status {
            SubmissionStatus::Submitting => Err(WizardError::AlreadySubmitting),
            SubmissionStatus::Submitted(_) => Err(WizardError::AlreadySubmitted),
            SubmissionStatus::Idle | SubmissionStatus::Failed(_) => Ok(()),
        }
    }

    pub fn select_service(&mut self, service: &str) -> Result<(), WizardError> {
        self.editable()?;
        if !self.options.services.iter().any(|s| s == service) {
            return Err(WizardError::UnknownService(service.to_string()));
        }
        self.form.service = service.to_string();
        Ok(())
    }

    pub fn set_group_size(&mut self, size: u32) -> Result<(), WizardError> {
        self.editable()?;
        let max = self.options.max_group_size;
        if !(1..=max).contains(&size) {
            return Err(WizardError::GroupSizeOutOfRange { got: size, max });
        }
        self.form.group_size = size;
        Ok(())
    }

    /// Choosing an online meeting clears any location typed earlier.
    pub fn choose_meeting_type(&mut self, meeting_type: MeetingType) -> Result<(), WizardError> {
        self.editable()?;
        self.form.meeting_type = Some(meeting_type);
        if meeting_type == MeetingType::Online {
            self.form.location.clear();
        }
        Ok(())
    }

    pub fn set_location(&mut self, location: &str) -> Result<(), WizardError> {
        self.editable()?;
        self.form.location = location.to_string();
        Ok(())
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), WizardError> {
        self.editable()?;
        self.form.name = name.to_string();
        Ok(())
    }

    pub fn set_email(&mut self, email: &str) -> Result<(), WizardError> {
        self.editable()?;
        self.form.email = email.to_string();
        Ok(())
    }

    pub fn set_phone(&mut self, phone: &str) -> Result<(), WizardError> {
        self.editable()?;
        self.form.phone = phone.to_string();
        Ok(())
    }

    pub fn select_date(&mut self, date: NaiveDate) -> Result<(), WizardError> {
        self.editable()?;
        if !self.picker.select(date) {
            return Err(WizardError::DateNotSelectable(date));
        }
        self.form.date = Some(date);
        Ok(())
    }

    pub fn select_time(&mut self, time: &str) -> Result<(), WizardError> {
        self.editable()?;
        if !self.options.time_slots.iter().any(|t| t == time) {
            return Err(WizardError::UnknownTimeSlot(time.to_string()));
        }
        self.form.time = time.to_string();
        Ok(())
    }

    pub fn next_month(&mut self) {
        self.picker.next_month();
    }

    pub fn prev_month(&mut self) {
        self.picker.prev_month();
    }

    /// Move to `Submitting` and hand out the payload to send.
    pub fn begin_submission(&mut self) -> Result<BookingPayload, WizardError> {
        self.editable()?;
        if !self.can_submit() {
            return Err(WizardError::Incomplete);
        }
        self.status = SubmissionStatus::Submitting;
        Ok(self.form.to_payload())
    }

    /// Record the server's answer. A failure keeps the form on step 5 for another try.
    pub fn complete_submission(
        &mut self,
        result: Result<BookingRecord, SubmissionError>,
    ) -> Result<(), WizardError> {
        if !self.is_submitting() {
            return Err(WizardError::NotSubmitting);
        }
        self.status = match result {
            Ok(record) => {
                info!("Booking {} confirmed", record.id);
                SubmissionStatus::Submitted(record)
            }
            Err(err) => {
                warn!("Booking submission failed: {:?}", err);
                SubmissionStatus::Failed(err.to_string())
            }
        };
        Ok(())
    }

    /// Submit through `submitter` and return the stored booking.
    pub async fn submit(
        &mut self,
        submitter: &dyn BookingSubmitter,
    ) -> Result<BookingRecord, WizardError> {
        let payload = self.begin_submission()?;
        let result = submitter.submit_booking(&payload).await;
        self.complete_submission(result.clone())?;
        result.map_err(WizardError::from)
    }

    /// The confirmation page for a successful submission.
    pub fn confirmation(&self) -> Option<ConfirmationView> {
        match &self.status {
            SubmissionStatus::Submitted(record) => Some(ConfirmationView::from_record(record)),
            _ => None,
        }
    }

    /// Lines of the booking summary shown on the last step.
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        let form = &self.form;
        vec![
            ("Service", form.service.clone()),
            ("Attendees", attendees(form.group_size)),
            ("Type", form.meeting_description()),
            ("Contact", format!("{} ({})", form.name, form.email)),
            (
                "Date & Time",
                format!(
                    "{} at {}",
                    form.date
                        .map(|d| d.format("%Y-%m-%d").to_string())
                        .unwrap_or_default(),
                    form.time
                ),
            ),
        ]
    }

    /// Start over for another booking, keeping the catalogs and today's date.
    pub fn reset(&mut self) {
        let today = self.picker.today();
        *self = Self::new(self.options.clone(), today);
    }
}
