// --- File: crates/tibenkana_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory with the built booking front-end, served as a fallback when set.
    #[serde(default)]
    pub static_dir: Option<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8086
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: None,
        }
    }
}

// --- Database Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String, // e.g. sqlite://data/bookings.db, loaded via TIBENKANA__DATABASE__URL
}

// --- SMTP Config ---
// Every field is optional: the mailer stays silent unless all of them are present.
// The password is usually given as "secret_from_env" and resolved from SMTP_PASSWORD,
// or overridden by the plain SMTP_* variables.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SmtpConfig {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    /// Who receives the booking notifications. Not derived from the booking.
    #[serde(default = "default_recipients")]
    pub recipients: Vec<String>,
}

pub fn default_recipients() -> Vec<String> {
    ["barackdanieljackisa@gmail.com", "tibedenis02@gmail.com"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: None,
            port: None,
            user: None,
            password: None,
            from: None,
            recipients: default_recipients(),
        }
    }
}

impl SmtpConfig {
    /// True when host, port, credentials and sender are all present and non-blank.
    pub fn is_complete(&self) -> bool {
        fn present(value: &Option<String>) -> bool {
            value.as_deref().is_some_and(|v| !v.trim().is_empty())
        }
        present(&self.host)
            && self.port.is_some()
            && present(&self.user)
            && present(&self.password)
            && present(&self.from)
    }
}

// --- Calendar invite Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct InviteConfig {
    #[serde(default = "default_meeting_duration")]
    pub duration_minutes: i64,
    /// Offset the booked wall-clock time is interpreted in, e.g. "+03:00".
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,
}

fn default_meeting_duration() -> i64 {
    60
}

fn default_utc_offset() -> String {
    "+03:00".to_string()
}

impl Default for InviteConfig {
    fn default() -> Self {
        Self {
            duration_minutes: default_meeting_duration(),
            utc_offset: default_utc_offset(),
        }
    }
}

// --- Booking form Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BookingsConfig {
    #[serde(default = "default_services")]
    pub services: Vec<String>,
    #[serde(default = "default_time_slots")]
    pub time_slots: Vec<String>,
    #[serde(default = "default_max_group_size")]
    pub max_group_size: u32,
    /// Reject physical meetings without a location on the server as well.
    #[serde(default = "default_true")]
    pub require_location_for_physical: bool,
    /// Refuse new bookings with 503 while the calendar is being refreshed.
    #[serde(default)]
    pub maintenance_mode: bool,
}

fn default_true() -> bool {
    true
}

fn default_max_group_size() -> u32 {
    20
}

pub fn default_time_slots() -> Vec<String> {
    ["09:00", "10:00", "11:00", "14:00", "15:00", "16:00"]
        .into_iter()
        .map(String::from)
        .collect()
}

pub fn default_services() -> Vec<String> {
    [
        "Food & Beverage Product Formulation",
        "Process Engineering (Prototype → Stabilize → Scale-Up)",
        "Quality Management Setup (SOPs, PRPs, HACCP)",
        "UNBS Q-Mark Certification Support",
        "Export Readiness & Standards Compliance",
        "Branding, Packaging & Labeling Design",
        "Go-to-Market & Marketing Strategy",
        "Systems Thinking Facilitation & Leadership Workshops",
        "Entrepreneurship Mentorship (1:1 / Group)",
        "Training of Trainers (ToT) – Product Dev, QC, Standards",
        "Business Formalization & Compliance (URSB/URA/etc.)",
        "Grant/Proposal Writing & Fundraising Strategy",
        "Research & Analytics (Survey Design, Data Analysis, Dashboards)",
        "HR Recruitment & Staff Training",
        "Digital Product Development (Chatbots, Websites, Supabase, Payments)",
        "Agri-Business Advisory (Poultry, Goats, Coffee, Vegetables)",
        "Curriculum Design (Entrepreneurship & Leadership Programs)",
        "Public Speaking & Event Moderation",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for BookingsConfig {
    fn default() -> Self {
        Self {
            services: default_services(),
            time_slots: default_time_slots(),
            max_group_size: default_max_group_size(),
            require_location_for_physical: true,
            maintenance_mode: false,
        }
    }
}

// --- Logging Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct LoggingConfig {
    /// trace | debug | info | warn | error, defaults to info
    #[serde(default)]
    pub level: Option<String>,
    /// When set, logs are also written to a daily rolling file in this directory.
    #[serde(default)]
    pub directory: Option<String>,
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub database: Option<DatabaseConfig>, // In-memory storage when absent
    #[serde(default)]
    pub smtp: SmtpConfig,
    #[serde(default)]
    pub invite: InviteConfig,
    #[serde(default)]
    pub bookings: BookingsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}
