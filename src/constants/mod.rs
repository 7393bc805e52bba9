// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Environment variable names, service defaults, form bounds and export literals

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat namespace.

/// Service identifiers used in structured logs
pub mod service_names {
    /// Name of the HTTP server binary and logging service
    pub const DIET_PLANNER_SERVER: &str = "diet-planner-server";
}

/// Environment variable names read at startup
pub mod env_vars {
    /// Credential for the Gemini generative language API
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    /// Model identifier used for every generation
    pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
    /// Base URL override for the Gemini API
    pub const GEMINI_BASE_URL: &str = "GEMINI_BASE_URL";
    /// Bind host
    pub const HTTP_HOST: &str = "HTTP_HOST";
    /// Bind port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Directory searched for the background image
    pub const ASSETS_DIR: &str = "ASSETS_DIR";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Default configuration values
pub mod defaults {
    /// Default model identifier
    pub const GEMINI_MODEL: &str = "gemini-2.0-flash";
    /// Default Gemini REST endpoint
    pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
    /// Default bind host
    pub const HTTP_HOST: &str = "0.0.0.0";
    /// Default bind port
    pub const HTTP_PORT: u16 = 8080;
    /// Default assets directory
    pub const ASSETS_DIR: &str = ".";
}

/// Bounds of the form controls
pub mod form {
    /// Lowest selectable water intake (glasses per day)
    pub const WATER_INTAKE_MIN: u8 = 0;
    /// Highest selectable water intake (glasses per day)
    pub const WATER_INTAKE_MAX: u8 = 20;
    /// Initial slider position
    pub const WATER_INTAKE_DEFAULT: u8 = 8;
}

/// Downloadable document literals
pub mod export {
    /// MIME type of the exported plan
    pub const PDF_MIME_TYPE: &str = "application/pdf";
    /// Download name for pregnancy plans
    pub const PREGNANCY_FILENAME: &str = "pregnancy_diet_plan.pdf";
    /// Download name for postpartum plans
    pub const POSTPARTUM_FILENAME: &str = "postpartum_diet_plan.pdf";
    /// Bottom margin (mm) that triggers an automatic page break
    pub const PAGE_BREAK_MARGIN_MM: f64 = 15.0;
    /// Font size in points
    pub const FONT_SIZE_PT: f64 = 12.0;
    /// Height (mm) of each emitted text line
    pub const LINE_HEIGHT_MM: f64 = 10.0;
}

/// Cosmetic page assets
pub mod assets {
    /// File stem of the optional background image
    pub const BACKGROUND_STEM: &str = "bg";
    /// Extensions tried in order; the first existing file wins
    pub const BACKGROUND_EXTENSIONS: &[&str] = &["webp", "jpg", "jpeg", "png"];
}
