// ABOUTME: Optional page background image discovered once at startup
// ABOUTME: Looks for bg.webp, bg.jpg, bg.jpeg, bg.png in order and inlines the first as base64
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use base64::{engine::general_purpose, Engine as _};
use tracing::{debug, info, warn};

use crate::constants::assets::{BACKGROUND_EXTENSIONS, BACKGROUND_STEM};

/// Background image ready to embed in a stylesheet
#[derive(Clone, PartialEq, Eq)]
pub struct BackgroundImage {
    /// MIME type derived from the file extension
    pub mime_type: &'static str,
    /// Base64 of the file contents
    pub data_base64: String,
}

impl BackgroundImage {
    /// `data:` URI for use in CSS `url(...)`
    #[must_use]
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data_base64)
    }
}

impl std::fmt::Debug for BackgroundImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackgroundImage")
            .field("mime_type", &self.mime_type)
            .field("encoded_len", &self.data_base64.len())
            .finish()
    }
}

const fn mime_for_extension(extension: &str) -> &'static str {
    match extension.as_bytes() {
        b"webp" => "image/webp",
        b"png" => "image/png",
        _ => "image/jpeg",
    }
}

/// Load the first background image found in `dir`
///
/// A missing image is normal and yields `None`; an unreadable one is logged
/// and also yields `None` so the page still renders.
#[must_use]
pub fn load_background(dir: &Path) -> Option<BackgroundImage> {
    for extension in BACKGROUND_EXTENSIONS {
        let path = dir.join(format!("{BACKGROUND_STEM}.{extension}"));
        if !path.is_file() {
            continue;
        }

        match fs::read(&path) {
            Ok(bytes) => {
                info!(path = %path.display(), bytes = bytes.len(), "Loaded background image");
                return Some(BackgroundImage {
                    mime_type: mime_for_extension(extension),
                    data_base64: general_purpose::STANDARD.encode(bytes),
                });
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read background image");
                return None;
            }
        }
    }

    debug!(dir = %dir.display(), "No background image found");
    None
}
