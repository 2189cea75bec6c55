//! Closed vocabularies describing a project: its type and the developer OS.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of software being deployed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    #[default]
    WebApp,
    MobileApp,
    DesktopApp,
    LandingPage,
    ApiService,
    Game,
    Other,
}

impl ProjectType {
    /// All project types in form order.
    pub const ALL: [ProjectType; 7] = [
        ProjectType::WebApp,
        ProjectType::MobileApp,
        ProjectType::DesktopApp,
        ProjectType::LandingPage,
        ProjectType::ApiService,
        ProjectType::Game,
        ProjectType::Other,
    ];

    /// Serialized token.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::WebApp => "web-app",
            ProjectType::MobileApp => "mobile-app",
            ProjectType::DesktopApp => "desktop-app",
            ProjectType::LandingPage => "landing-page",
            ProjectType::ApiService => "api-service",
            ProjectType::Game => "game",
            ProjectType::Other => "other",
        }
    }

    /// Human readable label, also used in the generation prompt.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::WebApp => "Web App",
            ProjectType::MobileApp => "Mobile App",
            ProjectType::DesktopApp => "Desktop App",
            ProjectType::LandingPage => "Landing Page",
            ProjectType::ApiService => "API / Backend",
            ProjectType::Game => "Game",
            ProjectType::Other => "Other",
        }
    }
}

impl FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "web-app" | "web" | "webapp" => Ok(ProjectType::WebApp),
            "mobile-app" | "mobile" => Ok(ProjectType::MobileApp),
            "desktop-app" | "desktop" => Ok(ProjectType::DesktopApp),
            "landing-page" | "landing" => Ok(ProjectType::LandingPage),
            "api-service" | "api" | "backend" | "api-/-backend" => Ok(ProjectType::ApiService),
            "game" => Ok(ProjectType::Game),
            "other" => Ok(ProjectType::Other),
            _ => Err(format!("Invalid project type: {s}")),
        }
    }
}

/// Operating system of the developer's local machine.
///
/// This selects the flavor of shell commands in the plan, not the deploy
/// target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DevOs {
    #[default]
    Windows,
    #[serde(rename = "macOS")]
    MacOs,
    Linux,
}

impl DevOs {
    /// Display and serialized name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DevOs::Windows => "Windows",
            DevOs::MacOs => "macOS",
            DevOs::Linux => "Linux",
        }
    }
}

impl FromStr for DevOs {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "windows" | "win" => Ok(DevOs::Windows),
            "macos" | "mac" | "osx" | "darwin" => Ok(DevOs::MacOs),
            "linux" => Ok(DevOs::Linux),
            _ => Err(format!("Invalid operating system: {s}")),
        }
    }
}
