//! Host platform detection for build strategy selection

/// Detected platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Linux - Unix makefiles via cmake + make
    Linux,
    /// Windows - Visual Studio generator
    Windows,
    /// macOS - Xcode generator
    MacOS,
    /// Unsupported platform
    Unsupported,
}

impl Platform {
    /// Detect the current platform
    pub fn detect() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map an OS identifier to a platform
    pub fn from_os(os: &str) -> Self {
        match os {
            "linux" => Platform::Linux,
            "windows" => Platform::Windows,
            "macos" => Platform::MacOS,
            _ => Platform::Unsupported,
        }
    }

    /// Get a human-readable platform name
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Linux => "Linux",
            Platform::Windows => "Windows",
            Platform::MacOS => "macOS",
            Platform::Unsupported => "Unsupported",
        }
    }
}
