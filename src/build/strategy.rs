//! Per-platform build strategies
//!
//! Each strategy turns a build plan into the cmake configure invocation
//! and the build/install invocations that follow it. Strategies only
//! produce data; execution lives in the runner.

use crate::build::platform::Platform;
use crate::build::runner::ProcessCall;
use crate::error::{ExtsyncError, ExtsyncResult};
use std::path::PathBuf;

/// Everything a strategy needs to emit its invocations
#[derive(Debug, Clone)]
pub struct BuildPlan {
    /// Build subdirectory inside the working copy
    pub build_dir: PathBuf,
    /// Install prefix for the built artifacts
    pub install_prefix: PathBuf,
    /// Project-specific cmake flags
    pub flags: Vec<String>,
    /// Cross-compilation inputs when a sysroot was supplied
    pub cross: Option<CrossPlan>,
    /// Degree of parallelism for the compile step
    pub jobs: usize,
}

/// Cross-compilation inputs
#[derive(Debug, Clone)]
pub struct CrossPlan {
    /// cmake toolchain file
    pub toolchain_file: PathBuf,
    /// Target sysroot
    pub sysroot: PathBuf,
}

/// Closed set of build strategies, one per supported platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStrategy {
    /// cmake + make (Linux)
    UnixMakefiles,
    /// Visual Studio generator (Windows)
    VisualStudio,
    /// Xcode generator (macOS)
    Xcode,
}

impl BuildStrategy {
    /// Select the strategy for a platform
    pub fn for_platform(platform: Platform) -> ExtsyncResult<Self> {
        match platform {
            Platform::Linux => Ok(Self::UnixMakefiles),
            Platform::Windows => Ok(Self::VisualStudio),
            Platform::MacOS => Ok(Self::Xcode),
            Platform::Unsupported => Err(ExtsyncError::UnsupportedPlatform(
                std::env::consts::OS.to_string(),
            )),
        }
    }

    /// The configure invocation, run inside the build directory
    pub fn configure_call(&self, plan: &BuildPlan) -> ProcessCall {
        let prefix = format!("-DCMAKE_INSTALL_PREFIX={}", plan.install_prefix.display());

        let mut args: Vec<String> = match self {
            Self::UnixMakefiles => {
                let mut args = vec!["-DCMAKE_BUILD_TYPE=Release".to_string()];
                if let Some(ref cross) = plan.cross {
                    args.push(format!(
                        "-DCMAKE_TOOLCHAIN_FILE={}",
                        cross.toolchain_file.display()
                    ));
                    args.push(format!("-DCMAKE_SYSROOT={}", cross.sysroot.display()));
                }
                args.push(prefix);
                args
            }
            Self::VisualStudio => vec![
                prefix,
                "-G".to_string(),
                "Visual Studio 16 2019".to_string(),
            ],
            Self::Xcode => vec![
                "-G".to_string(),
                "Xcode".to_string(),
                prefix,
                // Skip standalone tool binaries; only the libraries matter
                "-DENABLE_GLSLANG_BINARIES=OFF".to_string(),
            ],
        };

        args.extend(plan.flags.iter().cloned());
        args.push("..".to_string());

        ProcessCall::new("cmake", args, &plan.build_dir)
    }

    /// The build/install invocations that follow a successful configure
    pub fn build_calls(&self, plan: &BuildPlan) -> Vec<ProcessCall> {
        match self {
            Self::UnixMakefiles => vec![
                ProcessCall::new("make", [format!("-j{}", plan.jobs)], &plan.build_dir),
                ProcessCall::new("make", ["install"], &plan.build_dir),
            ],
            // MSVC links against matching debug/release runtimes, so
            // install both configurations
            Self::VisualStudio => vec![
                ProcessCall::new(
                    "cmake",
                    ["--build", ".", "--config", "Release", "--target", "install"],
                    &plan.build_dir,
                ),
                ProcessCall::new(
                    "cmake",
                    ["--build", ".", "--config", "Debug", "--target", "install"],
                    &plan.build_dir,
                ),
            ],
            Self::Xcode => vec![ProcessCall::new(
                "cmake",
                ["--build", ".", "--config", "Release", "--target", "install"],
                &plan.build_dir,
            )],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> BuildPlan {
        BuildPlan {
            build_dir: PathBuf::from("/src/External/glslang/build"),
            install_prefix: PathBuf::from("/src/External/glslang"),
            flags: vec!["-DENABLE_OPT=OFF".to_string()],
            cross: None,
            jobs: 4,
        }
    }

    #[test]
    fn strategy_selection() {
        assert_eq!(
            BuildStrategy::for_platform(Platform::Linux).unwrap(),
            BuildStrategy::UnixMakefiles
        );
        assert_eq!(
            BuildStrategy::for_platform(Platform::Windows).unwrap(),
            BuildStrategy::VisualStudio
        );
        assert_eq!(
            BuildStrategy::for_platform(Platform::MacOS).unwrap(),
            BuildStrategy::Xcode
        );
        assert!(matches!(
            BuildStrategy::for_platform(Platform::Unsupported),
            Err(ExtsyncError::UnsupportedPlatform(_))
        ));
    }

    #[test]
    fn unix_configure_args() {
        let call = BuildStrategy::UnixMakefiles.configure_call(&plan());
        assert_eq!(call.program, "cmake");
        assert_eq!(
            call.args,
            vec![
                "-DCMAKE_BUILD_TYPE=Release",
                "-DCMAKE_INSTALL_PREFIX=/src/External/glslang",
                "-DENABLE_OPT=OFF",
                ".."
            ]
        );
        assert_eq!(call.dir, PathBuf::from("/src/External/glslang/build"));
    }

    #[test]
    fn unix_cross_configure_includes_toolchain_and_sysroot() {
        let mut plan = plan();
        plan.cross = Some(CrossPlan {
            toolchain_file: PathBuf::from("/src/CMake/toolchain-arm.cmake"),
            sysroot: PathBuf::from("/opt/sysroot"),
        });

        let call = BuildStrategy::UnixMakefiles.configure_call(&plan);
        assert!(call
            .args
            .contains(&"-DCMAKE_TOOLCHAIN_FILE=/src/CMake/toolchain-arm.cmake".to_string()));
        assert!(call.args.contains(&"-DCMAKE_SYSROOT=/opt/sysroot".to_string()));
    }

    #[test]
    fn unix_build_steps() {
        let calls = BuildStrategy::UnixMakefiles.build_calls(&plan());
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].display(), "make -j4");
        assert_eq!(calls[1].display(), "make install");
    }

    #[test]
    fn visual_studio_installs_both_configurations() {
        let call = BuildStrategy::VisualStudio.configure_call(&plan());
        assert!(call.args.contains(&"Visual Studio 16 2019".to_string()));

        let calls = BuildStrategy::VisualStudio.build_calls(&plan());
        assert_eq!(calls.len(), 2);
        assert!(calls[0].display().contains("--config Release"));
        assert!(calls[1].display().contains("--config Debug"));
    }

    #[test]
    fn xcode_disables_tool_binaries() {
        let call = BuildStrategy::Xcode.configure_call(&plan());
        assert!(call.args.contains(&"Xcode".to_string()));
        assert!(call
            .args
            .contains(&"-DENABLE_GLSLANG_BINARIES=OFF".to_string()));

        let calls = BuildStrategy::Xcode.build_calls(&plan());
        assert_eq!(calls.len(), 1);
        assert!(calls[0].display().contains("--config Release"));
    }

    #[test]
    fn project_flags_precede_source_dir() {
        let call = BuildStrategy::UnixMakefiles.configure_call(&plan());
        let flag_pos = call.args.iter().position(|a| a == "-DENABLE_OPT=OFF").unwrap();
        assert_eq!(call.args.last().unwrap(), "..");
        assert!(flag_pos < call.args.len() - 1);
    }
}
