//! # Runtime
//!
//! Builds the multi-threaded [Tokio](https://tokio.rs) runtime the server runs on, from the
//! `[runtime]` section of the configuration.
//!
//! ## Profiles
//! * **default**: one worker per core, 3 `MiB` stacks.
//! * **`high_performance`**: larger stacks and longer idle keep-alive for busy servers.
//! * **`memory_efficient`**: half the workers and smaller stacks.
//!
//! ## Example
//!
//! ```rust,no_run
//! use uhub_domain::config::RuntimeSettings;
//!
//! let runtime = uhub_runtime::build(&RuntimeSettings::default())?;
//! runtime.block_on(async { /* serve */ });
//! # Ok::<(), anyhow::Error>(())
//! ```

pub use anyhow::Result;

use anyhow::Context;
use std::thread::available_parallelism;
use std::time::Duration;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;
use uhub_domain::config::{RuntimeProfile, RuntimeSettings};

/// Fallback when the core count cannot be detected.
const DEFAULT_WORKER_THREADS: usize = 4;
const MAX_WORKER_THREADS: usize = 1024;
const MIB: usize = 1024 * 1024;
const MIN_STACK_SIZE: usize = MIB;
const MAX_STACK_SIZE: usize = 16 * MIB;

/// Resolved runtime parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub worker_threads: usize,
    pub stack_size: usize,
    pub thread_name: String,
    pub thread_keep_alive: Duration,
}

impl RuntimeConfig {
    /// Profile preset for `profile`.
    #[must_use]
    pub fn preset(profile: RuntimeProfile) -> Self {
        let cores = available_parallelism().map_or(DEFAULT_WORKER_THREADS, std::num::NonZero::get);
        match profile {
            RuntimeProfile::Default => Self {
                worker_threads: cores,
                stack_size: 3 * MIB,
                thread_name: "uhub-worker".to_owned(),
                thread_keep_alive: Duration::from_secs(60),
            },
            RuntimeProfile::HighPerformance => Self {
                worker_threads: cores,
                stack_size: 4 * MIB,
                thread_name: "uhub-hp".to_owned(),
                thread_keep_alive: Duration::from_secs(300),
            },
            RuntimeProfile::MemoryEfficient => Self {
                worker_threads: (cores / 2).max(1),
                stack_size: 2 * MIB,
                thread_name: "uhub-mem".to_owned(),
                thread_keep_alive: Duration::from_secs(30),
            },
        }
    }

    /// Preset of the configured profile with the explicit overrides applied.
    #[must_use]
    pub fn from_settings(settings: &RuntimeSettings) -> Self {
        let mut config = Self::preset(settings.profile);
        if let Some(threads) = settings.worker_threads {
            config.worker_threads = threads;
        }
        if let Some(name) = settings.thread_name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            name.clone_into(&mut config.thread_name);
        }
        config.normalized()
    }

    #[must_use]
    pub fn with_stack_size(mut self, size: usize) -> Self {
        self.stack_size = size;
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        self.worker_threads = self.worker_threads.clamp(1, MAX_WORKER_THREADS);
        self.stack_size = self.stack_size.clamp(MIN_STACK_SIZE, MAX_STACK_SIZE);
        self
    }
}

/// Builds a multi-threaded runtime with I/O and timers enabled.
///
/// # Errors
/// Fails when the OS refuses to spawn the worker threads.
pub fn build_with_config(config: &RuntimeConfig) -> Result<Runtime> {
    debug!(?config, "Building tokio runtime");

    Builder::new_multi_thread()
        .worker_threads(config.worker_threads)
        .thread_name(&config.thread_name)
        .thread_stack_size(config.stack_size)
        .thread_keep_alive(config.thread_keep_alive)
        .enable_all()
        .build()
        .context("Failed to initialize runtime")
}

/// Builds the runtime described by the `[runtime]` configuration section.
///
/// # Errors
/// See [`build_with_config`].
pub fn build(settings: &RuntimeSettings) -> Result<Runtime> {
    build_with_config(&RuntimeConfig::from_settings(settings))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_win_over_the_profile() {
        let settings = RuntimeSettings {
            profile: RuntimeProfile::HighPerformance,
            worker_threads: Some(3),
            thread_name: Some(" api ".to_owned()),
        };

        let config = RuntimeConfig::from_settings(&settings);

        assert_eq!(config.worker_threads, 3);
        assert_eq!(config.thread_name, "api");
        assert_eq!(config.stack_size, 4 * MIB);
        assert_eq!(config.thread_keep_alive, Duration::from_secs(300));
    }

    #[test]
    fn values_are_clamped() {
        let settings = RuntimeSettings { worker_threads: Some(0), ..RuntimeSettings::default() };
        assert_eq!(RuntimeConfig::from_settings(&settings).worker_threads, 1);

        let settings = RuntimeSettings { worker_threads: Some(5000), ..RuntimeSettings::default() };
        assert_eq!(RuntimeConfig::from_settings(&settings).worker_threads, MAX_WORKER_THREADS);

        let config = RuntimeConfig::preset(RuntimeProfile::Default);
        assert_eq!(config.clone().with_stack_size(100).stack_size, MIN_STACK_SIZE);
        assert_eq!(config.with_stack_size(100 * MIB).stack_size, MAX_STACK_SIZE);
    }

    #[test]
    fn memory_efficient_halves_the_workers() {
        let full = RuntimeConfig::preset(RuntimeProfile::Default).worker_threads;
        let lean = RuntimeConfig::preset(RuntimeProfile::MemoryEfficient).worker_threads;
        assert_eq!(lean, (full / 2).max(1));
    }

    #[test]
    fn blank_thread_names_keep_the_preset() {
        let settings = RuntimeSettings { thread_name: Some("  ".to_owned()), ..RuntimeSettings::default() };
        assert_eq!(RuntimeConfig::from_settings(&settings).thread_name, "uhub-worker");
    }

    #[test]
    fn built_runtime_executes_tasks() {
        let settings = RuntimeSettings { worker_threads: Some(1), ..RuntimeSettings::default() };
        let runtime = build(&settings).unwrap();
        assert_eq!(runtime.block_on(async { 40 + 2 }), 42);
    }
}
