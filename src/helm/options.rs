//! Runtime configuration for [`Helm`](crate::helm::Helm).

/// How non-fallible operations report the failures they record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailureLogging {
    /// Only append to the error log.
    Ignore,
    /// Append to the error log and emit a `log::warn!`.
    #[default]
    Warn,
}

/// Behaviour toggles for the navigation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelmOptions {
    /// Follow `auto` segues after every present.
    pub chase_auto: bool,
    pub failure_logging: FailureLogging,
}

impl HelmOptions {
    /// Auto chasing on, failures logged at warn level.
    pub fn all() -> Self {
        Self {
            chase_auto: true,
            failure_logging: FailureLogging::Warn,
        }
    }

    /// Auto chasing on, failures only recorded.
    pub fn quiet() -> Self {
        Self {
            failure_logging: FailureLogging::Ignore,
            ..Self::all()
        }
    }
}

impl Default for HelmOptions {
    fn default() -> Self {
        Self::all()
    }
}
