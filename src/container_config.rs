/// What [`Container::get`](crate::Container::get) does when the requested
/// binding is already being resolved further up the same context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CyclePolicy {
    /// Resolve anyway. The context stays a passive ledger and strategy bodies
    /// run their own checks through
    /// [`ResolutionContext::contains_key`](crate::ResolutionContext::contains_key).
    #[default]
    Ignore,
    /// Fail with [`Error::CircularDependency`](crate::Error::CircularDependency)
    /// before any strategy runs.
    Reject,
}

/// Container-wide settings.
///
/// # Examples
///
/// ```rust
/// use serum_registry::{Container, ContainerConfig, CyclePolicy};
///
/// let container = Container::with_config(ContainerConfig::new().cycle_policy(CyclePolicy::Reject));
/// assert_eq!(container.config().cycle_policy, CyclePolicy::Reject);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerConfig {
    pub cycle_policy: CyclePolicy,
}

impl ContainerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cycle_policy(mut self, policy: CyclePolicy) -> Self {
        self.cycle_policy = policy;
        self
    }
}
