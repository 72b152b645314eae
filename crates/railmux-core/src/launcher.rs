use crate::types::LaunchPlan;

/// Exit status reported by a launcher. Forwarded verbatim as the
/// process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchStatus {
    pub code: i32,
}

impl LaunchStatus {
    pub const SUCCESS: Self = Self { code: 0 };

    pub fn new(code: i32) -> Self {
        Self { code }
    }

    pub fn success(self) -> bool {
        self.code == 0
    }
}

/// Hands a resolved plan to whatever creates the session and its windows.
///
/// Defined here as a synchronous trait; implementations that spawn
/// processes live in `railmux-tmux`.
pub trait Launcher {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Short program name used for the pre-launch availability check.
    fn program(&self) -> &str;

    fn launch(&self, plan: &LaunchPlan) -> Result<LaunchStatus, Self::Error>;
}

impl<T: Launcher + ?Sized> Launcher for &T {
    type Error = T::Error;

    fn program(&self) -> &str {
        (**self).program()
    }

    fn launch(&self, plan: &LaunchPlan) -> Result<LaunchStatus, Self::Error> {
        (**self).launch(plan)
    }
}
