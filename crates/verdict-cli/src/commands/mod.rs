pub mod check;
pub mod check_staged;
pub mod dispatch;
pub mod fix;
pub mod index;

/// How a command finished when it did not hit a fatal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No error-severity violations remain.
    Clean,
    Violations,
}

impl Outcome {
    #[must_use]
    pub const fn from_clean(clean: bool) -> Self {
        if clean { Self::Clean } else { Self::Violations }
    }

    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Clean => 0,
            Self::Violations => 1,
        }
    }
}
