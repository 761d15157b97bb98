//! Stage enumerations - the closed, ordered set of pipeline phases.
//!
//! A pipeline declares its stages once with the [`stages!`](crate::stages)
//! macro, which generates a plain `Copy` enum with an auto-appended `Idle`
//! sentinel and an implementation of [`Stage`]. The sentinel is the clock's
//! initial "no stage active" state; its accumulated time is excluded from
//! report totals.

/// A member of a closed, ordered stage set.
///
/// Implemented by the `stages!` macro; clocks are generic over this trait,
/// which makes the stage-set shape a compile-time property of the clock
/// type (two clocks over the same stage enum always merge cleanly).
pub trait Stage: Copy + Eq {
    /// Number of real stages, excluding the idle sentinel.
    const COUNT: usize;

    /// Display names of the real stages, in declaration order.
    const NAMES: &'static [&'static str];

    /// The idle sentinel: "no stage active".
    const IDLE: Self;

    /// Position of this stage in declaration order; the idle sentinel
    /// maps to `COUNT`.
    fn index(self) -> usize;

    /// Display name of this stage.
    fn name(self) -> &'static str {
        if self.index() < Self::COUNT {
            Self::NAMES[self.index()]
        } else {
            "idle"
        }
    }
}

/// Declare a stage set: an ordered list of `Variant => "display name"`
/// pairs.
///
/// Generates the enum (with a trailing `Idle` sentinel variant) and its
/// [`Stage`] implementation.
///
/// # Example
///
/// ```rust
/// stagetime::stages! {
///     pub enum DecodeStage {
///         Parse => "parse",
///         Predict => "prediction",
///         Filter => "loop filter",
///     }
/// }
///
/// use stagetime::Stage;
/// assert_eq!(DecodeStage::COUNT, 3);
/// assert_eq!(DecodeStage::Predict.name(), "prediction");
/// assert_eq!(DecodeStage::Idle.index(), 3);
/// ```
#[macro_export]
macro_rules! stages {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => $display:expr),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant,)+
            /// Sentinel: no stage active. Excluded from report totals.
            Idle,
        }

        impl $crate::Stage for $name {
            const COUNT: usize = $name::Idle as usize;
            const NAMES: &'static [&'static str] = &[$($display),+];
            const IDLE: Self = $name::Idle;

            fn index(self) -> usize {
                self as usize
            }
        }
    };
}
