//! Call-site instrumentation macros.
//!
//! Each macro's definition - not its expansion - is selected by this
//! crate's feature flags, so instrumented call sites compile unchanged
//! under the disabled, single-dimension, and bucketed builds. In the
//! disabled build every macro expands to nothing and its arguments are
//! never evaluated.

// --- single-dimension build ---

/// Re-anchor the clock at stage `s` without crediting elapsed time.
#[cfg(any(feature = "timing", feature = "timing-extended"))]
#[macro_export]
macro_rules! profile_start {
    ($clock:expr, $stage:expr) => {
        $clock.start($stage);
    };
}

/// Commit the running interval and make `s` the active stage.
#[cfg(all(feature = "timing", not(feature = "timing-extended")))]
#[macro_export]
macro_rules! profile_switch {
    ($clock:expr, $stage:expr) => {
        $clock.switch_stage($stage);
    };
}

/// Bracket the rest of the enclosing scope with a stage.
///
/// Expands to a [`StageGuard`](crate::StageGuard) binding in the
/// single-dimension build and to nothing in the bucketed build, where
/// only coordinate-carrying scopes are measured.
#[cfg(all(feature = "timing", not(feature = "timing-extended")))]
#[macro_export]
macro_rules! profile_scope {
    ($clock:expr, $stage:expr) => {
        let _stage_scope = $crate::StageGuard::new($clock, $stage);
    };
}

/// Bracket the rest of the enclosing scope with a stage and bucket
/// coordinates.
///
/// The five generic inputs (t, x, y, w, h) are mapped onto the grid by
/// the active [`BucketLayout`](crate::BucketLayout). In the
/// single-dimension build this degrades to a plain stage scope and the
/// coordinate arguments are not evaluated.
#[cfg(all(feature = "timing", not(feature = "timing-extended")))]
#[macro_export]
macro_rules! profile_scope_ext {
    ($clock:expr, $stage:expr, $t:expr, $x:expr, $y:expr, $w:expr, $h:expr) => {
        let _stage_scope = $crate::StageGuard::new($clock, $stage);
    };
}

// --- bucketed build ---

/// Commit the running interval and make `s` the active stage.
#[cfg(feature = "timing-extended")]
#[macro_export]
macro_rules! profile_switch {
    ($clock:expr, $stage:expr) => {
        $clock.count($stage, 0, 0, 0);
    };
}

/// Bracket the rest of the enclosing scope with a stage.
///
/// Expands to a [`StageGuard`](crate::StageGuard) binding in the
/// single-dimension build and to nothing in the bucketed build, where
/// only coordinate-carrying scopes are measured.
#[cfg(feature = "timing-extended")]
#[macro_export]
macro_rules! profile_scope {
    ($clock:expr, $stage:expr) => {};
}

/// Bracket the rest of the enclosing scope with a stage and bucket
/// coordinates.
///
/// The five generic inputs (t, x, y, w, h) are mapped onto the grid by
/// the active [`BucketLayout`](crate::BucketLayout). In the
/// single-dimension build this degrades to a plain stage scope and the
/// coordinate arguments are not evaluated.
#[cfg(feature = "timing-extended")]
#[macro_export]
macro_rules! profile_scope_ext {
    ($clock:expr, $stage:expr, $t:expr, $x:expr, $y:expr, $w:expr, $h:expr) => {
        let _stage_scope = {
            let (x, y, z) = $crate::bucket_coords($t, $x, $y, $w, $h);
            $crate::StageGuard2D::new($clock, $stage, x, y, z)
        };
    };
}

// --- disabled build ---

/// Re-anchor the clock at stage `s` without crediting elapsed time.
#[cfg(not(any(feature = "timing", feature = "timing-extended")))]
#[macro_export]
macro_rules! profile_start {
    ($clock:expr, $stage:expr) => {};
}

/// Commit the running interval and make `s` the active stage.
#[cfg(not(any(feature = "timing", feature = "timing-extended")))]
#[macro_export]
macro_rules! profile_switch {
    ($clock:expr, $stage:expr) => {};
}

/// Bracket the rest of the enclosing scope with a stage.
#[cfg(not(any(feature = "timing", feature = "timing-extended")))]
#[macro_export]
macro_rules! profile_scope {
    ($clock:expr, $stage:expr) => {};
}

/// Bracket the rest of the enclosing scope with a stage and bucket
/// coordinates.
#[cfg(not(any(feature = "timing", feature = "timing-extended")))]
#[macro_export]
macro_rules! profile_scope_ext {
    ($clock:expr, $stage:expr, $t:expr, $x:expr, $y:expr, $w:expr, $h:expr) => {};
}
