//! Compile-time selection of the active Clock Engine width. There is no
//! hardware to probe here, so the choice is a Cargo feature resolved at
//! compile time rather than a runtime capability check.

/// The Clock Engine width compiled into this build: 32 by default, or 8 /
/// 1 when `force-width8` / `force-width1` is enabled. `force-width1` wins
/// if both forcing features are somehow enabled together.
pub(crate) const fn active_width() -> u32 {
    if cfg!(feature = "force-width1") {
        1
    } else if cfg!(feature = "force-width8") {
        8
    } else {
        32
    }
}

/// Name of the Clock Engine width compiled into this build.
#[must_use]
pub fn active_width_name() -> &'static str {
    match active_width() {
        1 => "width1",
        8 => "width8",
        _ => "width32",
    }
}
