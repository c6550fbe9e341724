//! # tailsitter-control
//! A `#![no_std]` control-allocation library for tailsitter VTOL aircraft
//!
//! A tailsitter rests on its tail for vertical flight and pitches over
//! roughly 90 degrees to fly as a conventional fixed wing aircraft. Each
//! control cycle this crate decides whether the vehicle is driven by
//! VTOL-style or fixed-wing-style mixing, computes the thrust vectoring
//! and throttle outputs for the active regime, reports when an in-progress
//! transition has completed, and remaps pilot stick input while hovering.
//!
//! # Components
//! [`Tailsitter`] is the per-cycle core: regime classification, output
//! mixing, transition completion predicates, and input remapping.
//!
//! [`hal`] contains the traits for the collaborating subsystems
//! (multirotor motor mixing, fixed wing integrators, altitude controller,
//! RC input).
//!
//! [`config`] holds the tailsitter parameters and airframe class.

#![no_std]

pub mod attitude;
pub use attitude::AttitudeSnapshot;

pub mod channels;
pub use channels::{ActuatorOutputs, PilotChannel, PilotChannels};

pub mod config;
pub use config::{FrameClass, InputType, TailsitterConfig};

pub mod hal;
pub use hal::{AltitudeControl, FixedWingControl, LimitFlags, MotorControl, RcInput};

pub mod tailsitter;
pub use tailsitter::{FlightState, Tailsitter, TransitionState};

/// Constrain `amt` to `low..=high`, mapping NaN to the midpoint.
pub(crate) fn constrain_float(amt: f32, low: f32, high: f32) -> f32 {
    if amt.is_nan() {
        return (low + high) / 2.0;
    }

    if amt < low {
        return low;
    }

    if amt > high {
        return high;
    }

    amt
}

#[cfg(test)]
mod tests {
    use super::constrain_float;

    #[test]
    fn constrain_clamps_and_handles_nan() {
        assert_eq!(constrain_float(5000., -4500., 4500.), 4500.);
        assert_eq!(constrain_float(-5000., -4500., 4500.), -4500.);
        assert_eq!(constrain_float(120., -4500., 4500.), 120.);
        assert_eq!(constrain_float(f32::NAN, 0., 100.), 50.);
    }
}
