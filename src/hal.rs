//! Traits for the subsystems the tailsitter core drives. The core is
//! handed concrete implementations by the vehicle; tests use fakes.

use crate::ActuatorOutputs;

/// Anti-windup flags owned by the motor mixing subsystem. The tailsitter
/// core only ever sets these; the attitude controller consumes and clears
/// them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LimitFlags {
    pub roll_pitch: bool,
    pub yaw: bool,
}

/// Shared multirotor motor mixing.
pub trait MotorControl {
    /// Run the multirotor mix and write the rotor commands to `servos`.
    fn output(&mut self, servos: &mut ActuatorOutputs);

    /// Steady-state hover throttle in 0 ~ 1.
    fn throttle_hover(&self) -> f32;

    fn limit_mut(&mut self) -> &mut LimitFlags;
}

/// Fixed wing attitude controller integrator hooks.
pub trait FixedWingControl {
    fn reset_pitch_integrator(&mut self);

    fn reset_roll_integrator(&mut self);
}

/// Altitude (vertical acceleration) controller integrator hook.
pub trait AltitudeControl {
    fn set_accel_z_integrator(&mut self, integrator: f32);
}

/// Raw RC receiver values.
pub trait RcInput {
    /// Raw value on a 0-based channel, nominally 1000 ~ 2000.
    fn read(&self, channel: u8) -> u16;
}
