/// Scaled servo output channels written once per control cycle.
///
/// Control surfaces use the -4500 ~ +4500 scaled range; the throttle
/// family holds a 0 ~ 100 percentage when driven by the hover-throttle
/// path during a transition to VTOL flight.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ActuatorOutputs {
    pub aileron: f32,
    pub elevator: f32,
    pub rudder: f32,
    pub throttle: f32,
    pub throttle_left: f32,
    pub throttle_right: f32,
    pub tilt_motor_left: f32,
    pub tilt_motor_right: f32,
}

/// Pilot command snapshot for one input channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PilotChannel {
    /// Scaled control value with the centre deadzone applied
    pub control_in: i16,
    /// Scaled control value ignoring the deadzone, used by the prop-hang
    /// learning override
    pub control_in_zero_dz: i16,
}

/// The four pilot stick channels consumed by the tailsitter core.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PilotChannels {
    pub roll: PilotChannel,
    pub pitch: PilotChannel,
    pub throttle: PilotChannel,
    pub rudder: PilotChannel,
}
