/// Aileron bit in [`TailsitterConfig::input_mask`]
pub const MASK_AILERON: u8 = 1;
/// Elevator bit in [`TailsitterConfig::input_mask`]
pub const MASK_ELEVATOR: u8 = 2;
/// Throttle bit in [`TailsitterConfig::input_mask`]
pub const MASK_THROTTLE: u8 = 4;
/// Rudder bit in [`TailsitterConfig::input_mask`]
pub const MASK_RUDDER: u8 = 8;

/// How pilot stick input is interpreted while the tailsitter is hovering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputType {
    /// Multicopter-style input in the hover frame
    #[default]
    Normal,
    /// Plane-style input: roll and yaw sticks are swapped so the controls
    /// stay intuitive for a fixed wing pilot while the nose points up
    Plane,
}

/// VTOL airframe class; only [`FrameClass::TailSitter`] is driven by this
/// crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameClass {
    Quad,
    Hexa,
    Octa,
    TailSitter,
}

/// Tailsitter parameters, owned and persisted by the caller and read-only
/// here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TailsitterConfig {
    /// Gain from aileron/elevator deflection to tilt servo output in
    /// forward flight. Zero or less disables forward thrust vectoring and
    /// holds the tilt servos at neutral.
    pub vectored_forward_gain: f32,

    /// Gain from aileron/elevator deflection to tilt servo output while
    /// hovering. Zero or less disables hover thrust vectoring.
    pub vectored_hover_gain: f32,

    /// Exponent of the power law shaping the pitch-error elevator boost
    /// while hovering, >= 0
    pub vectored_hover_power: f32,

    /// Attitude error in degrees at which a transition in either
    /// direction is considered complete
    pub transition_angle: i32,

    /// Bitmask of `MASK_*` channels handed directly to the pilot when the
    /// learning-mode switch is high
    pub input_mask: u8,

    /// 1-based RC channel monitored for the learning-mode switch, 0 to
    /// disable
    pub input_mask_chan: u8,

    /// Stick frame used while hovering
    pub input_type: InputType,
}

impl Default for TailsitterConfig {
    fn default() -> Self {
        Self {
            vectored_forward_gain: 0.,
            vectored_hover_gain: 0.5,
            vectored_hover_power: 2.5,
            transition_angle: 45,
            input_mask: 0,
            input_mask_chan: 0,
            input_type: InputType::Normal,
        }
    }
}
