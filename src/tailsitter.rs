//! Per-cycle tailsitter control allocation: regime classification, output
//! mixing, transition completion, and pilot input remapping.

use crate::config::{
    MASK_AILERON, MASK_ELEVATOR, MASK_RUDDER, MASK_THROTTLE,
};
use crate::hal::{AltitudeControl, FixedWingControl, MotorControl, RcInput};
use crate::{
    constrain_float, ActuatorOutputs, AttitudeSnapshot, FrameClass, InputType, PilotChannels,
    TailsitterConfig,
};
use num_traits::Float;

/// Scaled output magnitude at which the tilt servos saturate, in
/// centidegrees-equivalent units
pub const SERVO_OUTPUT_MAX: f32 = 4500.;

/// A transition in either direction is forced complete once this much time
/// has elapsed, regardless of attitude
pub const TRANSITION_TIMEOUT_MS: u32 = 2000;

/// Raw RC value above which a two-position switch reads as high
pub const RC_SWITCH_HIGH: u16 = 1700;

/// Scale applied to the hover pitch error before the power law
const VECTORED_PITCH_ERROR_SCALE: f32 = 0.5;

/// Bridge from the 0 ~ 100 hover throttle percentage to the altitude
/// controller's internal integrator units
const THROTTLE_PCT_TO_ACCEL_Z_I: f32 = 10.;

/// Transition state owned by the external flight-mode state machine. Only
/// the two `AngleWait` states are interpreted here; the rest pass through
/// untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionState {
    AirspeedWait,
    Timer,
    /// Pitching over towards fixed wing flight
    AngleWaitFw,
    /// Pitching up towards VTOL flight
    AngleWaitVtol,
    Done,
}

/// Read-only snapshot of the externally owned flight context for one
/// control cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlightState {
    pub transition: TransitionState,
    /// Monotonic time at which the current transition began, milliseconds
    pub transition_start_ms: u32,
    /// Monotonic time now, milliseconds
    pub now_ms: u32,
    pub in_vtol_mode: bool,
    /// Waiting for the pilot to raise the throttle; suppresses the hover
    /// throttle seed
    pub throttle_wait: bool,
    pub is_flying: bool,
    pub armed: bool,
    /// Commanded pitch from the navigation controller, centidegrees
    pub nav_pitch_cd: i32,
    /// Measured pitch from the hover view estimate, centidegrees
    pub view_pitch_cd: i32,
}

impl Default for FlightState {
    fn default() -> Self {
        Self {
            transition: TransitionState::Done,
            transition_start_ms: 0,
            now_ms: 0,
            in_vtol_mode: false,
            throttle_wait: false,
            is_flying: false,
            armed: false,
            nav_pitch_cd: 0,
            view_pitch_cd: 0,
        }
    }
}

/// The tailsitter control-allocation core.
///
/// Owns the configuration and handles to the collaborating subsystems;
/// everything else arrives as per-cycle snapshots. All methods run to
/// completion inside one control-loop invocation.
pub struct Tailsitter<M, F, A, R> {
    pub config: TailsitterConfig,
    pub frame_class: FrameClass,
    /// Whether the VTOL subsystem is available at all
    pub vtol_available: bool,
    pub motors: M,
    pub fixed_wing: F,
    pub altitude: A,
    pub rc: R,
}

impl<M, F, A, R> Tailsitter<M, F, A, R> {
    /// True when flying a tailsitter airframe.
    pub fn is_tailsitter(&self) -> bool {
        self.vtol_available && self.frame_class == FrameClass::TailSitter
    }

    /// True while tailsitter control authority is active: any VTOL mode,
    /// or still inside the fixed-wing-ward transition window.
    pub fn active(&self, state: &FlightState) -> bool {
        if !self.is_tailsitter() {
            return false;
        }
        if state.in_vtol_mode {
            return true;
        }
        state.transition == TransitionState::AngleWaitFw
    }

    /// True while transitioning to VTOL flight.
    pub fn in_vtol_transition(&self, state: &FlightState) -> bool {
        self.is_tailsitter()
            && state.in_vtol_mode
            && state.transition == TransitionState::AngleWaitVtol
    }

    /// True once enough of the transition to fixed wing flight has
    /// completed for the state machine to hand over control.
    ///
    /// Consumes the hover view attitude. Roll is folded about +/-90 so a
    /// vehicle rolling through vertical measures its distance from level
    /// flight, and an inverted-flight command completes immediately.
    pub fn transition_fw_complete(
        &self,
        view: AttitudeSnapshot,
        fly_inverted: bool,
        state: &FlightState,
    ) -> bool {
        if fly_inverted {
            // transition immediately
            return true;
        }
        let mut roll_cd = view.roll_cd.abs();
        if roll_cd > 9000 {
            roll_cd = 18000 - roll_cd;
        }
        let threshold_cd = self.config.transition_angle * 100;
        if view.pitch_cd.abs() > threshold_cd
            || roll_cd > threshold_cd
            || state.now_ms.wrapping_sub(state.transition_start_ms) >= TRANSITION_TIMEOUT_MS
        {
            return true;
        }
        // still waiting
        false
    }

    /// True once enough of the transition to VTOL flight has completed for
    /// the state machine to hand over control.
    ///
    /// Consumes the raw airframe attitude, unfolded; the asymmetry with
    /// [`Self::transition_fw_complete`] follows from the differing
    /// attitude sources and is intentional.
    pub fn transition_vtol_complete(&self, ahrs: AttitudeSnapshot, state: &FlightState) -> bool {
        let threshold_cd = self.config.transition_angle * 100;
        if ahrs.pitch_cd.abs() > threshold_cd
            || ahrs.roll_cd.abs() > threshold_cd
            || state.now_ms.wrapping_sub(state.transition_start_ms) >= TRANSITION_TIMEOUT_MS
        {
            return true;
        }
        // still waiting
        false
    }

    /// Remap pilot stick input for the active regime. With plane-style
    /// input configured, roll and yaw sticks swap while hovering so stick
    /// response stays intuitive for a fixed wing pilot with the nose
    /// pointed up. Runs once per cycle before pilot input is consumed.
    pub fn check_input(&self, state: &FlightState, pilot: &mut PilotChannels) {
        if self.active(state) && self.config.input_type == InputType::Plane {
            let roll_in = pilot.roll.control_in;
            let yaw_in = pilot.rudder.control_in;
            pilot.roll.control_in = yaw_in;
            pilot.rudder.control_in = -roll_in;
        }
    }
}

impl<M, F, A, R> Tailsitter<M, F, A, R>
where
    M: MotorControl,
    F: FixedWingControl,
    A: AltitudeControl,
    R: RcInput,
{
    /// Run output mixing for one control cycle. No-op unless flying a
    /// tailsitter; otherwise takes exactly one of the fixed wing path or
    /// the active VTOL path.
    pub fn output(
        &mut self,
        state: &FlightState,
        pilot: &PilotChannels,
        servos: &mut ActuatorOutputs,
    ) {
        if !self.is_tailsitter() {
            return;
        }
        if !self.active(state) || self.in_vtol_transition(state) {
            self.output_fixed_wing(state, servos);
            return;
        }
        self.output_vtol(state, pilot, servos);
    }

    /// Fixed wing flight, including the window while transitioning to
    /// VTOL.
    fn output_fixed_wing(&mut self, state: &FlightState, servos: &mut ActuatorOutputs) {
        if self.config.vectored_forward_gain > 0. {
            // thrust vectoring in fixed wing flight
            let aileron = servos.aileron;
            let elevator = servos.elevator;
            servos.tilt_motor_left = (elevator + aileron) * self.config.vectored_forward_gain;
            servos.tilt_motor_right = (elevator - aileron) * self.config.vectored_forward_gain;
        } else {
            servos.tilt_motor_left = 0.;
            servos.tilt_motor_right = 0.;
        }

        if self.in_vtol_transition(state) && !state.throttle_wait && state.is_flying && state.armed
        {
            // during transitions to VTOL mode set the throttle to the
            // hover throttle, and seed the altitude controller integrator
            // at the same level to avoid a throttle sag on handover
            let throttle = (self.motors.throttle_hover() * 100.) as u8;
            servos.throttle = throttle as f32;
            servos.throttle_left = throttle as f32;
            servos.throttle_right = throttle as f32;
            servos.rudder = 0.;
            self.altitude
                .set_accel_z_integrator(throttle as f32 * THROTTLE_PCT_TO_ACCEL_Z_I);
        }
    }

    /// Active VTOL flight, including the window while transitioning to
    /// fixed wing.
    fn output_vtol(
        &mut self,
        state: &FlightState,
        pilot: &PilotChannels,
        servos: &mut ActuatorOutputs,
    ) {
        self.motors.output(servos);

        // the fixed wing controllers are inactive and must not accumulate
        self.fixed_wing.reset_pitch_integrator();
        self.fixed_wing.reset_roll_integrator();

        if self.config.vectored_hover_gain > 0. {
            // thrust vectoring in VTOL modes
            let aileron = servos.aileron;
            let elevator = servos.elevator;

            // apply extra elevator at high pitch errors using a power
            // law. This lets the motors point straight up for takeoff
            // without integrator windup
            let pitch_error_cd =
                (state.nav_pitch_cd - state.view_pitch_cd) as f32 * VECTORED_PITCH_ERROR_SCALE;
            let extra_pitch =
                constrain_float(pitch_error_cd, -SERVO_OUTPUT_MAX, SERVO_OUTPUT_MAX)
                    / SERVO_OUTPUT_MAX;
            let extra_sign = if extra_pitch > 0. { 1. } else { -1. };
            let extra_elevator = extra_sign
                * extra_pitch.abs().powf(self.config.vectored_hover_power)
                * SERVO_OUTPUT_MAX;

            let tilt_left = extra_elevator + (elevator + aileron) * self.config.vectored_hover_gain;
            let tilt_right =
                extra_elevator + (elevator - aileron) * self.config.vectored_hover_gain;
            if tilt_left.abs() >= SERVO_OUTPUT_MAX || tilt_right.abs() >= SERVO_OUTPUT_MAX {
                // prevent integrator windup
                let limit = self.motors.limit_mut();
                limit.roll_pitch = true;
                limit.yaw = true;
            }
            servos.tilt_motor_left = tilt_left;
            servos.tilt_motor_right = tilt_right;
        }

        if self.config.input_mask_chan > 0
            && self.config.input_mask > 0
            && self.rc.read(self.config.input_mask_chan - 1) > RC_SWITCH_HIGH
        {
            // the user is learning to prop-hang
            if self.config.input_mask & MASK_AILERON != 0 {
                servos.aileron = pilot.roll.control_in_zero_dz as f32;
            }
            if self.config.input_mask & MASK_ELEVATOR != 0 {
                servos.elevator = pilot.pitch.control_in_zero_dz as f32;
            }
            if self.config.input_mask & MASK_THROTTLE != 0 {
                servos.throttle = pilot.throttle.control_in_zero_dz as f32;
            }
            if self.config.input_mask & MASK_RUDDER != 0 {
                servos.rudder = pilot.rudder.control_in_zero_dz as f32;
            }
        }
    }
}
