/// Roll and pitch from an attitude estimate, in centidegrees.
///
/// The surrounding system maintains two independent estimates (the
/// pitched-over "view" used while hovering and the raw airframe attitude);
/// the two transition completion predicates deliberately consume different
/// ones, so the source is always passed explicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttitudeSnapshot {
    /// Roll angle in centidegrees, nominally -18000 ~ +18000
    pub roll_cd: i32,
    /// Pitch angle in centidegrees, nominally -9000 ~ +9000
    pub pitch_cd: i32,
}

impl AttitudeSnapshot {
    pub fn new(roll_cd: i32, pitch_cd: i32) -> Self {
        Self { roll_cd, pitch_cd }
    }
}
