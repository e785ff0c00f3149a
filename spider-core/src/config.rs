/// Motion and rendering constants for a spider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiderConfig {
    pub legs: usize,
    /// Pixels travelled per frame while seeking a target
    pub move_speed: f32,
    /// Pixels pushed per frame when another spider is too close
    pub avoid_speed: f32,
    pub avoid_radius: f32,
    /// Half-extent of the random wander target box
    pub wander_range: f32,
    /// Radius of the circle the leg endpoints sit on
    pub leg_reach: f32,
    /// A leg only grabs a point strictly closer than this to its endpoint
    pub leg_snap_distance: f32,
    pub body_radius_x: f32,
    pub body_radius_y: f32,
    pub body_rotation: f32,
    pub foot_radius: f32,
}

impl Default for SpiderConfig {
    fn default() -> Self {
        Self {
            legs: 8,
            move_speed: 4.0,
            avoid_speed: 50.0,
            avoid_radius: 40.0,
            wander_range: 50.0,
            leg_reach: 30.0,
            leg_snap_distance: 30.0,
            body_radius_x: 7.0,
            body_radius_y: 8.0,
            body_rotation: 2.0,
            foot_radius: 3.0,
        }
    }
}

/// Constants for the background point field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    pub point_count: usize,
    /// Points strictly closer than this to the pointer are lit
    pub highlight_radius: f32,
    pub highlight_dot_radius: f32,
    /// Regenerate the field at the new size after a resize instead of
    /// keeping the old points
    pub regenerate_on_resize: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            point_count: 2000,
            highlight_radius: 130.0,
            highlight_dot_radius: 2.0,
            regenerate_on_resize: false,
        }
    }
}
