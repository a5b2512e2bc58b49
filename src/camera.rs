use glam::{Mat4, Vec3};

/// Right-handed perspective camera looking down -Z.
///
/// The projection matrix is cached and only rebuilt by
/// [`PerspectiveCamera::update_projection`], so aspect changes take effect
/// once the caller refreshes it (the resize path does both).
#[derive(Clone, Debug)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    fovy_radians: f32,
    aspect: f32,
    znear: f32,
    zfar: f32,
    projection: Mat4,
}

impl PerspectiveCamera {
    pub fn new(fovy_degrees: f32, aspect: f32, znear: f32, zfar: f32, position: Vec3) -> Self {
        let mut cam = Self {
            position,
            fovy_radians: fovy_degrees.to_radians(),
            aspect: sanitize_aspect(aspect, 1.0),
            znear,
            zfar,
            projection: Mat4::IDENTITY,
        };
        cam.update_projection();
        cam
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Degenerate aspects (zero-height windows) keep the previous value.
    #[inline]
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = sanitize_aspect(aspect, self.aspect);
    }

    pub fn update_projection(&mut self) {
        self.projection = Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar);
    }

    #[inline]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    #[inline]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, Vec3::NEG_Z, Vec3::Y)
    }

    #[inline]
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }
}

#[inline]
fn sanitize_aspect(aspect: f32, fallback: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        fallback
    }
}
