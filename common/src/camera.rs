//! Camera for 2D canvas-space drawing

use glam::{Mat4, Vec2};

/// Orthographic camera over a y-down canvas.
///
/// `origin` is the canvas point shown at the window's top-left corner and
/// `zoom` is window pixels per canvas unit.
#[derive(Debug, Clone)]
pub struct Camera2D {
    pub origin: Vec2,
    pub zoom: f32,
    pub viewport: Vec2,
}

impl Camera2D {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            origin: Vec2::ZERO,
            zoom: 1.0,
            viewport: Vec2::new(viewport_width, viewport_height),
        }
    }

    /// Canvas area currently visible
    pub fn visible_extent(&self) -> Vec2 {
        self.viewport / self.zoom
    }

    /// Get the view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        let extent = self.visible_extent();
        Mat4::orthographic_rh(
            self.origin.x,
            self.origin.x + extent.x,
            self.origin.y + extent.y,
            self.origin.y,
            -1.0,
            1.0,
        )
    }

    pub fn update_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    /// Move by a fraction of the visible extent
    pub fn pan(&mut self, fraction: Vec2) {
        self.origin += fraction * self.visible_extent();
    }

    /// Zoom about the centre of the view
    pub fn zoom_by(&mut self, factor: f32) {
        let center = self.origin + self.visible_extent() * 0.5;
        self.zoom = (self.zoom * factor).clamp(0.1, 20.0);
        self.origin = center - self.visible_extent() * 0.5;
    }
}

/// Camera uniform data for shaders
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn from_camera_2d(camera: &Camera2D) -> Self {
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
        }
    }
}
