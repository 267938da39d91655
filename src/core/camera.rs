use crate::core::matrix::Mat4;
use crate::core::ray::Ray;
use crate::core::vector::Vec4;
use crate::core::xform::Xform;
use crate::error::Result;

/** Pinhole camera with its image plane one unit in front of the eye. */
pub struct Camera {
    /** Horizontal size of the image, in pixels. */
    pub hsize: usize,
    /** Vertical size of the image, in pixels. */
    pub vsize: usize,
    /** Angle, in radians, spanned by the longer side of the image. */
    pub field_of_view: f64,
    xform: Xform,
    half_width: f64,
    half_height: f64,
    pixel_size: f64,
}

impl Camera {
    pub fn new(hsize: usize, vsize: usize, field_of_view: f64) -> Camera {
        let half_view = (field_of_view / 2.0).tan();
        let aspect = hsize as f64 / vsize as f64;
        let (half_width, half_height) = if aspect >= 1.0 {
            (half_view, half_view / aspect)
        }
        else {
            (half_view * aspect, half_view)
        };

        Camera {
            hsize: hsize,
            vsize: vsize,
            field_of_view: field_of_view,
            xform: Xform::identity(),
            half_width: half_width,
            half_height: half_height,
            pixel_size: (half_width * 2.0) / hsize as f64,
        }
    }

    /** World-space size of one pixel on the image plane. */
    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    /** Horizontal to vertical ratio. */
    pub fn aspect_ratio(&self) -> f64 {
        self.hsize as f64 / self.vsize as f64
    }

    /** Sets the world-to-eye (view) transform. */
    pub fn set_transform(&mut self, view: Mat4) -> Result<()> {
        self.xform = Xform::new(view)?;
        Ok(())
    }

    pub fn look_at(&mut self, from: Vec4, to: Vec4, up: Vec4) -> Result<()> {
        self.set_transform(Mat4::view_transform(from, to, up)?)
    }

    /**
     * Computes the ray starting at the eye and passing through the center of
     * pixel (px, py), where (0, 0) is the upper-left pixel.
     */
    pub fn compute_ray(&self, px: usize, py: usize) -> Result<Ray> {
        let x_offset = (px as f64 + 0.5) * self.pixel_size;
        let y_offset = (py as f64 + 0.5) * self.pixel_size;

        // The camera looks toward -z, so +x is to the left.
        let world_x = self.half_width - x_offset;
        let world_y = self.half_height - y_offset;

        let pixel = self.xform.untransform(Vec4::point(world_x, world_y, -1.0));
        let origin = self.xform.untransform(Vec4::origin());
        let direction = (pixel - origin).normalized()?;

        Ok(Ray::new(origin, direction))
    }
}
