use crate::constants::{FRAME_BOX_OFFSET, FRAME_BOX_SCALE, GOLDEN_RATIO, WALL_ORIGIN};
use crate::mindmap::escape_xml;
use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// One gallery exhibit as supplied by the site content.
///
/// Field names follow the content JSON: `idname` is the frame's stable id
/// (also its URL token) and `idurl` the image shown while it is selected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameSpec {
    pub position: [f32; 3],
    /// Euler XYZ, radians.
    pub rotation: [f32; 3],
    pub url: String,
    pub title: String,
    #[serde(rename = "idname")]
    pub id: String,
    #[serde(rename = "idurl")]
    pub active_url: String,
    #[serde(rename = "videoUrl", default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduce: Option<String>,
}

/// A placed frame: its `FrameSpec` plus the world transform, computed once.
#[derive(Clone, Debug)]
pub struct Frame {
    spec: FrameSpec,
    orientation: Quat,
    transform: Mat4,
}

impl Frame {
    pub(crate) fn new(spec: FrameSpec) -> Self {
        let [rx, ry, rz] = spec.rotation;
        let orientation = Quat::from_euler(EulerRot::XYZ, rx, ry, rz);
        let translation = WALL_ORIGIN + Vec3::from_array(spec.position);
        let transform = Mat4::from_rotation_translation(orientation, translation);
        Self {
            spec,
            orientation,
            transform,
        }
    }

    pub fn id(&self) -> &str {
        &self.spec.id
    }

    pub fn title(&self) -> &str {
        &self.spec.title
    }

    pub fn description(&self) -> Option<&str> {
        self.spec.introduce.as_deref()
    }

    pub fn image_url(&self) -> &str {
        &self.spec.url
    }

    pub fn active_image_url(&self) -> &str {
        &self.spec.active_url
    }

    pub fn media_link(&self) -> Option<&str> {
        self.spec.video_url.as_deref()
    }

    /// Caption markup: title, optional description, and a video button whose
    /// target rides in `data-href` so one delegated click handler serves
    /// every caption.
    pub fn caption_html(&self, video_button_id: &str) -> String {
        let mut html = format!("<h2>{}</h2>", escape_xml(self.title()));
        if let Some(text) = self.description() {
            html.push_str(&format!("<p>{}</p>", escape_xml(text)));
        }
        if let Some(url) = self.media_link() {
            html.push_str(&format!(
                "<button id='{}' type='button' data-href='{}'>🎥 VIDEO</button>",
                video_button_id,
                escape_xml(url)
            ));
        }
        html
    }

    pub fn world_transform(&self) -> Mat4 {
        self.transform
    }

    pub fn world_orientation(&self) -> Quat {
        self.orientation
    }

    /// Camera position that looks straight at the picture from `distance`
    /// in front of it.
    pub fn focus_point(&self, distance: f32) -> Vec3 {
        self.transform
            .transform_point3(Vec3::new(0.0, GOLDEN_RATIO / 2.0, distance))
    }

    /// Unit cube -> world transform of the clickable frame body.
    pub fn hit_box_transform(&self) -> Mat4 {
        self.transform * Mat4::from_scale_rotation_translation(
            FRAME_BOX_SCALE,
            Quat::IDENTITY,
            FRAME_BOX_OFFSET,
        )
    }

    /// Ray parameter of the nearest hit against the frame body, if any.
    /// `t` is measured along the world-space `ray_dir` as given.
    pub fn intersect(&self, ray_origin: Vec3, ray_dir: Vec3) -> Option<f32> {
        let inv = self.hit_box_transform().inverse();
        let o = inv.transform_point3(ray_origin);
        let d = inv.transform_vector3(ray_dir);
        ray_unit_cube(o, d)
    }
}

/// Slab test against the axis-aligned cube `[-0.5, 0.5]^3`.
fn ray_unit_cube(o: Vec3, d: Vec3) -> Option<f32> {
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;
    for axis in 0..3 {
        let (oa, da) = (o[axis], d[axis]);
        if da.abs() < 1e-8 {
            if !(-0.5..=0.5).contains(&oa) {
                return None;
            }
            continue;
        }
        let t1 = (-0.5 - oa) / da;
        let t2 = (0.5 - oa) / da;
        t_min = t_min.max(t1.min(t2));
        t_max = t_max.min(t1.max(t2));
    }
    if t_max < t_min.max(0.0) {
        return None;
    }
    Some(if t_min >= 0.0 { t_min } else { t_max })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(id: &str, position: [f32; 3], yaw: f32) -> FrameSpec {
        FrameSpec {
            position,
            rotation: [0.0, yaw, 0.0],
            url: format!("/{}.png", id),
            title: id.to_uppercase(),
            id: id.to_string(),
            active_url: format!("/{}-active.png", id),
            video_url: None,
            introduce: None,
        }
    }

    #[test]
    fn cube_hit_from_front() {
        let t = ray_unit_cube(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z).unwrap();
        assert!((t - 4.5).abs() < 1e-5);
    }

    #[test]
    fn cube_miss_parallel_outside() {
        assert!(ray_unit_cube(Vec3::new(2.0, 0.0, 5.0), Vec3::NEG_Z).is_none());
    }

    #[test]
    fn cube_behind_ray_is_missed() {
        assert!(ray_unit_cube(Vec3::new(0.0, 0.0, 5.0), Vec3::Z).is_none());
    }

    #[test]
    fn ray_hits_frame_center() {
        let f = Frame::new(spec("a", [0.0, 0.0, 1.5], 0.0));
        let center = f
            .world_transform()
            .transform_point3(FRAME_BOX_OFFSET);
        let origin = center + Vec3::Z * 4.0;
        let t = f.intersect(origin, Vec3::NEG_Z).unwrap();
        let expected = 4.0 - FRAME_BOX_SCALE.z * 0.5;
        assert!((t - expected).abs() < 1e-4);
    }

    #[test]
    fn focus_point_is_in_front_of_rotated_frame() {
        let yaw = std::f32::consts::FRAC_PI_3;
        let f = Frame::new(spec("b", [-1.5, 0.0, 2.15], yaw));
        let p = f.focus_point(2.0);
        let center = f.world_transform().transform_point3(FRAME_BOX_OFFSET);
        let facing = Quat::from_rotation_y(yaw) * Vec3::Z;
        assert!(((p - center) - facing * 2.0).length() < 1e-4);
    }
}
