//! Scene data: wireframe models plus the camera that views them.
//!
//! A [`Scene`] is the unit of load and replacement. The pipeline reads it
//! for exactly one frame and never mutates it; camera commands and scene
//! loads produce a new or mutated Scene between frames.

use std::collections::BTreeSet;
use std::error::Error;
use std::fmt;

use crate::camera::{ClipBounds, ProjectionKind, ViewSpec};
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;

/// The built-in demo model: two pentagonal caps at z = -30 and z = -60
/// joined by five struts.
pub const PRISM_VERTICES: [Vec4; 10] = [
    Vec4::point(0.0, 0.0, -30.0),
    Vec4::point(20.0, 0.0, -30.0),
    Vec4::point(20.0, 12.0, -30.0),
    Vec4::point(10.0, 20.0, -30.0),
    Vec4::point(0.0, 12.0, -30.0),
    Vec4::point(0.0, 0.0, -60.0),
    Vec4::point(20.0, 0.0, -60.0),
    Vec4::point(20.0, 12.0, -60.0),
    Vec4::point(10.0, 20.0, -60.0),
    Vec4::point(0.0, 12.0, -60.0),
];

/// Polylines for [`PRISM_VERTICES`]: the two closed caps and the struts.
pub const PRISM_POLYLINES: [&[usize]; 7] = [
    &[0, 1, 2, 3, 4, 0],
    &[5, 6, 7, 8, 9, 5],
    &[0, 5],
    &[1, 6],
    &[2, 7],
    &[3, 8],
    &[4, 9],
];

/// A scene references geometry the models do not contain.
///
/// Detected at the scene-load boundary; an invalid scene never enters the
/// pipeline and the previously valid scene stays in effect.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidSceneError {
    /// A polyline references a vertex index past the model's vertex list.
    EdgeIndexOutOfRange {
        model: usize,
        index: usize,
        vertex_count: usize,
    },
    /// Clip bounds are non-finite or inverted (e.g. umin >= umax).
    MalformedClipBounds(ClipBounds),
}

impl fmt::Display for InvalidSceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EdgeIndexOutOfRange {
                model,
                index,
                vertex_count,
            } => write!(
                f,
                "model {model}: edge index {index} out of range for {vertex_count} vertices"
            ),
            Self::MalformedClipBounds(clip) => {
                write!(f, "malformed clip bounds: {clip:?}")
            }
        }
    }
}

impl Error for InvalidSceneError {}

/// A wireframe model could not be loaded from disk.
#[derive(Debug)]
pub enum LoadError {
    Obj(tobj::LoadError),
    /// The file parsed but contained no vertices.
    NoGeometry,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Obj(e) => write!(f, "failed to load OBJ: {e}"),
            Self::NoGeometry => write!(f, "OBJ file contains no geometry"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Obj(e) => Some(e),
            Self::NoGeometry => None,
        }
    }
}

impl From<tobj::LoadError> for LoadError {
    fn from(e: tobj::LoadError) -> Self {
        Self::Obj(e)
    }
}

/// A polyhedral line-model: homogeneous vertices (w = 1) plus polylines of
/// vertex indices whose consecutive pairs are the edges to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub vertices: Vec<Vec4>,
    pub polylines: Vec<Vec<usize>>,
}

impl Model {
    pub fn new(vertices: Vec<Vec4>, polylines: Vec<Vec<usize>>) -> Self {
        Self {
            vertices,
            polylines,
        }
    }

    /// Load a wireframe model from an OBJ file.
    ///
    /// Faces are triangulated by the loader, then each triangle contributes
    /// its three edges; shared edges are deduplicated so interior edges are
    /// drawn once. All objects in the file merge into one model.
    pub fn from_obj(file_path: &str) -> Result<Self, LoadError> {
        let load_options = tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        };
        let (obj_models, _materials) = tobj::load_obj(file_path, &load_options)?;

        let mut vertices = Vec::new();
        // BTreeSet keeps edge order deterministic across runs.
        let mut edges: BTreeSet<(usize, usize)> = BTreeSet::new();

        for obj_model in &obj_models {
            let mesh = &obj_model.mesh;
            let base = vertices.len();
            for position in mesh.positions.chunks_exact(3) {
                vertices.push(Vec4::point(
                    position[0] as f64,
                    position[1] as f64,
                    position[2] as f64,
                ));
            }
            for triangle in mesh.indices.chunks_exact(3) {
                let [a, b, c] = [
                    base + triangle[0] as usize,
                    base + triangle[1] as usize,
                    base + triangle[2] as usize,
                ];
                for (i, j) in [(a, b), (b, c), (c, a)] {
                    edges.insert((i.min(j), i.max(j)));
                }
            }
        }

        if vertices.is_empty() {
            return Err(LoadError::NoGeometry);
        }

        let polylines = edges.into_iter().map(|(i, j)| vec![i, j]).collect();
        Ok(Self::new(vertices, polylines))
    }

    /// Iterate over the model's edges as (start, end) vertex index pairs.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.polylines
            .iter()
            .flat_map(|polyline| polyline.windows(2).map(|pair| (pair[0], pair[1])))
    }
}

/// One camera plus the models it views. Read-only input for a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub view: ViewSpec,
    pub models: Vec<Model>,
}

impl Scene {
    /// Builds a scene, rejecting malformed clip bounds and out-of-range
    /// edge indices up front.
    pub fn new(view: ViewSpec, models: Vec<Model>) -> Result<Self, InvalidSceneError> {
        let scene = Self { view, models };
        scene.validate()?;
        Ok(scene)
    }

    /// Checks the structural invariants a frame relies on.
    pub fn validate(&self) -> Result<(), InvalidSceneError> {
        if !self.view.clip.is_well_formed() {
            return Err(InvalidSceneError::MalformedClipBounds(self.view.clip));
        }
        for (model_index, model) in self.models.iter().enumerate() {
            let vertex_count = model.vertices.len();
            for polyline in &model.polylines {
                for &index in polyline {
                    if index >= vertex_count {
                        return Err(InvalidSceneError::EdgeIndexOutOfRange {
                            model: model_index,
                            index,
                            vertex_count,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// The built-in demo scene: the pentagonal prism viewed through the
    /// reference parallel camera.
    pub fn sample() -> Self {
        Self {
            view: ViewSpec::new(
                ProjectionKind::Parallel,
                Vec3::new(44.0, 20.0, -16.0),
                Vec3::new(20.0, 20.0, -40.0),
                Vec3::UP,
                ClipBounds::new(-19.0, 5.0, -10.0, 8.0, 12.0, 100.0),
            ),
            models: vec![Model::new(
                PRISM_VERTICES.to_vec(),
                PRISM_POLYLINES.iter().map(|p| p.to_vec()).collect(),
            )],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_scene_is_valid() {
        assert!(Scene::sample().validate().is_ok());
    }

    #[test]
    fn sample_prism_has_fifteen_edges() {
        let scene = Scene::sample();
        // 5 edges per cap plus 5 struts.
        assert_eq!(scene.models[0].edges().count(), 15);
    }

    #[test]
    fn out_of_range_edge_index_is_rejected() {
        let mut scene = Scene::sample();
        scene.models[0].polylines.push(vec![0, 99]);
        assert_eq!(
            scene.validate(),
            Err(InvalidSceneError::EdgeIndexOutOfRange {
                model: 0,
                index: 99,
                vertex_count: 10,
            })
        );
    }

    #[test]
    fn inverted_clip_bounds_are_rejected() {
        let mut scene = Scene::sample();
        scene.view.clip.umin = scene.view.clip.umax + 1.0;
        assert!(matches!(
            scene.validate(),
            Err(InvalidSceneError::MalformedClipBounds(_))
        ));
    }

    #[test]
    fn edges_iterates_consecutive_pairs() {
        let model = Model::new(
            vec![
                Vec4::point(0.0, 0.0, 0.0),
                Vec4::point(1.0, 0.0, 0.0),
                Vec4::point(1.0, 1.0, 0.0),
            ],
            vec![vec![0, 1, 2, 0], vec![0, 2]],
        );
        let edges: Vec<_> = model.edges().collect();
        assert_eq!(edges, vec![(0, 1), (1, 2), (2, 0), (0, 2)]);
    }
}
