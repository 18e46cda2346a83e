//! Flat name to value mapping as read from a parameter source, and its conversion
//! into validated [Parameters] and [Scene].

use std::collections::HashMap;
use nalgebra::Point2;

use crate::constraints::Constraints;
use crate::parameter_error::ParameterError;
use crate::parameters::rpr_kinematics::{Parameters, Scene};

/// Keys required to build [Parameters].
pub const ROBOT_KEYS: [&str; 12] = [
    "x0", "y0", "L_1", "L_2", "L_3",
    "t1_min", "t1_max", "t2_min", "t2_max", "t3_min", "t3_max", "dt",
];

/// Keys required to build [Scene]. Only used for drawing.
pub const SCENE_KEYS: [&str; 8] = [
    "xmin", "xmax", "ymin", "ymax", "xmur[0]", "xmur[1]", "ymur[0]", "ymur[1]",
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterMap {
    values: HashMap<String, f64>,
}

impl ParameterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value, replacing any previous one with the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Value of a required parameter, [ParameterError::MissingField] if absent.
    pub fn require(&self, name: &str) -> Result<f64, ParameterError> {
        self.get(name)
            .ok_or_else(|| ParameterError::MissingField(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ParameterMap {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut map = ParameterMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

impl Parameters {
    /// Builds validated parameters from the mapping. All of [ROBOT_KEYS] are required.
    pub fn from_map(map: &ParameterMap) -> Result<Self, ParameterError> {
        let origin = Point2::new(map.require("x0")?, map.require("y0")?);
        let lengths = [map.require("L_1")?, map.require("L_2")?, map.require("L_3")?];
        let constraints = Constraints::new(
            [map.require("t1_min")?, map.require("t2_min")?, map.require("t3_min")?],
            [map.require("t1_max")?, map.require("t2_max")?, map.require("t3_max")?],
        );
        Parameters::new(origin, lengths, constraints, map.require("dt")?)
    }

    /// Inverse of [Parameters::from_map].
    pub fn to_map(&self) -> ParameterMap {
        let c = self.constraints();
        ROBOT_KEYS.iter().copied().zip([
            self.origin().x, self.origin().y,
            self.l1(), self.l2(), self.l3(),
            c.from[0], c.to[0], c.from[1], c.to[1], c.from[2], c.to[2],
            self.dt(),
        ]).collect()
    }
}

impl Scene {
    /// Builds the drawing context from the mapping. All of [SCENE_KEYS] are required.
    pub fn from_map(map: &ParameterMap) -> Result<Self, ParameterError> {
        Ok(Scene {
            xmin: map.require("xmin")?,
            xmax: map.require("xmax")?,
            ymin: map.require("ymin")?,
            ymax: map.require("ymax")?,
            wall: [
                Point2::new(map.require("xmur[0]")?, map.require("ymur[0]")?),
                Point2::new(map.require("xmur[1]")?, map.require("ymur[1]")?),
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ParameterMap {
        Parameters::rpr_demo().to_map()
    }

    #[test]
    fn test_round_trip_demo() {
        let parameters = Parameters::from_map(&complete()).expect("complete map");
        assert_eq!(parameters, Parameters::rpr_demo());
    }

    #[test]
    fn test_each_key_is_required() {
        for key in ROBOT_KEYS {
            let map: ParameterMap = ROBOT_KEYS.iter()
                .filter(|&&k| k != key)
                .map(|&k| (k, complete().get(k).unwrap()))
                .collect();
            match Parameters::from_map(&map) {
                Err(ParameterError::MissingField(name)) => assert_eq!(name, key),
                other => panic!("Expected missing {}, got {:?}", key, other),
            }
        }
    }

    #[test]
    fn test_invalid_values_propagate() {
        let mut map = complete();
        map.insert("L_2", 0.0);
        assert!(matches!(Parameters::from_map(&map), Err(ParameterError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_scene_requires_wall() {
        let mut map = complete();
        for (key, value) in [("xmin", -2.0), ("xmax", 2.0), ("ymin", -1.0), ("ymax", 1.0),
            ("xmur[0]", 1.5), ("xmur[1]", 1.5), ("ymur[0]", -1.0)] {
            map.insert(key, value);
        }
        assert!(matches!(Scene::from_map(&map), Err(ParameterError::MissingField(ref k)) if k == "ymur[1]"));

        map.insert("ymur[1]", 1.0);
        let scene = Scene::from_map(&map).expect("complete scene");
        assert_eq!(scene.wall, [Point2::new(1.5, -1.0), Point2::new(1.5, 1.0)]);
    }
}
