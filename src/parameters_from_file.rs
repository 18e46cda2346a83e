//! Supports reading RPR parameters and trajectories from files (optional)
//!
//! Parameter files come in two flavors. The `.par` format keeps one parameter per line,
//! the value first and the name as the first word of the trailing comment:
//! ```text
//! # Robot RPR
//! 1.0     # L_1 length of the link 1 envelope (m)
//! -0.5    # xmur[0] wall start
//! ```
//! The YAML format is a flat mapping from the same names to numbers.
//!
//! Trajectory files (`.trj`) hold one sample per line, three whitespace separated numbers
//! `t1 t2 t3`. Text after `#` is a comment. Every value must be finite.

use std::path::Path;
use regex::Regex;
use tracing::debug;
use yaml_rust2::{Yaml, YamlLoader};

use crate::kinematic_traits::Joints;
use crate::parameter_error::ParameterError;
use crate::parameter_map::ParameterMap;
use crate::parameters::rpr_kinematics::{Parameters, Scene};
use crate::trajectory::Trajectory;
use crate::utils::is_valid;

impl ParameterMap {
    /// Parses `.par` content. Lines without `#`, with nothing before `#`, or with a value
    /// that is not a number are skipped. If a name repeats, the last value wins.
    pub fn from_par_str(contents: &str) -> Result<Self, ParameterError> {
        let re = Regex::new(r"^(?P<value>[^#]*)#\s*(?P<name>\S+)")
            .map_err(|_| ParameterError::ParseError("Invalid regex pattern".to_string()))?;

        let mut map = ParameterMap::new();
        for (n, line) in contents.lines().enumerate() {
            let line = line.trim();
            let Some(captures) = re.captures(line) else {
                continue;
            };
            let value = captures["value"].trim();
            if value.is_empty() {
                continue;
            }
            match value.parse::<f64>() {
                Ok(v) => map.insert(&captures["name"], v),
                Err(_) => debug!("line {}: skipping non numeric value '{}'", n + 1, value),
            }
        }
        Ok(map)
    }

    pub fn from_par_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_par_str(&contents)
    }

    /// Parses a flat YAML mapping of names to numbers. Integers are accepted as well.
    /// ```yaml
    /// x0: 0.0
    /// L_1: 1
    /// "xmur[0]": 2.0
    /// ```
    pub fn from_yaml_str(contents: &str) -> Result<Self, ParameterError> {
        let docs = YamlLoader::load_from_str(contents)
            .map_err(|e| ParameterError::ParseError(format!("{}", e)))?;
        let Some(doc) = docs.first() else {
            return Ok(ParameterMap::new());
        };
        let Yaml::Hash(hash) = doc else {
            return Err(ParameterError::ParseError(
                "top level of the parameter file must be a mapping".to_string()));
        };

        let mut map = ParameterMap::new();
        for (key, value) in hash {
            let name = key.as_str().ok_or_else(|| ParameterError::ParseError(
                format!("parameter name must be a string (got {:?})", key)))?;
            let number = match value {
                Yaml::Real(_) => value.as_f64(),
                Yaml::Integer(i) => Some(*i as f64),
                _ => None,
            }.ok_or_else(|| ParameterError::ParseError(
                format!("parameter '{}' must be a number (got {:?})", name, value)))?;
            map.insert(name, number);
        }
        Ok(map)
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Reads YAML if the extension is `.yaml` or `.yml`, the `.par` format otherwise.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_par_file(path),
        }
    }
}

impl Parameters {
    /// Reads and validates robot parameters from a `.par` or YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        Parameters::from_map(&ParameterMap::from_file(path)?)
    }
}

impl Scene {
    /// Reads the drawing context from a `.par` or YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        Scene::from_map(&ParameterMap::from_file(path)?)
    }
}

impl Trajectory {
    pub fn from_trj_str(contents: &str) -> Result<Self, ParameterError> {
        let mut samples: Vec<Joints> = Vec::new();
        for (n, line) in contents.lines().enumerate() {
            let data = line.split('#').next().unwrap_or("");
            let columns: Vec<&str> = data.split_whitespace().collect();
            if columns.is_empty() {
                continue;
            }
            if columns.len() != 3 {
                return Err(ParameterError::InvalidLength { expected: 3, found: columns.len() });
            }
            let mut joints: Joints = [0.0; 3];
            for (i, column) in columns.iter().enumerate() {
                joints[i] = column.parse::<f64>().map_err(|_| ParameterError::ParseError(
                    format!("line {}: '{}' is not a number", n + 1, column)))?;
            }
            if !is_valid(&joints) {
                return Err(ParameterError::ParseError(
                    format!("line {}: sample {:?} is not finite", n + 1, joints)));
            }
            samples.push(joints);
        }
        debug!("read trajectory of {} samples", samples.len());
        Ok(Trajectory::new(samples))
    }

    pub fn from_trj_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_trj_str(&contents)
    }
}
