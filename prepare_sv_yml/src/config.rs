use std::path::{Path, PathBuf};

use crate::sample::SamplePair;

/// Scalar and file parameters for the pipeline taken from the command line
#[derive(Debug, Clone)]
pub struct PipelineParams {
    reference: PathBuf,
    genome: String,
    target: PathBuf,
    neither: Option<PathBuf>,
    notboth: Option<PathBuf>,
    max_distance: i64,
    num_callers: i64,
    min_size: i64,
    same_strand: bool,
    same_type: bool,
    est_dist: bool,
}

impl PipelineParams {
    /// Parameters with default thresholds and merge flags
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(
        reference: P,
        genome: &str,
        target: Q,
    ) -> Self {
        Self {
            reference: reference.into(),
            genome: genome.to_owned(),
            target: target.into(),
            neither: None,
            notboth: None,
            max_distance: 1000,
            num_callers: 2,
            min_size: 30,
            same_strand: false,
            same_type: true,
            est_dist: false,
        }
    }

    pub fn set_neither(&mut self, p: PathBuf) {
        self.neither = Some(p)
    }
    pub fn set_notboth(&mut self, p: PathBuf) {
        self.notboth = Some(p)
    }
    pub fn set_max_distance(&mut self, x: i64) {
        self.max_distance = x
    }
    pub fn set_num_callers(&mut self, x: i64) {
        self.num_callers = x
    }
    pub fn set_min_size(&mut self, x: i64) {
        self.min_size = x
    }
    pub fn set_same_strand(&mut self, x: bool) {
        self.same_strand = x
    }
    pub fn set_same_type(&mut self, x: bool) {
        self.same_type = x
    }
    pub fn set_est_dist(&mut self, x: bool) {
        self.est_dist = x
    }

    pub fn reference(&self) -> &Path {
        &self.reference
    }
    pub fn genome(&self) -> &str {
        &self.genome
    }
    pub fn target(&self) -> &Path {
        &self.target
    }
    pub fn neither(&self) -> Option<&Path> {
        self.neither.as_deref()
    }
    pub fn notboth(&self) -> Option<&Path> {
        self.notboth.as_deref()
    }
    pub fn max_distance(&self) -> i64 {
        self.max_distance
    }
    pub fn num_callers(&self) -> i64 {
        self.num_callers
    }
    pub fn min_size(&self) -> i64 {
        self.min_size
    }
    pub fn same_strand(&self) -> bool {
        self.same_strand
    }
    pub fn same_type(&self) -> bool {
        self.same_type
    }
    pub fn est_dist(&self) -> bool {
        self.est_dist
    }
}

pub struct Config {
    params: PipelineParams,
    sample_pairs: Vec<SamplePair>,
    healthy_bams: Vec<PathBuf>,
}

impl Config {
    pub fn new(
        params: PipelineParams,
        sample_pairs: Vec<SamplePair>,
        healthy_bams: Vec<PathBuf>,
    ) -> Self {
        Self {
            params,
            sample_pairs,
            healthy_bams,
        }
    }

    pub fn params(&self) -> &PipelineParams {
        &self.params
    }

    pub fn sample_pairs(&self) -> &[SamplePair] {
        &self.sample_pairs
    }

    pub fn healthy_bams(&self) -> &[PathBuf] {
        &self.healthy_bams
    }
}
