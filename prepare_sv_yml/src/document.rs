use std::{
    fmt::{self, Formatter},
    path::{Path, PathBuf},
};

use crate::config::{Config, PipelineParams};

/// Helper scripts shipped with the pipeline, listed before the merge parameters
const PRE_MERGE_SCRIPTS: [(&str, &str); 4] = [
    ("extractSplitReads_script", "helper/extractSplitReads_BwaMem"),
    ("lumpy_prep_script", "helper/lumpy_prep.sh"),
    ("manta_config", "helper/configManta.py"),
    ("manta_config_ini", "helper/configManta.py.ini"),
];

/// Helper scripts listed after the healthy BAMs
const POST_MERGE_SCRIPTS: [(&str, &str); 4] = [
    ("modify_vcf_script", "helper/modify_vcf.py"),
    ("modify_survivor_script", "helper/modify_SURVIVOR.py"),
    ("aggregate_bedpe_script", "helper/aggregate_bedpe.sh"),
    ("aggregate_healthy_script", "helper/aggregate_healthy_bedpe.sh"),
];

/// How each item of a file list is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListWrap {
    Plain,
    // Each item is itself a one element list
    Nested,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    File(PathBuf),
    FileList(Vec<PathBuf>, ListWrap),
    Scalar(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    key: &'static str,
    value: Value,
}

impl Entry {
    fn file<P: Into<PathBuf>>(key: &'static str, p: P) -> Self {
        Self {
            key,
            value: Value::File(p.into()),
        }
    }

    fn scalar<T: ToString>(key: &'static str, x: T) -> Self {
        Self {
            key,
            value: Value::Scalar(x.to_string()),
        }
    }

    fn file_list(key: &'static str, v: Vec<PathBuf>, wrap: ListWrap) -> Self {
        Self {
            key,
            value: Value::FileList(v, wrap),
        }
    }

    pub fn key(&self) -> &str {
        self.key
    }
}

fn file_ref(p: &Path) -> String {
    format!("{{class: File, path: {}}}", p.display())
}

/// Write a flow style list under `key`, one item per line:
///
/// ```text
/// key:
///  [item0,
///  item1]
/// ```
///
/// An empty list is written as ` []`
pub fn format_list<S: AsRef<str>>(key: &str, items: &[S], wrap: ListWrap) -> String {
    let mut s = format!("{}:\n [", key);
    if items.is_empty() {
        s.push_str("]\n");
        return s;
    }
    let last = items.len() - 1;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        match wrap {
            ListWrap::Plain => s.push_str(item.as_ref()),
            ListWrap::Nested => {
                s.push('[');
                s.push_str(item.as_ref());
                s.push(']');
            }
        }
        s.push_str(if i < last { ",\n" } else { "]\n" });
    }
    s
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.value {
            Value::File(p) => writeln!(f, "{}:\n class: File\n path: {}", self.key, p.display()),
            Value::Scalar(x) => writeln!(f, "{}: {}", self.key, x),
            Value::FileList(v, wrap) => {
                let items: Vec<_> = v.iter().map(|p| file_ref(p)).collect();
                write!(f, "{}", format_list(self.key, &items, *wrap))
            }
        }
    }
}

/// The configuration document: an ordered list of entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    entries: Vec<Entry>,
}

impl Document {
    /// Assemble the document for the pipeline in its fixed entry order
    pub fn assemble(
        params: &PipelineParams,
        tumor_bams: Vec<PathBuf>,
        control_bams: Vec<PathBuf>,
        healthy_bams: Vec<PathBuf>,
    ) -> Self {
        let mut entries = vec![
            Entry::file("reference", params.reference()),
            Entry::scalar("ref_genome", params.genome()),
            Entry::file_list("tumor_bams", tumor_bams, ListWrap::Plain),
            Entry::file_list("control_bams", control_bams, ListWrap::Plain),
        ];
        entries.extend(PRE_MERGE_SCRIPTS.iter().map(|&(k, p)| Entry::file(k, p)));
        entries.extend([
            Entry::scalar("max_distance_to_merge", params.max_distance()),
            Entry::scalar("minimum_sv_calls", params.num_callers()),
            Entry::scalar("minimum_sv_size", params.min_size()),
            Entry::scalar("same_strand", params.same_strand()),
            Entry::scalar("same_type", params.same_type()),
            Entry::scalar("estimate_sv_distance", params.est_dist()),
            Entry::file_list("healthy_bams", healthy_bams, ListWrap::Nested),
        ]);
        entries.extend(POST_MERGE_SCRIPTS.iter().map(|&(k, p)| Entry::file(k, p)));
        entries.push(Entry::file("target_regions", params.target()));
        if let Some(p) = params.neither() {
            entries.push(Entry::file("neither_region", p))
        }
        if let Some(p) = params.notboth() {
            entries.push(Entry::file("notboth_region", p))
        }
        Self { entries }
    }

    pub fn from_config(cfg: &Config) -> Self {
        let (tumor, control): (Vec<_>, Vec<_>) = cfg
            .sample_pairs()
            .iter()
            .map(|s| (s.tumor().to_owned(), s.control().to_owned()))
            .unzip();
        Self::assemble(cfg.params(), tumor, control, cfg.healthy_bams().to_vec())
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for e in self.entries.iter() {
            write!(f, "{}", e)?
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::SamplePair;

    fn example_config(params: PipelineParams) -> Config {
        Config::new(
            params,
            vec![
                SamplePair::new("a.bam", "b.bam"),
                SamplePair::new("c.bam", "d.bam"),
            ],
            vec![PathBuf::from("h1.bam")],
        )
    }

    fn default_params() -> PipelineParams {
        PipelineParams::new("ref.fa", "hg19", "t.bed")
    }

    #[test]
    fn list_plain() {
        let s = format_list("x", &["a", "b", "c"], ListWrap::Plain);
        assert_eq!(s, "x:\n [a,\n b,\n c]\n");
    }

    #[test]
    fn list_single_nested() {
        let s = format_list("x", &["a"], ListWrap::Nested);
        assert_eq!(s, "x:\n [[a]]\n");
        let s = format_list("x", &["a", "b"], ListWrap::Nested);
        assert_eq!(s, "x:\n [[a],\n [b]]\n");
    }

    #[test]
    fn list_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(format_list("x", &empty, ListWrap::Plain), "x:\n []\n");
        assert_eq!(format_list("x", &empty, ListWrap::Nested), "x:\n []\n");
    }

    #[test]
    fn example_document() {
        let s = Document::from_config(&example_config(default_params())).to_string();
        assert!(s.starts_with("reference:\n class: File\n path: ref.fa\nref_genome: hg19\n"));
        assert!(s.contains(
            "tumor_bams:\n [{class: File, path: a.bam},\n {class: File, path: c.bam}]\n"
        ));
        assert!(s.contains(
            "control_bams:\n [{class: File, path: b.bam},\n {class: File, path: d.bam}]\n"
        ));
        assert!(s.contains("healthy_bams:\n [[{class: File, path: h1.bam}]]\n"));
        assert!(s.contains("max_distance_to_merge: 1000\nminimum_sv_calls: 2\nminimum_sv_size: 30\n"));
        assert!(s.contains("same_strand: false\nsame_type: true\nestimate_sv_distance: false\n"));
        assert!(s.ends_with("target_regions:\n class: File\n path: t.bed\n"));
        assert!(!s.contains("neither_region"));
        assert!(!s.contains("notboth_region"));
    }

    #[test]
    fn entry_order() {
        let mut params = default_params();
        params.set_neither(PathBuf::from("blacklist.bed"));
        params.set_notboth(PathBuf::from("lcr.bed"));
        let doc = Document::from_config(&example_config(params));
        let keys: Vec<_> = doc.entries().iter().map(|e| e.key()).collect();
        assert_eq!(
            keys,
            vec![
                "reference",
                "ref_genome",
                "tumor_bams",
                "control_bams",
                "extractSplitReads_script",
                "lumpy_prep_script",
                "manta_config",
                "manta_config_ini",
                "max_distance_to_merge",
                "minimum_sv_calls",
                "minimum_sv_size",
                "same_strand",
                "same_type",
                "estimate_sv_distance",
                "healthy_bams",
                "modify_vcf_script",
                "modify_survivor_script",
                "aggregate_bedpe_script",
                "aggregate_healthy_script",
                "target_regions",
                "neither_region",
                "notboth_region",
            ]
        );
        let s = doc.to_string();
        assert!(s.ends_with(
            "neither_region:\n class: File\n path: blacklist.bed\nnotboth_region:\n class: File\n path: lcr.bed\n"
        ));
    }

    #[test]
    fn only_notboth_region() {
        let mut params = default_params();
        params.set_notboth(PathBuf::from("lcr.bed"));
        let s = Document::from_config(&example_config(params)).to_string();
        assert!(!s.contains("neither_region"));
        assert!(s.contains("notboth_region:\n class: File\n path: lcr.bed\n"));
    }

    #[test]
    fn merge_parameters() {
        let mut params = default_params();
        params.set_max_distance(500);
        params.set_num_callers(3);
        params.set_min_size(50);
        params.set_same_strand(true);
        params.set_same_type(false);
        params.set_est_dist(true);
        let s = Document::from_config(&example_config(params)).to_string();
        assert!(s.contains("max_distance_to_merge: 500\nminimum_sv_calls: 3\nminimum_sv_size: 50\n"));
        assert!(s.contains("same_strand: true\nsame_type: false\nestimate_sv_distance: true\n"));
    }

    #[test]
    fn helper_scripts() {
        let s = Document::from_config(&example_config(default_params())).to_string();
        assert!(s.contains("manta_config_ini:\n class: File\n path: helper/configManta.py.ini\n"));
        assert!(s.contains(
            "aggregate_healthy_script:\n class: File\n path: helper/aggregate_healthy_bedpe.sh\n"
        ));
    }

    #[test]
    fn empty_manifests() {
        let doc = Document::assemble(&default_params(), Vec::new(), Vec::new(), Vec::new());
        let s = doc.to_string();
        assert!(s.contains("tumor_bams:\n []\ncontrol_bams:\n []\n"));
        assert!(s.contains("healthy_bams:\n []\n"));
    }
}
