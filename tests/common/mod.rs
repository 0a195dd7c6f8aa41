#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

pub mod temp_files {
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Write `content` to a temp file with the given extension (e.g. `"yaml"`)
    pub fn create_temp_site(content: &str, ext: &str) -> NamedTempFile {
        let mut temp = NamedTempFile::with_suffix(format!(".{ext}")).expect("create temp file");
        temp.write_all(content.as_bytes()).expect("write site definition");
        temp.flush().expect("flush");
        temp
    }

    pub fn create_temp_yaml(content: &str) -> NamedTempFile {
        create_temp_site(content, "yaml")
    }
}

pub const PORTFOLIO_YAML: &str = r##"
nav:
  - { label: Home, path: /, match: exact }
  - { label: Work, path: /work, match: prefix }
  - { label: Lab, path: /lab, match: prefix }
routes:
  "/": { title: Home }
  "/work": { title: Work }
  "/work/[slug]":
    title: Case Study
    tabs:
      - { id: overview, label: Overview, href: "#overview" }
  "/lab": { title: Lab }
  "/lab/[slug]": { title: Experiment }
"##;

pub const SHADOWED_YAML: &str = r#"
nav:
  - { label: Work, path: /work, match: prefix }
  - { label: Featured, path: /work/featured, match: exact }
routes:
  "/work": { title: Work }
"#;

pub const INVALID_YAML: &str = r#"
nav:
  - { label: Work, path: work, match: prefix }
routes:
  "/work/[id]": { title: Work }
"#;
