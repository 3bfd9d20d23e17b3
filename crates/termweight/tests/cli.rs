//! CLI integration tests for termweight commands.
//!
//! These tests focus on exit codes, written tables and JSON output rather than
//! terminal formatting, which may change.

// Integration test crates have no cfg(test) module
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

/// The two-document scenario corpus, one document per line.
const SCENARIO: &str = "The cat sat.\nThe dog sat on the mat.\n";

/// Helper to create a temp directory for tests.
fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

/// Helper to run `termweight` with HOME isolated to the provided directory.
fn termweight_with_home(home: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("termweight").unwrap();
    cmd.env("HOME", home).env_remove("TERMWEIGHT_LOG");
    cmd
}

/// A project directory with its own isolated home.
struct Project {
    /// Stand-in home directory.
    home: tempfile::TempDir,
    /// Working directory for commands.
    dir: tempfile::TempDir,
}

impl Project {
    /// Creates an empty project.
    fn new() -> Self {
        Self {
            home: temp_dir(),
            dir: temp_dir(),
        }
    }

    /// Creates a project containing the scenario corpus as `corpus.txt`.
    fn with_scenario() -> Self {
        let project = Self::new();
        project.write("corpus.txt", SCENARIO);
        project
    }

    /// Project root.
    fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a file relative to the project root.
    fn write(&self, name: &str, contents: &str) {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    /// Writes a root config file with the given body.
    fn config(&self, body: &str) {
        self.write(".termweight.toml", &format!("root = true\n{body}"));
    }

    /// Reads a file relative to the project root.
    fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path().join(name)).unwrap()
    }

    /// A command running in the project root.
    fn cmd(&self) -> Command {
        let mut cmd = termweight_with_home(self.home.path());
        cmd.current_dir(self.path());
        cmd
    }
}

/// Strips ANSI escape sequences from a string.
fn strip_ansi(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            output.push(ch);
        }
    }

    output
}

/// Runs a command expecting success and parses its stdout as JSON.
fn json_output(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

mod init {
    use super::*;

    #[test]
    fn creates_config_file() {
        let project = Project::new();

        project.cmd().arg("init").assert().success();

        let contents = project.read(".termweight.toml");
        assert!(contents.contains("[corpus]"));
        assert!(contents.contains("[pipeline]"));
        assert!(contents.contains("stem = true"));
        assert!(contents.contains("dir = \"outputs\""));
    }

    #[test]
    fn records_corpus_and_stage_flags() {
        let project = Project::with_scenario();

        project
            .cmd()
            .args(["init", "corpus.txt", "--format", "lines", "--no-stem"])
            .assert()
            .success()
            .stdout(predicate::str::contains("tf_idf_c_sw.csv"));

        let contents = project.read(".termweight.toml");
        assert!(contents.contains("path = \"corpus.txt\""));
        assert!(contents.contains("format = \"lines\""));
        assert!(contents.contains("stem = false"));

        project.cmd().arg("run").assert().success();
        assert!(project.path().join("outputs/tf_idf_c_sw.csv").is_file());
    }

    #[test]
    fn starts_from_parent_settings() {
        let project = Project::new();
        project.config("[pipeline]\nstopwords = \"extended\"\n");
        project.write("sub/.keep", "");

        project
            .cmd()
            .current_dir(project.path().join("sub"))
            .arg("init")
            .assert()
            .success();

        let contents = project.read("sub/.termweight.toml");
        assert!(contents.contains("stopwords = \"extended\""));
    }

    #[test]
    fn fails_if_config_exists() {
        let project = Project::new();
        project.write(".termweight.toml", "existing");

        project
            .cmd()
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"))
            .stderr(predicate::str::contains("use --force to overwrite"));

        assert_eq!(project.read(".termweight.toml"), "existing");
    }

    #[test]
    fn force_overwrites_invalid_config() {
        let project = Project::new();
        project.write(".termweight.toml", "[pipeline\nnot toml");

        project
            .cmd()
            .args(["init", "--force"])
            .assert()
            .success()
            .stderr(predicate::str::contains("ignoring existing configuration"));

        let contents = project.read(".termweight.toml");
        assert!(contents.contains("[output]"));
        assert!(!contents.contains("not toml"));
    }

    #[test]
    fn updates_gitignore_when_present() {
        let project = Project::new();
        project.write(".gitignore", "*.log");

        project.cmd().arg("init").assert().success();

        assert_eq!(project.read(".gitignore"), "*.log\noutputs/\n");
    }

    #[test]
    fn gitignore_uses_chosen_out_dir() {
        let project = Project::new();
        project.write(".gitignore", "*.log\n");

        project
            .cmd()
            .args(["init", "-o", "tables"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Added tables/ to .gitignore"));

        assert_eq!(project.read(".gitignore"), "*.log\ntables/\n");
        assert!(project.read(".termweight.toml").contains("dir = \"tables\""));
    }

    #[test]
    fn does_not_duplicate_gitignore_entry() {
        let project = Project::new();
        project.write(".gitignore", "*.log\noutputs/\n");

        project.cmd().arg("init").assert().success();

        assert_eq!(project.read(".gitignore"), "*.log\noutputs/\n");
    }

    #[test]
    fn global_writes_home_config() {
        let project = Project::new();

        project
            .cmd()
            .args(["init", "--global", "--keep-stopwords"])
            .assert()
            .success();

        let global = fs::read_to_string(project.home.path().join(".termweight.toml")).unwrap();
        assert!(global.contains("[pipeline]"));
        assert!(global.contains("remove_stopwords = false"));
        assert!(!global.contains("[corpus]"));
        assert!(!project.path().join(".termweight.toml").exists());
    }

    #[test]
    fn global_rejects_corpus() {
        let project = Project::new();

        project
            .cmd()
            .args(["init", "--global", "corpus.txt"])
            .assert()
            .failure();

        assert!(!project.home.path().join(".termweight.toml").exists());
    }
}

mod run {
    use super::*;

    #[test]
    fn writes_default_tables() {
        let project = Project::with_scenario();

        let output = project
            .cmd()
            .args(["run", "corpus.txt"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let stdout = strip_ansi(&String::from_utf8_lossy(&output));
        assert!(stdout.contains("Done: 2 documents, 5 tokens, 4 distinct terms"));
        for name in [
            "outputs/token_frequencies_c_sw_st.csv",
            "outputs/idf_c_sw_st.csv",
            "outputs/tf_idf_c_sw_st.csv",
        ] {
            assert!(project.path().join(name).is_file(), "{name}");
        }
    }

    #[test]
    fn stage_flags_change_tables_and_suffix() {
        let project = Project::with_scenario();

        project
            .cmd()
            .args(["run", "corpus.txt", "--keep-stopwords", "--no-stem"])
            .assert()
            .success();

        assert_eq!(
            project.read("outputs/token_frequencies_c.csv"),
            "document,word,frequency\n\
             0,the,1\n0,cat,1\n0,sat,1\n\
             1,the,2\n1,dog,1\n1,sat,1\n1,on,1\n1,mat,1\n"
        );
        assert!(project.read("outputs/idf_c.csv").starts_with("word,idf\n"));
        assert!(
            project
                .read("outputs/tf_idf_c.csv")
                .starts_with("document,word,tfidf\n")
        );
    }

    #[test]
    fn json_summary() {
        let project = Project::with_scenario();

        let json = json_output(project.cmd().args(["run", "corpus.txt", "--json"]));

        assert_eq!(json["suffix"], "_c_sw_st");
        assert_eq!(json["documents"], 2);
        assert_eq!(json["tokens"], 5);
        assert_eq!(json["distinct_terms"], 4);
        assert_eq!(json["weighted_rows"], 5);
        let tfidf = json["tables"]["tfidf"].as_str().unwrap();
        assert!(tfidf.ends_with("tf_idf_c_sw_st.csv"));
    }

    #[test]
    fn extended_lexicon_uses_own_suffix() {
        let project = Project::with_scenario();

        project
            .cmd()
            .args(["run", "corpus.txt", "--stopwords", "extended"])
            .assert()
            .success();

        assert!(project.path().join("outputs/tf_idf_c_swx_st.csv").is_file());
    }

    #[test]
    fn uses_configured_corpus_and_output() {
        let project = Project::with_scenario();
        project.config(
            "[corpus]\npath = \"corpus.txt\"\n\n[output]\ndir = \"tables\"\n\n[pipeline]\nstem = false\n",
        );
        fs::create_dir_all(project.path().join("sub")).unwrap();

        project
            .cmd()
            .current_dir(project.path().join("sub"))
            .arg("run")
            .assert()
            .success();

        assert!(project.path().join("tables/tf_idf_c_sw.csv").is_file());
    }

    #[test]
    fn out_dir_flag_overrides_config() {
        let project = Project::with_scenario();
        project.config("[output]\ndir = \"tables\"\n");

        project
            .cmd()
            .args(["run", "corpus.txt", "-o", "elsewhere"])
            .assert()
            .success();

        assert!(project.path().join("elsewhere/idf_c_sw_st.csv").is_file());
        assert!(!project.path().join("tables").exists());
    }

    #[test]
    fn directory_corpus() {
        let project = Project::new();
        project.write("docs/b.txt", "The dog sat on the mat.");
        project.write("docs/a.txt", "The cat sat.");

        let json = json_output(project.cmd().args(["run", "docs", "--json"]));

        assert_eq!(json["documents"], 2);
        let tf = project.read("outputs/token_frequencies_c_sw_st.csv");
        assert!(tf.starts_with("document,word,frequency\n0,cat,1\n"));
    }

    #[test]
    fn missing_corpus_fails() {
        let project = Project::new();

        project
            .cmd()
            .arg("run")
            .assert()
            .failure()
            .stderr(predicate::str::contains("no corpus given"));
    }

    #[test]
    fn unreadable_corpus_fails() {
        let project = Project::new();

        project
            .cmd()
            .args(["run", "nope.txt"])
            .assert()
            .failure()
            .stderr(predicate::str::starts_with("error:"));
    }

    #[test]
    fn empty_corpus_fails_without_writing() {
        let project = Project::new();
        project.write("corpus.txt", "\n\n   \n");

        project
            .cmd()
            .args(["run", "corpus.txt"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("corpus is empty"));

        assert!(!project.path().join("outputs").exists());
    }

    #[test]
    fn verbose_logs_to_stderr() {
        let project = Project::with_scenario();

        project
            .cmd()
            .args(["-v", "run", "corpus.txt", "--json"])
            .assert()
            .success()
            .stderr(predicate::str::contains("starting pipeline run"))
            .stdout(predicate::str::contains("starting pipeline run").not());
    }

    #[test]
    fn quiet_by_default() {
        let project = Project::with_scenario();

        project
            .cmd()
            .args(["run", "corpus.txt", "--json"])
            .assert()
            .success()
            .stderr(predicate::str::is_empty());
    }
}

mod preview {
    use super::*;

    /// A project that has already run the default pipeline.
    fn after_run() -> Project {
        let project = Project::with_scenario();
        project.cmd().args(["run", "corpus.txt"]).assert().success();
        project
    }

    #[test]
    fn shows_each_document() {
        let project = after_run();

        let output = project
            .cmd()
            .arg("preview")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let stdout = strip_ansi(&String::from_utf8_lossy(&output));
        assert!(stdout.contains("Document 0"));
        assert!(stdout.contains("Document 1"));
        assert!(stdout.contains("Top 2:"));
        assert!(stdout.contains("cat"));
    }

    #[test]
    fn json_top_and_bottom() {
        let project = after_run();

        let json = json_output(project.cmd().args([
            "preview", "--json", "--top", "1", "--bottom", "1",
        ]));

        let documents = json.as_array().unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0]["document"], 0);
        assert_eq!(documents[0]["top"][0]["word"], "cat");
        assert_eq!(documents[0]["bottom"][0]["word"], "sat");
        assert_eq!(documents[1]["top"][0]["word"], "dog");
        assert_eq!(documents[1]["bottom"][0]["word"], "sat");
        assert_eq!(documents[1]["bottom"][0]["tfidf"], 0.0);
    }

    #[test]
    fn configured_counts_apply() {
        let project = after_run();
        project.config("[preview]\ntop = 1\nbottom = 0\n");

        let json = json_output(project.cmd().args(["preview", "--json"]));

        assert_eq!(json[1]["top"].as_array().unwrap().len(), 1);
        assert!(json[1]["bottom"].as_array().unwrap().is_empty());
    }

    #[test]
    fn explicit_table_path() {
        let project = after_run();

        let json = json_output(project.cmd().args([
            "preview",
            "outputs/tf_idf_c_sw_st.csv",
            "--json",
        ]));

        assert_eq!(json.as_array().unwrap().len(), 2);
    }

    #[test]
    fn stage_flags_pick_the_table() {
        let project = Project::with_scenario();
        project
            .cmd()
            .args(["run", "corpus.txt", "--no-stem"])
            .assert()
            .success();

        project
            .cmd()
            .arg("preview")
            .assert()
            .failure()
            .stderr(predicate::str::contains("termweight run"));

        project
            .cmd()
            .args(["preview", "--no-stem"])
            .assert()
            .success();
    }

    #[test]
    fn rejects_malformed_table() {
        let project = Project::new();
        project.write("bad.csv", "document,word,weight\n0,cat,0.5\n");

        project
            .cmd()
            .args(["preview", "bad.csv"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("expected header"));
    }
}

mod status {
    use super::*;

    #[test]
    fn no_config_succeeds() {
        let project = Project::new();

        project
            .cmd()
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("No configuration files found."));
    }

    #[test]
    fn valid_config_reports_no_issues() {
        let project = Project::with_scenario();
        project.config("[corpus]\npath = \"corpus.txt\"\n");

        let output = project
            .cmd()
            .arg("status")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let stdout = strip_ansi(&String::from_utf8_lossy(&output));
        assert!(stdout.contains(".termweight.toml (root)"));
        assert!(stdout.contains("normalize, remove-stopwords (standard), stem"));
        assert!(stdout.contains("suffix _c_sw_st"));
        assert!(stdout.contains("[not yet written]"));
        assert!(stdout.contains("No issues found."));
    }

    #[test]
    fn marks_global_config() {
        let project = Project::new();
        fs::write(
            project.home.path().join(".termweight.toml"),
            "[preview]\ntop = 3\n",
        )
        .unwrap();

        let output = project
            .cmd()
            .arg("status")
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();

        let stdout = strip_ansi(&String::from_utf8_lossy(&output));
        assert!(stdout.contains("(global)"));
        assert!(stdout.contains("no corpus path is configured"));
    }

    #[test]
    fn missing_corpus_is_a_warning() {
        let project = Project::new();
        project.config("[corpus]\npath = \"gone.txt\"\n");

        let output = project
            .cmd()
            .arg("status")
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();

        let stdout = strip_ansi(&String::from_utf8_lossy(&output));
        assert!(stdout.contains("[missing]"));
        assert!(stdout.contains("Warnings (1):"));
    }
}

mod config {
    use super::*;

    #[test]
    fn prints_effective_settings() {
        let project = Project::new();
        project.config("[pipeline]\nstem = false\n");

        project
            .cmd()
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("stem = false"))
            .stdout(predicate::str::contains("normalize = true"));
    }

    #[test]
    fn invalid_config_fails() {
        let project = Project::new();
        project.write(".termweight.toml", "[pipeline\n");

        project
            .cmd()
            .arg("config")
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load configuration"));
    }
}
