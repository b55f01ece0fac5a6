//! End-to-End CLI Tests for ngtrap

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get path to test fixtures
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Get a command pointing to the ngtrap binary
fn ngtrap() -> Command {
    let mut cmd = cargo_bin_cmd!("ngtrap");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    std::fs::write(path, body).expect("write");
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn no_arguments_prints_usage_and_fails() {
        ngtrap()
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("FOLDER_PATH"))
            .stdout(predicate::str::contains("--scan-component"));
    }

    #[test]
    fn help_prints_usage_and_fails() {
        ngtrap()
            .arg("--help")
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("--scan-component"));

        ngtrap()
            .args(["-h", "."])
            .assert()
            .failure()
            .stdout(predicate::str::contains("Usage"));
    }

    #[test]
    fn shows_version() {
        ngtrap()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn missing_folder_warns_and_later_folders_still_run() {
        let temp = TempDir::new().expect("temp dir");
        write(temp.path(), "good/a.html", "<mat-icon>home</mat-icon>\n");
        write(temp.path(), "good/a.ts", "export class A {}\n");

        ngtrap()
            .current_dir(temp.path())
            .args(["missing", "good"])
            .assert()
            .success()
            .stdout(predicate::str::contains("a.html]"))
            .stdout(predicate::str::contains(
                "import { MatIconModule } from '@angular/material/icon';",
            ))
            .stderr(predicate::str::contains("skipping unreadable path"));
    }
}

// ============================================
// Scan Tests
// ============================================

mod scan_mode {
    use super::*;

    #[test]
    fn advises_each_pair() {
        let fixture = fixtures_path().join("ng_app");

        ngtrap()
            .current_dir(&fixture)
            .arg(".")
            .assert()
            .success()
            .stdout(predicate::str::contains("home.component.html]"))
            .stdout(predicate::str::contains(
                "import { CommonModule } from '@angular/common';\n\n\
                 import { MatButtonModule } from '@angular/material/button';\n\
                 import { MatDialogModule, MatDialog } from '@angular/material/dialog';\n\
                 import { MatToolbarModule } from '@angular/material/toolbar';\n---",
            ))
            .stdout(predicate::str::contains(
                "annotation-imports: ---\nCommonModule\n\nMatButtonModule\nMatDialogModule\nMatToolbarModule\n---",
            ))
            .stdout(predicate::str::contains(
                "imports: ---\nimport { MatCardModule } from '@angular/material/card';\n---",
            ))
            .stdout(predicate::str::contains("UserCardComponent").not());
    }

    #[test]
    fn skips_orphans_and_stop_folders() {
        let fixture = fixtures_path().join("ng_app");

        ngtrap()
            .current_dir(&fixture)
            .arg(".")
            .assert()
            .success()
            .stdout(predicate::str::contains("orphan.component.html").not())
            .stdout(predicate::str::contains("spec.html").not())
            .stderr(predicate::str::contains("cannot reach .ts counter part"));
    }

    #[test]
    fn scan_component_learns_project_selectors() {
        let fixture = fixtures_path().join("ng_app");

        ngtrap()
            .current_dir(&fixture)
            .args(["--scan-component", "."])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "import { MatToolbarModule } from '@angular/material/toolbar';\n\n\
                 import { UserCardComponent } from '../user-card/user-card.component';\n---",
            ))
            .stdout(predicate::str::contains("MatToolbarModule\n\nUserCardComponent\n---"))
            .stderr(predicate::str::contains("found component: \"app-user-card\""));
    }

    #[test]
    fn prints_exact_blocks() {
        let temp = TempDir::new().expect("temp dir");
        write(temp.path(), "a/a.component.html", "<div *ngIf=\"x\"></div>\n");
        write(temp.path(), "a/a.component.ts", "export class A {}\n");
        write(temp.path(), "b/b.component.html", "<p>plain</p>\n");
        write(temp.path(), "b/b.component.ts", "export class B {}\n");

        let root = std::path::absolute(temp.path()).expect("absolute");
        let expected = format!(
            "* process [{a}]\n\
             imports: ---\n\
             import {{ CommonModule }} from '@angular/common';\n\
             ---\n\
             annotation-imports: ---\n\
             CommonModule\n\
             ---\n\
             * process [{b}]\n\
             imports: =empty=\n\
             annotation-imports: =empty=\n",
            a = root.join("a").join("a.component.html").display(),
            b = root.join("b").join("b.component.html").display(),
        );

        ngtrap()
            .current_dir(temp.path())
            .arg(&root)
            .assert()
            .success()
            .stdout(expected);
    }

    #[test]
    fn verbose_logs_trap_hits() {
        let temp = TempDir::new().expect("temp dir");
        write(temp.path(), "a.html", "<mat-slider></mat-slider>\n");
        write(temp.path(), "a.ts", "");

        ngtrap()
            .current_dir(temp.path())
            .args(["-v", "."])
            .assert()
            .success()
            .stderr(predicate::str::contains("have element: slider"));
    }
}

// ============================================
// Configuration Tests
// ============================================

mod config {
    use super::*;

    #[test]
    fn config_file_adds_definitions_and_stop_folders() {
        let temp = TempDir::new().expect("temp dir");
        write(
            temp.path(),
            ".ngtrap/config.toml",
            r#"
stop_folders = ["generated"]

[[definitions]]
key = "charts"
tier = 1
imports = ["import { NgChartsModule } from 'ng2-charts';"]

[markup_traps]
baseChart = "charts"
"#,
        );
        write(temp.path(), "src/c.html", "<canvas baseChart [data]=\"d\"></canvas>\n");
        write(temp.path(), "src/c.ts", "export class C {}\n");
        write(temp.path(), "generated/g.html", "<canvas baseChart></canvas>\n");
        write(temp.path(), "generated/g.ts", "export class G {}\n");

        ngtrap()
            .current_dir(temp.path())
            .arg(".")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "import { NgChartsModule } from 'ng2-charts';",
            ))
            .stdout(predicate::str::contains("g.html").not());
    }

    #[test]
    fn explicit_config_path() {
        let temp = TempDir::new().expect("temp dir");
        write(
            temp.path(),
            "ngtrap.toml",
            r#"
[logic_traps]
'(private|public)\s+[a-zA-Z0-9_]+:\s+HttpClient' = "http"

[[definitions]]
key = "http"
tier = 0
imports = ["import { HttpClientModule } from '@angular/common/http';"]
"#,
        );
        write(temp.path(), "src/h.html", "<p></p>\n");
        write(temp.path(), "src/h.ts", "  constructor(private http: HttpClient) {}\n");

        ngtrap()
            .current_dir(temp.path())
            .args(["--config", "ngtrap.toml", "src"])
            .assert()
            .success()
            .stdout(predicate::str::contains("annotation-imports: ---\nHttpClientModule\n---"));
    }

    #[test]
    fn unknown_trap_key_only_warns() {
        let temp = TempDir::new().expect("temp dir");
        write(
            temp.path(),
            ".ngtrap/config.toml",
            "[markup_traps]\nmat-ghost = \"ghost\"\n",
        );
        write(temp.path(), "x.html", "<mat-icon></mat-icon>\n");
        write(temp.path(), "x.ts", "");

        ngtrap()
            .current_dir(temp.path())
            .arg(".")
            .assert()
            .success()
            .stdout(predicate::str::contains("MatIconModule"))
            .stderr(predicate::str::contains("not found: [ghost]"));
    }

    #[test]
    fn malformed_config_is_fatal() {
        let temp = TempDir::new().expect("temp dir");
        write(temp.path(), ".ngtrap/config.toml", "stop_folders = 7\n");

        ngtrap()
            .current_dir(temp.path())
            .arg(".")
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load configuration"));
    }
}
