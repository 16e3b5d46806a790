use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;

const PAGE: &str = r#"<html><body>
<p>Contact us: +55 (11) 91234-5678 or 551198887766 thanks</p>
<a href="mailto:vendas@loja.com.br">vendas@loja.com.br</a>
<span data-id="1551198887766">pedido</span>
</body></html>"#;

fn run(temp: &TempDir, args: &[&str]) -> Output {
    let db_path = temp.path().join("contacts.sqlite3");
    cargo_bin_cmd!("zapharvest")
        .env("XDG_CONFIG_HOME", temp.path().join("config"))
        .args(["--db-path", db_path.to_str().expect("db path")])
        .args(args)
        .output()
        .expect("run command")
}

fn run_json(temp: &TempDir, args: &[&str]) -> Value {
    let mut full = vec!["--json"];
    full.extend_from_slice(args);
    let output = run(temp, &full);
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

fn write_page(dir: &Path, name: &str, body: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, body).expect("write page");
    path.to_str().expect("page path").to_string()
}

#[test]
fn cli_extract_list_send_flow() {
    let temp = TempDir::new().expect("temp dir");
    let page = write_page(temp.path(), "page.html", PAGE);

    let first = run_json(
        &temp,
        &["extract", "--file", &page, "--domain", "loja.com.br"],
    );
    let outcome = &first.as_array().expect("array")[0];
    assert_eq!(outcome["report"]["saved"], 2);
    assert_eq!(outcome["report"]["duplicates"], 0);
    assert_eq!(outcome["emails"][0], "vendas@loja.com.br");

    let second = run_json(
        &temp,
        &["extract", "--file", &page, "--domain", "loja.com.br"],
    );
    assert_eq!(second[0]["report"]["saved"], 0);
    assert_eq!(second[0]["report"]["duplicates"], 2);

    let list = run_json(&temp, &["list"]);
    let items = list.as_array().expect("array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["whatsapp"], "551198887766");
    assert_eq!(items[0]["domain"], "loja.com.br");
    assert_eq!(items[0]["email"], "vendas@loja.com.br");
    assert_eq!(items[0]["sent"], false);

    let next = run_json(&temp, &["send-next"]);
    assert_eq!(next["status"], "selected");
    assert_eq!(next["contact"]["whatsapp"], "5511912345678");
    assert_eq!(
        next["url"],
        "https://web.whatsapp.com/send?phone=5511912345678"
    );

    run_json(&temp, &["send-next"]);
    let done = run_json(&temp, &["send-next"]);
    assert_eq!(done["status"], "exhausted");

    let counts = run_json(&temp, &["count"]);
    assert_eq!(counts["total"], 2);
    assert_eq!(counts["unsent"], 0);
}

#[test]
fn cli_extract_without_numbers_reports_nothing() {
    let temp = TempDir::new().expect("temp dir");
    let page = write_page(temp.path(), "empty.html", "<p>sem telefone aqui</p>");

    let output = run(&temp, &["extract", "--file", &page]);
    assert!(output.status.success(), "command failed: {:?}", output);
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("no WhatsApp numbers found"));

    let counts = run_json(&temp, &["count"]);
    assert_eq!(counts["total"], 0);
}

#[test]
fn cli_extract_json_keeps_counts_when_a_later_page_fails() {
    let temp = TempDir::new().expect("temp dir");
    let page = write_page(temp.path(), "page.html", PAGE);
    let missing = temp.path().join("missing.html");
    let missing = missing.to_str().expect("missing path");

    let output = run(
        &temp,
        &["--json", "extract", "--file", &page, "--file", missing],
    );
    assert_eq!(output.status.code(), Some(2));
    let printed: Value = serde_json::from_slice(&output.stdout).expect("parse json");
    let outcomes = printed.as_array().expect("array");
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0]["report"]["saved"], 2);
    assert_eq!(outcomes[0]["report"]["duplicates"], 0);

    assert_eq!(run_json(&temp, &["count"])["total"], 2);
}

#[test]
fn cli_extract_requires_a_source() {
    let temp = TempDir::new().expect("temp dir");
    let output = run(&temp, &["extract"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn cli_reset_requires_confirmation() {
    let temp = TempDir::new().expect("temp dir");
    let page = write_page(temp.path(), "page.html", PAGE);
    run_json(&temp, &["extract", "--file", &page]);

    let refused = run(&temp, &["reset"]);
    assert_eq!(refused.status.code(), Some(3));
    assert_eq!(run_json(&temp, &["count"])["total"], 2);

    let reset = run_json(&temp, &["reset", "--yes"]);
    assert_eq!(reset["removed"], 2);
    assert_eq!(run_json(&temp, &["count"])["total"], 0);
    assert!(run_json(&temp, &["list"])
        .as_array()
        .expect("array")
        .is_empty());
}
